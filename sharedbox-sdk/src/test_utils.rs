//! Stub-server helpers shared by the unit tests.

use httpmock::prelude::*;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use crate::constants::SERVICE_URL_PATH;
use crate::{JsonClient, SharedBoxClient};

pub(crate) const TOKEN: &str = "token";
pub(crate) const USER_ID: u64 = 1;

/// Discovery answering with the stub server's own root.
pub(crate) async fn mock_discovery(server: &MockServer) -> httpmock::Mock<'_> {
    let root = server.url("/");
    server
        .mock_async(|when, then| {
            when.method(GET).path(SERVICE_URL_PATH);
            then.status(200).body(root);
        })
        .await
}

pub(crate) fn json_client(server: &MockServer) -> JsonClient {
    JsonClient::new(TOKEN, USER_ID, server.base_url()).unwrap()
}

pub(crate) fn sharedbox_client(server: &MockServer) -> SharedBoxClient {
    SharedBoxClient::from_json_client(json_client(server))
}

/// A bare HTTP/1.1 server for status lines httpmock cannot produce.
///
/// Discovery is answered with the server's own root; every other request gets
/// `status_line` and an empty body. Returns the base URL.
pub(crate) async fn raw_server(status_line: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let root = format!("{base}/");

    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let mut buf = vec![0u8; 8192];
            let n = stream.read(&mut buf).await.unwrap_or(0);
            let request = String::from_utf8_lossy(&buf[..n]);

            let response = if request.contains(SERVICE_URL_PATH) {
                format!(
                    "HTTP/1.1 200 OK\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{root}",
                    root.len()
                )
            } else {
                format!("{status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n")
            };
            let _ = stream.write_all(response.as_bytes()).await;
        }
    });

    base
}
