use std::sync::Once;

use httpmock::prelude::*;
use sharedbox::{FixedClock, SharedBoxClient};

pub const TOKEN: &str = "token";
pub const USER_ID: u64 = 1;
pub const CLOCK_MILLIS: u64 = 1010;

static TRACING_INIT: Once = Once::new();

/// Initializes the tracing subscriber for tests.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(std::env::var("TRACING").unwrap_or_else(|_| "info".to_string()))
            // Use with_test_writer to ensure logs are captured correctly by the test runner.
            .with_test_writer()
            .init();
    });
}

/// A stub SharedBox server whose discovery endpoint points at `/v1/`.
pub async fn start_server() -> MockServer {
    init_tracing();

    let server = MockServer::start_async().await;
    let root = server.url("/v1/");
    server
        .mock_async(|when, then| {
            when.method(GET).path("/services/sharedbox/server/url");
            then.status(200).body(root);
        })
        .await;

    server
}

/// A client with cache busting on and a clock stopped at [`CLOCK_MILLIS`].
pub fn client(server: &MockServer) -> SharedBoxClient {
    SharedBoxClient::builder(TOKEN, USER_ID, server.base_url())
        .cache_busting(true)
        .clock(FixedClock(CLOCK_MILLIS))
        .user_agent_extra("e2e")
        .build_sharedbox_client()
        .unwrap()
}
