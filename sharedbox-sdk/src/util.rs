use hyper::ext::ReasonPhrase;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::errors::{Error, RequestError, Result};

/// Convert non-2xx responses into a structured error carrying the status text.
///
/// If the status is successful (2xx), the original response is returned.
pub(crate) fn check_http_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let message = status_text(&response);
    warn!(url = %response.url(), %status, %message, "SharedBox request failed");

    Err(Error::from(RequestError::Server { status, message }))
}

/// The reason phrase the server sent with the status line.
///
/// hyper only records the phrase when it differs from the canonical one, so
/// the canonical reason stands in when none was recorded.
fn status_text(response: &Response) -> String {
    response
        .extensions()
        .get::<ReasonPhrase>()
        .map(|reason| String::from_utf8_lossy(reason.as_bytes()).into_owned())
        .or_else(|| response.status().canonical_reason().map(str::to_owned))
        .unwrap_or_default()
}

/// Normalize a SharedBox API response into `T`.
///
/// 1. Non-success status: [`RequestError::Server`].
/// 2. `204 No Content`: `T` decoded from an empty JSON object.
/// 3. Empty body: [`RequestError::UnexpectedFormat`].
/// 4. Otherwise: `T` decoded from the body.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let response = check_http_status(response)?;

    if response.status() == StatusCode::NO_CONTENT {
        return decode_json("{}");
    }

    let text = response.text().await?;
    if text.trim().is_empty() {
        return Err(RequestError::UnexpectedFormat.into());
    }

    decode_json(&text)
}

fn decode_json<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|e| {
        RequestError::DecodeJson {
            message: e.to_string(),
        }
        .into()
    })
}
