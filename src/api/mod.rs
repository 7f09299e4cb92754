//! REST Client
//!
//! Frontend bindings to the backend HTTP API, organized by resource.
//! Every operation is one HTTP call returning the parsed body.

mod item;
mod tag;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

pub use item::*;
pub use tag::*;

/// Mount point of the API on the serving origin
const API_PREFIX: &str = "/api";

/// Failure of a backend call, handed back to the caller untouched
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server responded {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Status { status: u16, message: Option<String> },
}

/// Error payload sent by the backend alongside 4xx/5xx responses
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Absolute URL for an API path. reqwest needs absolute URLs, so requests
/// go to the origin the page was served from.
fn endpoint(path: &str) -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    endpoint_url(&origin, path)
}

fn endpoint_url(origin: &str, path: &str) -> String {
    format!("{}{}{}", origin.trim_end_matches('/'), API_PREFIX, path)
}

/// Turn non-2xx responses into `ClientError::Status`
async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.json::<ErrorBody>().await.ok().map(|b| b.error);
    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    Ok(check(response).await?.json::<T>().await?)
}
