//! HTTP API Wrappers
//!
//! Frontend bindings to the backend and the static reference datasets,
//! organized by domain.

mod error;
mod points;
mod reference;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

pub use error::ApiError;
pub use points::ApiClient;
pub use reference::ReferenceData;

/// Join a base URL and a path without doubling the slash
fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// GET a JSON document
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Status {
            code: response.status(),
            text: response.status_text(),
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
