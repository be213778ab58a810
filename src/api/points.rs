//! Backend Client
//!
//! Residue catalog and collection point registration.

use gloo_net::http::Request;
use point_form::{CollectionPointSubmission, Item};

use super::{endpoint, get_json, ApiError};

/// Stateless client for the collection point backend
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    /// `GET /items`
    pub async fn list_items(&self) -> Result<Vec<Item>, ApiError> {
        let items: Vec<Item> = get_json(&endpoint(&self.base_url, "items")).await?;
        log::debug!("[API] Loaded {} items", items.len());
        Ok(items)
    }

    /// `POST /points`; any 2xx is success and the body is ignored
    pub async fn create_point(&self, submission: &CollectionPointSubmission) -> Result<(), ApiError> {
        let url = endpoint(&self.base_url, "points");
        log::info!("[API] Registering collection point '{}'", submission.name);

        let response = Request::post(&url)
            .json(submission)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            let err = ApiError::Status {
                code: response.status(),
                text: response.status_text(),
            };
            log::warn!("[API] POST /points failed: {}", err);
            Err(err)
        }
    }
}
