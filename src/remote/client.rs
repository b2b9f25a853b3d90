//! HTTP client for the form-intake endpoints
//!
//! Each form posts its field values as a JSON object to a fixed third-party
//! endpoint. Only the response status is inspected.

use super::{RemoteClientTrait, SubmitError};
use async_trait::async_trait;

/// Client backed by a shared `reqwest::Client`
#[derive(Debug, Clone, Default)]
pub struct RemoteClient {
    http: reqwest::Client,
}

impl RemoteClient {
    /// Create a new remote client with transport defaults
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl RemoteClientTrait for RemoteClient {
    async fn submit(&self, endpoint: &str, body: &serde_json::Value) -> Result<(), SubmitError> {
        // `.json()` sets Content-Type: application/json
        let response = self.http.post(endpoint).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
            });
        }

        Ok(())
    }

    async fn asset_exists(&self, url: &str) -> bool {
        match self.http.get(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!("Asset check for {url} failed: {e}");
                false
            }
        }
    }
}
