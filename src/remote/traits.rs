//! Trait abstraction for the remote client to enable mocking in tests

use super::SubmitError;
use async_trait::async_trait;

/// Outbound HTTP operations used by the forms and the home page
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteClientTrait: Send + Sync {
    /// POST `body` as JSON to `endpoint`.
    /// Any 2xx status is a success; the response body is ignored.
    async fn submit(&self, endpoint: &str, body: &serde_json::Value) -> Result<(), SubmitError>;

    /// Check whether an asset answers with a 2xx status
    async fn asset_exists(&self, url: &str) -> bool;
}
