use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The endpoint answered but refused the operation.
    #[error("options endpoint rejected the request: {0}")]
    Rejected(String),
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Seam to the key/value options backend.
///
/// One `put_option` call sets one key; no ordering or atomicity is promised
/// across keys, and nothing here retries — a failed save surfaces to the user
/// who may re-save.
#[async_trait]
pub trait OptionsStore: Send + Sync {
    /// Current value of every option the backend exposes.
    async fn fetch_options(&self) -> Result<HashMap<String, String>, StoreError>;

    async fn put_option(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
