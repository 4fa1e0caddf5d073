use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::options::traits::{OptionsStore, StoreError};
use crate::options::types::OptionEntry;

/// Response envelope shared by the console API endpoints.
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    success: bool,
    #[serde(default)]
    message: String,
    data: Option<T>,
}

/// `reqwest`-backed store speaking the console's options endpoint:
/// `GET /api/option/` lists options, `PUT /api/option/` sets one key.
pub struct HttpOptionsStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpOptionsStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/option/", self.base_url)
    }
}

#[async_trait]
impl OptionsStore for HttpOptionsStore {
    async fn fetch_options(&self) -> Result<HashMap<String, String>, StoreError> {
        let body = self
            .client
            .get(self.endpoint())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let envelope: ApiEnvelope<Vec<OptionEntry>> = serde_json::from_str(&body)?;
        if !envelope.success {
            return Err(StoreError::Rejected(envelope.message));
        }
        Ok(envelope
            .data
            .unwrap_or_default()
            .into_iter()
            .map(|entry| (entry.key, entry.value))
            .collect())
    }

    async fn put_option(&self, key: &str, value: &str) -> Result<(), StoreError> {
        debug!(key, "putting option");
        let body = self
            .client
            .put(self.endpoint())
            .json(&json!({ "key": key, "value": value }))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_str(&body)?;
        if !envelope.success {
            return Err(StoreError::Rejected(envelope.message));
        }
        Ok(())
    }
}
