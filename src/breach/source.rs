//! Where range bodies come from.

use async_trait::async_trait;

use super::{BreachError, HashPrefix};
use crate::config::CheckerConfig;

/// Fetches the raw `SUFFIX:COUNT` body for one hash prefix.
#[async_trait]
pub trait RangeSource: Send + Sync {
    async fn fetch_range(&self, prefix: &HashPrefix) -> Result<String, BreachError>;
}

/// Range source backed by an HTTP range API.
#[derive(Debug, Clone)]
pub struct HttpRangeSource {
    client: reqwest::Client,
    api_url: String,
    add_padding: bool,
}

impl HttpRangeSource {
    pub fn new(config: &CheckerConfig) -> Result<Self, BreachError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            add_padding: config.add_padding,
        })
    }

    /// URL queried for `prefix`: `{api_url}/{prefix}`.
    pub fn range_url(&self, prefix: &HashPrefix) -> String {
        format!("{}/{}", self.api_url, prefix)
    }
}

#[async_trait]
impl RangeSource for HttpRangeSource {
    async fn fetch_range(&self, prefix: &HashPrefix) -> Result<String, BreachError> {
        let mut request = self.client.get(self.range_url(prefix));
        if self.add_padding {
            request = request.header("Add-Padding", "true");
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BreachError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}
