use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::config::Config;

use super::types::{ApiError, ApiResult};

/// HTTP client for the unofficial HenrikDev Valorant API.
#[derive(Debug, Clone)]
pub struct ValorantClient {
    client: reqwest::Client,
    base_url: String,
}

impl ValorantClient {
    const USER_AGENT: &'static str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(Self::USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> ApiResult<Self> {
        Self::new(config.api_base_url.clone(), config.http_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Shared GET logic: any non-2xx status or undecodable body is an error.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        tracing::trace!(url, "🌐 GET");

        let res = self.client.get(url).send().await?;
        let status = res.status();

        if !status.is_success() {
            let message = res.text().await.unwrap_or_default().trim().to_string();
            tracing::debug!(%status, url, "🌐 ❌ Request rejected");
            return Err(ApiError::Status { status, message });
        }

        let body = res.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
