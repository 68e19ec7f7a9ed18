use std::env;
use std::num::NonZeroU32;
use std::time::Duration;

use crate::error::AppError;
use crate::rank::RetryPolicy;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub http_timeout_secs: u64,
    pub rank_retry_attempts: NonZeroU32,
    pub rank_retry_delay_secs: u64,
}

impl Config {
    pub const DEFAULT_API_BASE_URL: &'static str = "https://api.henrikdev.xyz";
    const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
    const DEFAULT_RANK_RETRY_ATTEMPTS: u32 = 3;
    const DEFAULT_RANK_RETRY_DELAY_SECS: u64 = 5;

    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("VALORANT_API_BASE_URL")
            .unwrap_or_else(|| Self::DEFAULT_API_BASE_URL.into())
            .trim()
            .trim_end_matches('/')
            .to_string();

        if api_base_url.is_empty() {
            return Err(AppError::Config(
                "VALORANT_API_BASE_URL must not be empty".into(),
            ));
        }

        let http_timeout_secs = lookup("HTTP_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(Self::DEFAULT_HTTP_TIMEOUT_SECS);

        let rank_retry_attempts = lookup("RANK_RETRY_ATTEMPTS")
            .and_then(|v| v.parse().ok())
            .and_then(NonZeroU32::new)
            .unwrap_or_else(|| {
                NonZeroU32::new(Self::DEFAULT_RANK_RETRY_ATTEMPTS).unwrap_or(NonZeroU32::MIN)
            });

        let rank_retry_delay_secs = lookup("RANK_RETRY_DELAY_SECS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(Self::DEFAULT_RANK_RETRY_DELAY_SECS);

        Ok(Self {
            api_base_url,
            http_timeout_secs,
            rank_retry_attempts,
            rank_retry_delay_secs,
        })
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.rank_retry_attempts,
            delay: Duration::from_secs(self.rank_retry_delay_secs),
        }
    }
}
