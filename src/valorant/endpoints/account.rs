use async_trait::async_trait;
use urlencoding::encode;

use crate::error::AppError;
use crate::valorant::client::ValorantClient;
use crate::valorant::traits::AccountApi;
use crate::valorant::types::{AccountDto, DataEnvelope};

#[async_trait]
impl AccountApi for ValorantClient {
    /// Get account by Riot ID (name + tag)
    async fn get_account(&self, name: &str, tag: &str) -> Result<AccountDto, AppError> {
        tracing::trace!("[VALORANT::CLIENT] get_account {}#{}", name, tag);

        let url = format!(
            "{}/valorant/v1/account/{}/{}",
            self.base_url(),
            encode(name),
            encode(tag)
        );

        self.get::<DataEnvelope<AccountDto>>(&url)
            .await
            .map(|envelope| envelope.data)
            .map_err(|e| {
                if e.status() == Some(reqwest::StatusCode::NOT_FOUND) {
                    AppError::PlayerNotFound {
                        name: name.to_string(),
                        tag: tag.to_string(),
                    }
                } else {
                    e.into()
                }
            })
    }
}
