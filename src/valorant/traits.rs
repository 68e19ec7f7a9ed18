use async_trait::async_trait;

use crate::error::AppError;

use super::types::{AccountDto, ApiResult, MatchDto};

/// Account-v1: resolves a Riot ID (name + tag) to an account.
#[async_trait]
pub trait AccountApi: Send + Sync {
    async fn get_account(&self, name: &str, tag: &str) -> Result<AccountDto, AppError>;
}

/// Matches-v3: most recent matches of a player, newest first.
#[async_trait]
pub trait MatchApi: Send + Sync {
    /// An empty list means the API has no match indexed for this player (yet).
    async fn get_recent_matches(
        &self,
        region: &str,
        puuid: &str,
        size: u32,
    ) -> ApiResult<Vec<MatchDto>>;
}

/// Every API the menu needs.
pub trait ValorantApi: AccountApi + MatchApi {}

impl<T: AccountApi + MatchApi> ValorantApi for T {}
