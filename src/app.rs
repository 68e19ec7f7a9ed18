use tracing::{debug, instrument};

use crate::account::Account;
use crate::error::AppError;
use crate::match_summary::{MatchSummary, summarize_match};
use crate::rank::{Delay, RetryPolicy, fetch_current_rank};
use crate::valorant::ValorantApi;

/// Operations offered by the menu, independent of any terminal I/O.
#[derive(Debug)]
pub struct App<A, D> {
    api: A,
    delay: D,
    policy: RetryPolicy,
}

impl<A, D> App<A, D>
where
    A: ValorantApi,
    D: Delay,
{
    pub fn new(api: A, delay: D, policy: RetryPolicy) -> Self {
        Self { api, delay, policy }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    #[instrument(skip(self))]
    pub async fn player_info(&self, name: &str, tag: &str) -> Result<Account, AppError> {
        let dto = self.api.get_account(name.trim(), tag.trim()).await?;

        Ok(Account::from_dto(name.trim(), tag.trim(), dto))
    }

    /// Looks the account up once, then resolves its rank from the latest match.
    #[instrument(skip(self))]
    pub async fn current_rank(&self, name: &str, tag: &str) -> Result<(Account, String), AppError> {
        let account = self.player_info(name, tag).await?;

        let rank = fetch_current_rank(
            &self.api,
            &self.delay,
            &self.policy,
            account.region.as_str(),
            &account.puuid,
        )
        .await?;

        Ok((account, rank))
    }

    /// `None` when the player has no match indexed.
    #[instrument(skip(self))]
    pub async fn last_match(
        &self,
        region: &str,
        puuid: &str,
    ) -> Result<Option<MatchSummary>, AppError> {
        let matches = self
            .api
            .get_recent_matches(region.trim(), puuid.trim(), 1)
            .await?;

        let summary = matches.first().map(summarize_match);
        if summary.is_none() {
            debug!("no match data available");
        }

        Ok(summary)
    }
}
