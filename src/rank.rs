//! Resolves a player's current competitive tier from their latest match.
//!
//! The API indexes a finished match with some lag, so an empty history or a
//! transport failure is retried a fixed number of times. A match that is
//! present but does not contain the player is final.

use std::num::NonZeroU32;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

use crate::valorant::{ApiError, MatchApi};

#[derive(Debug, Error)]
pub enum RankError {
    #[error("region and puuid are both required")]
    MissingInput,

    #[error("transport error: {0}")]
    Transport(#[from] ApiError),

    #[error("no match data available yet")]
    NoDataYet,

    #[error("player with PUUID {puuid} not found in match {match_id}")]
    PlayerNotInMatch { puuid: String, match_id: String },

    #[error("unable to fetch match data after {attempts} attempt(s), last error: {last}")]
    ExhaustedRetries { attempts: u32, last: Box<RankError> },
}

impl RankError {
    /// Transport errors and not-yet-indexed matches may resolve on a later attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::NoDataYet)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: NonZeroU32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: NonZeroU32::new(3).unwrap_or(NonZeroU32::MIN),
            delay: Duration::from_secs(5),
        }
    }
}

/// Waits between two attempts.
#[async_trait]
pub trait Delay: Send + Sync {
    async fn wait(&self, duration: Duration);
}

/// [`Delay`] backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Fetches the most recent match of `puuid` and returns the patched tier name
/// the player had in it.
///
/// No delay follows the final attempt, so a run that never succeeds waits
/// `max_attempts - 1` times.
#[instrument(skip(api, delay, policy), fields(max_attempts = policy.max_attempts.get()))]
pub async fn fetch_current_rank<A, D>(
    api: &A,
    delay: &D,
    policy: &RetryPolicy,
    region: &str,
    puuid: &str,
) -> Result<String, RankError>
where
    A: MatchApi + ?Sized,
    D: Delay + ?Sized,
{
    let region = region.trim();
    let puuid = puuid.trim();

    if region.is_empty() || puuid.is_empty() {
        return Err(RankError::MissingInput);
    }

    let max_attempts = policy.max_attempts.get();
    let mut last = RankError::NoDataYet;

    for attempt in 1..=max_attempts {
        match try_fetch_rank(api, region, puuid).await {
            Ok(tier) => {
                info!(attempt, tier = %tier, "🎯 ✅ Rank resolved");
                return Ok(tier);
            }
            Err(e) if e.is_retryable() => {
                match &e {
                    RankError::Transport(err) => {
                        warn!(attempt, error = %err, "🎯 ⚠️ Error fetching match data")
                    }
                    _ => info!(attempt, "🎯 No match data available yet"),
                }

                last = e;

                if attempt < max_attempts {
                    info!(attempt, delay = ?policy.delay, "🎯 Retrying");
                    delay.wait(policy.delay).await;
                }
            }
            Err(e) => {
                warn!(attempt, error = %e, "🎯 ❌ Giving up");
                return Err(e);
            }
        }
    }

    error!(attempts = max_attempts, "🎯 ❌ Unable to fetch match data after retries");

    Err(RankError::ExhaustedRetries {
        attempts: max_attempts,
        last: Box::new(last),
    })
}

async fn try_fetch_rank<A>(api: &A, region: &str, puuid: &str) -> Result<String, RankError>
where
    A: MatchApi + ?Sized,
{
    let matches = api.get_recent_matches(region, puuid, 1).await?;

    let Some(latest) = matches.first() else {
        return Err(RankError::NoDataYet);
    };

    let player = latest
        .player(puuid)
        .ok_or_else(|| RankError::PlayerNotInMatch {
            puuid: puuid.to_string(),
            match_id: latest.metadata.matchid.clone(),
        })?;

    Ok(player.current_tier().to_string())
}
