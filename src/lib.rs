//! Terminal client for the HenrikDev Valorant API.
//!
//! Looks up accounts, resolves a player's current rank from their latest
//! match (retrying while the match is not indexed yet) and summarizes that
//! match with scores and parties.

pub mod account;
pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod match_summary;
pub mod menu;
pub mod rank;
pub mod render;
pub mod valorant;

#[cfg(test)]
mod test_support;

pub use account::Account;
pub use app::App;
pub use error::AppError;
pub use match_summary::{
    MatchSummary, PartyGroup, PlayerEntry, Winner, group_parties, summarize_match,
};
pub use rank::{Delay, RankError, RetryPolicy, TokioDelay, fetch_current_rank};
