//! Typed access to the HenrikDev Valorant API.

pub mod client;
mod endpoints;
pub mod region;
pub mod traits;
pub mod types;

pub use client::ValorantClient;
pub use region::Region;
pub use traits::{AccountApi, MatchApi, ValorantApi};
pub use types::{AccountDto, ApiError, ApiResult, MatchDto, PlayerDto};
