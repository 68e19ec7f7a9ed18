use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use super::region::Region;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status error: {status} - {message}")]
    Status { status: StatusCode, message: String },

    #[error("Decoding raw response error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
            Self::Decode(_) => None,
        }
    }
}

/// A call to the Valorant API either succeeds with the success type or fails with an [`ApiError`].
pub type ApiResult<T> = Result<T, ApiError>;

/// Every payload of the API is wrapped in a `data` field.
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

// ============================================================================
// Account-v1
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct AccountDto {
    pub puuid: String,
    pub region: Region,
    pub account_level: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
}

// ============================================================================
// Matches-v3
// ============================================================================

/// Match history response. `data` may be missing or null while a freshly
/// played match is not indexed yet.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchListDto {
    #[serde(default)]
    pub data: Option<Vec<MatchDto>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchDto {
    pub metadata: MetadataDto,
    #[serde(default)]
    pub teams: TeamsDto,
    #[serde(default)]
    pub players: PlayersDto,
}

impl MatchDto {
    pub fn player(&self, puuid: &str) -> Option<&PlayerDto> {
        self.players.all_players.iter().find(|p| p.puuid == puuid)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetadataDto {
    pub matchid: String,
    pub cluster: String,
    pub map: String,
    pub mode_id: String,
    /// Seconds.
    pub game_length: u64,
    pub rounds_played: u32,
}

/// Modes without teams (deathmatch) report `null` teams or round counts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamsDto {
    #[serde(default)]
    pub red: Option<TeamDto>,
    #[serde(default)]
    pub blue: Option<TeamDto>,
}

impl TeamsDto {
    pub fn red_score(&self) -> u32 {
        Self::rounds_won(self.red.as_ref())
    }

    pub fn blue_score(&self) -> u32 {
        Self::rounds_won(self.blue.as_ref())
    }

    fn rounds_won(team: Option<&TeamDto>) -> u32 {
        team.and_then(|t| t.rounds_won).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamDto {
    #[serde(default)]
    pub rounds_won: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayersDto {
    #[serde(default)]
    pub all_players: Vec<PlayerDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerDto {
    pub puuid: String,
    pub name: String,
    pub tag: String,
    pub character: String,
    #[serde(default)]
    pub party_id: Option<String>,
    #[serde(default)]
    pub currenttier_patched: Option<String>,
    #[serde(default)]
    pub stats: StatsDto,
}

impl PlayerDto {
    pub const RANK_NOT_AVAILABLE: &'static str = "Rank not available";

    /// Patched tier name, e.g. "Gold 2".
    pub fn current_tier(&self) -> &str {
        self.currenttier_patched
            .as_deref()
            .filter(|tier| !tier.is_empty())
            .unwrap_or(Self::RANK_NOT_AVAILABLE)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsDto {
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
}
