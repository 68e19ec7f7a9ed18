//! In-memory API fakes shared by the unit tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::AppError;
use crate::rank::Delay;
use crate::valorant::types::{MetadataDto, PlayersDto, StatsDto, TeamDto, TeamsDto};
use crate::valorant::{
    AccountApi, AccountDto, ApiError, ApiResult, MatchApi, MatchDto, PlayerDto, Region,
};

/// One canned answer of the match-history endpoint.
#[derive(Debug, Clone)]
pub enum Scripted {
    Empty,
    Match(MatchDto),
    Error,
}

/// Replays scripted match answers in order, repeating the last one forever.
#[derive(Debug, Default)]
pub struct FakeApi {
    account: Option<AccountDto>,
    matches: Vec<Scripted>,
    match_calls: AtomicUsize,
    last_match_request: Mutex<Option<(String, String, u32)>>,
}

impl FakeApi {
    pub fn with_matches(matches: Vec<Scripted>) -> Self {
        Self {
            matches,
            ..Self::default()
        }
    }

    pub fn with_account(mut self, account: AccountDto) -> Self {
        self.account = Some(account);
        self
    }

    pub fn match_calls(&self) -> usize {
        self.match_calls.load(Ordering::SeqCst)
    }

    pub fn last_match_request(&self) -> Option<(String, String, u32)> {
        self.last_match_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl AccountApi for FakeApi {
    async fn get_account(&self, name: &str, tag: &str) -> Result<AccountDto, AppError> {
        self.account.clone().ok_or_else(|| AppError::PlayerNotFound {
            name: name.to_string(),
            tag: tag.to_string(),
        })
    }
}

#[async_trait]
impl MatchApi for FakeApi {
    async fn get_recent_matches(
        &self,
        region: &str,
        puuid: &str,
        size: u32,
    ) -> ApiResult<Vec<MatchDto>> {
        let call = self.match_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_match_request.lock().unwrap() =
            Some((region.to_string(), puuid.to_string(), size));

        let answer = self
            .matches
            .get(call)
            .or_else(|| self.matches.last())
            .cloned()
            .unwrap_or(Scripted::Empty);

        match answer {
            Scripted::Empty => Ok(Vec::new()),
            Scripted::Match(m) => Ok(vec![m]),
            Scripted::Error => Err(ApiError::Status {
                status: StatusCode::SERVICE_UNAVAILABLE,
                message: "upstream unavailable".to_string(),
            }),
        }
    }
}

/// Records requested waits instead of sleeping.
#[derive(Debug, Default)]
pub struct RecordingDelay {
    waits: Mutex<Vec<Duration>>,
}

impl RecordingDelay {
    pub fn waits(&self) -> Vec<Duration> {
        self.waits.lock().unwrap().clone()
    }
}

#[async_trait]
impl Delay for RecordingDelay {
    async fn wait(&self, duration: Duration) {
        self.waits.lock().unwrap().push(duration);
    }
}

pub trait PlayerBuilder {
    fn with_tier(self, tier: &str) -> Self;
    fn with_stats(self, kills: u32, deaths: u32, assists: u32) -> Self;
}

impl PlayerBuilder for PlayerDto {
    fn with_tier(mut self, tier: &str) -> Self {
        self.currenttier_patched = Some(tier.to_string());
        self
    }

    fn with_stats(mut self, kills: u32, deaths: u32, assists: u32) -> Self {
        self.stats = StatsDto {
            kills,
            deaths,
            assists,
        };
        self
    }
}

/// A player named after its puuid, tagged `EUW`, playing Jett.
pub fn sample_player(puuid: &str, party_id: Option<&str>) -> PlayerDto {
    PlayerDto {
        puuid: puuid.to_string(),
        name: puuid.to_string(),
        tag: "EUW".to_string(),
        character: "Jett".to_string(),
        party_id: party_id.map(str::to_string),
        currenttier_patched: None,
        stats: StatsDto::default(),
    }
}

/// Competitive match on Ascent won 13 - 7 by red.
pub fn sample_match(players: Vec<PlayerDto>) -> MatchDto {
    MatchDto {
        metadata: MetadataDto {
            matchid: "match-1".to_string(),
            cluster: "Frankfurt".to_string(),
            map: "Ascent".to_string(),
            mode_id: "competitive".to_string(),
            game_length: 1834,
            rounds_played: 20,
        },
        teams: TeamsDto {
            red: Some(TeamDto {
                rounds_won: Some(13),
            }),
            blue: Some(TeamDto {
                rounds_won: Some(7),
            }),
        },
        players: PlayersDto {
            all_players: players,
        },
    }
}

pub fn sample_account(region: Region) -> AccountDto {
    AccountDto {
        puuid: "target".to_string(),
        region,
        account_level: 42,
        name: Some("Target".to_string()),
        tag: Some("EUW".to_string()),
    }
}
