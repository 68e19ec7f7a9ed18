use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Affinity region of a Valorant account, as used in match-history routes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum Region {
    Ap,
    Na,
    Eu,
    Br,
    Kr,
    Latam,
    /// Any code the API returns that is not one of the known regions.
    Unknown(String),
}

impl Region {
    pub const KNOWN: [Region; 6] = [
        Self::Ap,
        Self::Na,
        Self::Eu,
        Self::Br,
        Self::Kr,
        Self::Latam,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Ap => "ap",
            Self::Na => "na",
            Self::Eu => "eu",
            Self::Br => "br",
            Self::Kr => "kr",
            Self::Latam => "latam",
            Self::Unknown(code) => code,
        }
    }

    pub fn display_name(&self) -> Option<&'static str> {
        match self {
            Self::Ap => Some("Asia Pacific"),
            Self::Na => Some("North America"),
            Self::Eu => Some("Europe"),
            Self::Br => Some("Brazil"),
            Self::Kr => Some("Korea"),
            Self::Latam => Some("LATAM"),
            Self::Unknown(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<&str> for Region {
    fn from(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "ap" => Self::Ap,
            "na" => Self::Na,
            "eu" => Self::Eu,
            "br" => Self::Br,
            "kr" => Self::Kr,
            "latam" => Self::Latam,
            _ => Self::Unknown(code.trim().to_string()),
        }
    }
}

impl From<String> for Region {
    fn from(code: String) -> Self {
        Self::from(code.as_str())
    }
}

impl FromStr for Region {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
