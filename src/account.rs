use crate::valorant::{AccountDto, Region};

/// A player account resolved from its Riot ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub name: String,
    pub tag: String,
    pub puuid: String,
    pub region: Region,
    pub account_level: u32,
}

impl Account {
    /// Prefers the casing returned by the API over what the user typed.
    pub fn from_dto(name: &str, tag: &str, dto: AccountDto) -> Self {
        Self {
            name: dto.name.unwrap_or_else(|| name.to_string()),
            tag: dto.tag.unwrap_or_else(|| tag.to_string()),
            puuid: dto.puuid,
            region: dto.region,
            account_level: dto.account_level,
        }
    }

    pub fn riot_id(&self) -> String {
        format!("{}#{}", self.name, self.tag)
    }
}
