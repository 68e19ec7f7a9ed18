//! Derived view of a single match: score, winner and parties.
//!
//! Everything here is pure data extraction; turning it into text lives in
//! [`crate::render`].

use std::collections::HashSet;
use std::fmt;

use crate::valorant::{MatchDto, PlayerDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    Red,
    Blue,
    Draw,
}

impl Winner {
    /// Scores are compared as opaque integers, overtime included.
    pub fn from_scores(red: u32, blue: u32) -> Self {
        match red.cmp(&blue) {
            std::cmp::Ordering::Greater => Self::Red,
            std::cmp::Ordering::Less => Self::Blue,
            std::cmp::Ordering::Equal => Self::Draw,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "RED",
            Self::Blue => "BLUE",
            Self::Draw => "DRAW",
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLength {
    pub minutes: u64,
    pub seconds: u64,
}

impl GameLength {
    pub fn from_seconds(total: u64) -> Self {
        Self {
            minutes: total / 60,
            seconds: total % 60,
        }
    }
}

impl fmt::Display for GameLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} minutes, {} seconds", self.minutes, self.seconds)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerEntry {
    pub name: String,
    pub tag: String,
    pub puuid: String,
    pub character: String,
    /// `None` when the API sent no id or an empty one.
    pub party_id: Option<String>,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub current_tier: String,
}

impl PlayerEntry {
    pub fn riot_id(&self) -> String {
        format!("{}#{}", self.name, self.tag)
    }
}

impl From<&PlayerDto> for PlayerEntry {
    fn from(value: &PlayerDto) -> Self {
        Self {
            name: value.name.clone(),
            tag: value.tag.clone(),
            puuid: value.puuid.clone(),
            character: value.character.clone(),
            party_id: value.party_id.clone().filter(|id| !id.is_empty()),
            kills: value.stats.kills,
            deaths: value.stats.deaths,
            assists: value.stats.assists,
            current_tier: value.current_tier().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    pub match_id: String,
    pub server_cluster: String,
    pub map_name: String,
    pub game_mode: String,
    pub game_length: GameLength,
    pub total_rounds: u32,
    pub red_score: u32,
    pub blue_score: u32,
    pub winner: Winner,
    pub players: Vec<PlayerEntry>,
}

impl MatchSummary {
    pub fn player(&self, puuid: &str) -> Option<&PlayerEntry> {
        self.players.iter().find(|p| p.puuid == puuid)
    }

    pub fn parties(&self) -> Vec<PartyGroup<'_>> {
        group_parties(&self.players)
    }
}

pub fn summarize_match(raw: &MatchDto) -> MatchSummary {
    let red_score = raw.teams.red_score();
    let blue_score = raw.teams.blue_score();

    MatchSummary {
        match_id: raw.metadata.matchid.clone(),
        server_cluster: raw.metadata.cluster.clone(),
        map_name: raw.metadata.map.clone(),
        game_mode: raw.metadata.mode_id.clone(),
        game_length: GameLength::from_seconds(raw.metadata.game_length),
        total_rounds: raw.metadata.rounds_played,
        red_score,
        blue_score,
        winner: Winner::from_scores(red_score, blue_score),
        players: raw
            .players
            .all_players
            .iter()
            .map(PlayerEntry::from)
            .collect(),
    }
}

/// A player and the other members of their party, borrowed from the match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyGroup<'a> {
    pub anchor: &'a PlayerEntry,
    pub members: Vec<&'a PlayerEntry>,
}

impl PartyGroup<'_> {
    pub fn is_party(&self) -> bool {
        !self.members.is_empty()
    }
}

/// All players sharing `party_id`, in list order.
pub fn party_members<'a>(players: &'a [PlayerEntry], party_id: &str) -> Vec<&'a PlayerEntry> {
    players
        .iter()
        .filter(|p| p.party_id.as_deref() == Some(party_id))
        .collect()
}

/// Groups players by party in first-occurrence order.
///
/// Each party is anchored on its first listed member; solo queuers and
/// players without a party id come out with no members.
pub fn group_parties(players: &[PlayerEntry]) -> Vec<PartyGroup<'_>> {
    let mut emitted: HashSet<&str> = HashSet::new();
    let mut groups = Vec::new();

    for player in players {
        let Some(party_id) = player.party_id.as_deref() else {
            groups.push(PartyGroup {
                anchor: player,
                members: Vec::new(),
            });
            continue;
        };

        if !emitted.insert(party_id) {
            continue;
        }

        // The anchor is the first sharer, so everyone after it is a member.
        let members = party_members(players, party_id)
            .into_iter()
            .skip(1)
            .collect();

        groups.push(PartyGroup {
            anchor: player,
            members,
        });
    }

    groups
}

pub fn has_any_party(groups: &[PartyGroup<'_>]) -> bool {
    groups.iter().any(PartyGroup::is_party)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{PlayerBuilder, sample_match, sample_player};

    fn entry(puuid: &str, party_id: Option<&str>) -> PlayerEntry {
        PlayerEntry::from(&sample_player(puuid, party_id))
    }

    fn anchors<'a>(groups: &[PartyGroup<'a>]) -> Vec<&'a str> {
        groups.iter().map(|g| g.anchor.puuid.as_str()).collect()
    }

    #[test]
    fn winner_follows_score_comparison() {
        for red in 0..=16 {
            for blue in 0..=16 {
                let winner = Winner::from_scores(red, blue);

                assert_eq!(winner == Winner::Draw, red == blue);
                assert_eq!(winner == Winner::Red, red > blue);
                assert_eq!(winner == Winner::Blue, red < blue);
            }
        }
    }

    #[test]
    fn overtime_scores_are_opaque() {
        assert_eq!(Winner::from_scores(15, 13), Winner::Red);
        assert_eq!(Winner::from_scores(20, 20), Winner::Draw);
    }

    #[test]
    fn game_length_uses_integer_division() {
        assert_eq!(
            GameLength::from_seconds(125),
            GameLength {
                minutes: 2,
                seconds: 5
            }
        );
        assert_eq!(GameLength::from_seconds(59).to_string(), "0 minutes, 59 seconds");
        assert_eq!(GameLength::from_seconds(2400).to_string(), "40 minutes, 0 seconds");
    }

    #[test]
    fn summarize_copies_metadata_and_derives_winner() {
        let mut raw = sample_match(vec![
            sample_player("a", Some("p1")).with_tier("Diamond 1"),
            sample_player("b", Some("")),
        ]);
        raw.metadata.game_length = 125;

        let summary = summarize_match(&raw);

        assert_eq!(summary.match_id, "match-1");
        assert_eq!(summary.server_cluster, "Frankfurt");
        assert_eq!(summary.map_name, "Ascent");
        assert_eq!(summary.game_mode, "competitive");
        assert_eq!(summary.total_rounds, 20);
        assert_eq!((summary.red_score, summary.blue_score), (13, 7));
        assert_eq!(summary.winner, Winner::Red);
        assert_eq!(
            summary.game_length,
            GameLength {
                minutes: 2,
                seconds: 5
            }
        );
        assert_eq!(summary.player("a").unwrap().current_tier, "Diamond 1");
        assert_eq!(summary.player("b").unwrap().party_id, None);
    }

    #[test]
    fn players_without_party_are_emitted_individually_in_order() {
        let players = vec![entry("a", None), entry("b", None), entry("c", None)];

        let groups = group_parties(&players);

        assert_eq!(anchors(&groups), vec!["a", "b", "c"]);
        assert!(groups.iter().all(|g| g.members.is_empty()));
        assert!(!has_any_party(&groups));
    }

    #[test]
    fn party_is_anchored_on_first_member() {
        let players = vec![
            entry("a", Some("p1")),
            entry("b", Some("p1")),
            entry("c", Some("p2")),
        ];

        let groups = group_parties(&players);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].anchor.puuid, "a");
        assert_eq!(groups[0].members, vec![&players[1]]);
        assert_eq!(groups[1].anchor.puuid, "c");
        assert!(groups[1].members.is_empty());
        assert!(has_any_party(&groups));
    }

    #[test]
    fn interleaved_parties_keep_first_occurrence_order() {
        let players = vec![
            entry("a", Some("p1")),
            entry("b", None),
            entry("c", Some("p2")),
            entry("d", Some("p1")),
            entry("e", Some("p2")),
            entry("f", Some("p1")),
        ];

        let groups = group_parties(&players);

        assert_eq!(anchors(&groups), vec!["a", "b", "c"]);
        assert_eq!(groups[0].members, vec![&players[3], &players[5]]);
        assert_eq!(groups[2].members, vec![&players[4]]);
    }

    #[test]
    fn no_player_appears_in_two_groups() {
        let players = vec![
            entry("a", Some("p1")),
            entry("b", Some("p1")),
            entry("c", Some("p2")),
            entry("d", None),
            entry("e", Some("p2")),
        ];

        let groups = group_parties(&players);

        let mut seen: Vec<&str> = groups
            .iter()
            .flat_map(|g| std::iter::once(g.anchor).chain(g.members.iter().copied()))
            .map(|p| p.puuid.as_str())
            .collect();
        seen.sort_unstable();

        assert_eq!(seen, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn party_members_returns_every_sharer() {
        let players = vec![
            entry("a", Some("p1")),
            entry("b", Some("p2")),
            entry("c", Some("p1")),
        ];

        let members = party_members(&players, "p1");

        assert_eq!(members, vec![&players[0], &players[2]]);
        assert!(party_members(&players, "missing").is_empty());
    }
}
