//! Plain-text rendering of accounts, ranks and matches.

use crate::account::Account;
use crate::match_summary::{MatchSummary, PartyGroup, PlayerEntry, Winner, has_any_party};
use crate::valorant::Region;

pub fn region_line(region: &Region) -> String {
    match region.display_name() {
        Some(name) => format!("Player Region: {name}"),
        None => format!("Unknown Region: {region}"),
    }
}

pub fn player_info(account: &Account) -> String {
    [
        format!("Player ID (PUUID): {}", account.puuid),
        region_line(&account.region),
        format!("Player Level: {}", account.account_level),
    ]
    .join("\n")
}

pub fn puuid_line(account: &Account) -> String {
    format!(
        "PUUID for {} #{}: {}",
        account.name, account.tag, account.puuid
    )
}

pub fn rank_line(account: &Account, rank: &str) -> String {
    format!(
        "Current Rank for {} #{}: {}",
        account.name, account.tag, rank
    )
}

pub fn no_rank_line(name: &str, tag: &str, reason: &impl std::fmt::Display) -> String {
    format!("No rank information found for {name} #{tag}: {reason}")
}

/// "Competitive" from "competitive"; the rest of the word is lowercased.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

pub fn score_line(summary: &MatchSummary) -> String {
    let (red, blue) = (summary.red_score, summary.blue_score);

    match summary.winner {
        Winner::Draw => format!("Score: {red} - {blue}"),
        Winner::Red => format!("Score: {red} WINNER - {blue}"),
        Winner::Blue => format!("Score: {red} - {blue} WINNER"),
    }
}

pub fn winner_line(summary: &MatchSummary) -> String {
    match summary.winner {
        Winner::Draw => format!("- Winner: {}", summary.winner),
        winner => format!(
            "- Winner: {}: (RED) {} - {} (BLUE)",
            winner, summary.red_score, summary.blue_score
        ),
    }
}

fn player_block(player: &PlayerEntry, indent: bool) -> Vec<String> {
    let prefix = if indent { "\t" } else { "" };

    vec![
        format!("{prefix}- Player name: {} #{}", player.name, player.tag),
        format!("{prefix}- Character: {}", player.character),
        format!(
            "{prefix}- Stats: {} K, {} D, {} A",
            player.kills, player.deaths, player.assists
        ),
    ]
}

fn party_block(group: &PartyGroup<'_>) -> Vec<String> {
    let mut lines = player_block(group.anchor, false);

    if group.is_party() {
        lines.push("Party with:".to_string());
        for member in &group.members {
            lines.extend(player_block(member, true));
        }
    } else {
        lines.push("Party with: No party".to_string());
    }

    lines
}

pub fn match_report(summary: &MatchSummary) -> String {
    let mut lines = vec![
        score_line(summary),
        "Map information:".to_string(),
        format!("- Match ID: {}", summary.match_id),
        format!("- Server: {}", summary.server_cluster),
        format!("- Map name: {}", summary.map_name),
        format!("- Mode: {}", capitalize(&summary.game_mode)),
        format!("- Time: {}", summary.game_length),
        format!("- Total rounds: {} rounds", summary.total_rounds),
        winner_line(summary),
        String::new(),
        "All players:".to_string(),
    ];

    let groups = summary.parties();
    for group in &groups {
        lines.extend(party_block(group));
    }

    if !has_any_party(&groups) {
        lines.push("No party (no unique party IDs)".to_string());
    }

    lines.join("\n")
}

pub fn no_match_line() -> &'static str {
    "No match data available"
}

pub fn error_line(error: &impl std::fmt::Display) -> String {
    format!("Error: {error}")
}
