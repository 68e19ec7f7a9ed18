//! Interactive numbered menu.
//!
//! Failures are printed and the loop goes on; only I/O errors on the
//! terminal itself end it.

use std::io::{BufRead, Write};

use tracing::warn;

use crate::app::App;
use crate::error::AppError;
use crate::rank::Delay;
use crate::render;
use crate::valorant::ValorantApi;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    PlayerInfo,
    Puuid,
    CurrentRank,
    LastMatch,
    Exit,
}

impl MenuOption {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::PlayerInfo),
            "2" => Some(Self::Puuid),
            "3" => Some(Self::CurrentRank),
            "4" => Some(Self::LastMatch),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "\nChoose an options:
[1] Print Player Information
[2] Get Player ID (PUUID)
[3] Get Player Current Rank
[4] Get Last Match
[5] Exit";

const GOODBYE: &str = "Exiting program. GG!";

/// Writes `label`, then reads one line. `None` on end of input.
fn prompt<R, W>(input: &mut R, output: &mut W, label: &str) -> Result<Option<String>, AppError>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn prompt_player<R, W>(input: &mut R, output: &mut W) -> Result<Option<(String, String)>, AppError>
where
    R: BufRead,
    W: Write,
{
    let Some(name) = prompt(input, output, "Enter player name: ")? else {
        return Ok(None);
    };
    let Some(tag) = prompt(input, output, "Enter player tag: ")? else {
        return Ok(None);
    };

    Ok(Some((name, tag)))
}

fn prompt_last_match<R, W>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<(String, String)>, AppError>
where
    R: BufRead,
    W: Write,
{
    let Some(region) = prompt(input, output, "Enter region (e.g., ap, na, eu, br, kr, latam): ")?
    else {
        return Ok(None);
    };
    let Some(puuid) = prompt(input, output, "Enter player PUUID: ")? else {
        return Ok(None);
    };

    writeln!(output, "Region: {region}")?;
    writeln!(output, "PUUID: {puuid}")?;

    Ok(Some((region, puuid)))
}

fn report_failure(error: &AppError) -> String {
    warn!(error = %error, "📋 ⚠️ Menu action failed");
    render::error_line(error)
}

/// Runs the menu until option 5 or end of input.
pub async fn run_menu<A, D, R, W>(app: &App<A, D>, mut input: R, mut output: W) -> Result<(), AppError>
where
    A: ValorantApi,
    D: Delay,
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(output, "{MENU}")?;

        let Some(choice) = prompt(&mut input, &mut output, "Choose the options: ")? else {
            writeln!(output)?;
            writeln!(output, "{GOODBYE}")?;
            return Ok(());
        };

        let Some(option) = MenuOption::parse(&choice) else {
            writeln!(output, "Invalid options")?;
            continue;
        };

        let text = match option {
            MenuOption::Exit => {
                writeln!(output, "{GOODBYE}")?;
                return Ok(());
            }
            MenuOption::PlayerInfo | MenuOption::Puuid | MenuOption::CurrentRank => {
                let Some((name, tag)) = prompt_player(&mut input, &mut output)? else {
                    continue;
                };

                match option {
                    MenuOption::PlayerInfo => match app.player_info(&name, &tag).await {
                        Ok(account) => render::player_info(&account),
                        Err(e) => report_failure(&e),
                    },
                    MenuOption::Puuid => match app.player_info(&name, &tag).await {
                        Ok(account) => render::puuid_line(&account),
                        Err(e) => report_failure(&e),
                    },
                    _ => match app.current_rank(&name, &tag).await {
                        Ok((account, rank)) => render::rank_line(&account, &rank),
                        Err(AppError::Rank(e)) => {
                            warn!(error = %e, "📋 ⚠️ Rank lookup failed");
                            render::no_rank_line(&name, &tag, &e)
                        }
                        Err(e) => report_failure(&e),
                    },
                }
            }
            MenuOption::LastMatch => {
                let Some((region, puuid)) = prompt_last_match(&mut input, &mut output)? else {
                    continue;
                };

                match app.last_match(&region, &puuid).await {
                    Ok(Some(summary)) => render::match_report(&summary),
                    Ok(None) => render::no_match_line().to_string(),
                    Err(e) => report_failure(&e),
                }
            }
        };

        writeln!(output, "{text}")?;
    }
}
