//! Plain-text reports built from chess.com responses.
//!
//! Everything here is pure: the same input always renders the same text
//! (given the same process timezone for date lines).

use std::fmt::Display;

use chrono::{Local, TimeZone};

use crate::models::{
    GameModeRecord, PlayerProfile, PlayerStats, PuzzleRushRecord, TacticsRecord, TitledRoster,
};

/// Layout used for every date in the reports.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Shown under a heading when the payload lacks that section.
const NOT_AVAILABLE: &str = "Not available";

const INDENT: &str = "    ";

/// Render epoch seconds in the local timezone as `YYYY-MM-DD HH:MM:SS`.
pub fn format_epoch(secs: i64) -> String {
    format_epoch_in(secs, &Local)
}

/// Render epoch seconds in `tz`. Out-of-range values fall back to the number.
pub fn format_epoch_in<Tz>(secs: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    tz.timestamp_opt(secs, 0)
        .earliest()
        .map(|dt| dt.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| secs.to_string())
}

/// Percentage of `count` in `total`; a mode with no games is 0%.
pub fn rate(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Player profile. `country` is the already-resolved display name.
pub fn format_player_info(profile: &PlayerProfile, country: &str) -> String {
    let mut lines = vec![
        format!("Player: {}", profile.username),
        format!("URL: {}", profile.url),
        format!("Country: {}", country),
        format!("Joined: {}", profile.joined),
        format!("Last Online: {}", format_epoch(profile.last_online)),
        format!("Status: {}", profile.status),
        format!("Is Streamer: {}", profile.is_streamer),
    ];
    if let Some(ref league) = profile.league {
        lines.push(format!("League: {}", league));
    }
    lines.join("\n")
}

pub fn format_titled_players(roster: &TitledRoster, code: &str) -> String {
    format!(
        "Players with the {} title:\n{}",
        code,
        roster.players.join(", ")
    )
}

/// One time control: ratings, result counts with rates, and the peak game.
pub fn format_game_stats(stats: &GameModeRecord) -> String {
    let record = stats.record;
    let total = record.total();

    let mut lines = vec![format!("Current Rating: {}", stats.last.rating)];
    match stats.best {
        Some(ref best) => lines.push(format!("Peak Rating: {}", best.rating)),
        None => lines.push(format!("Peak Rating: {}", NOT_AVAILABLE)),
    }
    lines.push(format!("Total Games: {}", total));
    lines.push(format!(
        "Wins: {} ({:.2}%)",
        record.win,
        rate(record.win, total)
    ));
    lines.push(format!(
        "Losses: {} ({:.2}%)",
        record.loss,
        rate(record.loss, total)
    ));
    lines.push(format!(
        "Draws: {} ({:.2}%)",
        record.draw,
        rate(record.draw, total)
    ));
    if let Some(ref best) = stats.best {
        lines.push(format!("Date of Peak Rating: {}", format_epoch(best.date)));
        lines.push(format!("Game where peak rating was achieved: {}", best.game));
    }
    lines.join("\n")
}

pub fn format_tactic_stats(stats: &TacticsRecord) -> String {
    match stats.highest {
        Some(ref highest) => format!(
            "Peak Tactic Rating: {}\nDate of Peak Tactic Rating: {}",
            highest.rating,
            format_epoch(highest.date)
        ),
        None => format!("Peak Tactic Rating: {}", NOT_AVAILABLE),
    }
}

pub fn format_puzzle_rush_stats(stats: &PuzzleRushRecord) -> String {
    match stats.best {
        Some(ref best) => format!(
            "Best Puzzle Rush Performance: {} correct out of {}",
            best.score, best.total_attempts
        ),
        None => format!("Best Puzzle Rush Performance: {}", NOT_AVAILABLE),
    }
}

/// Full stats report in the order Rapid, Blitz, Bullet, Daily, Fide,
/// Tactics, Puzzle Rush.
pub fn format_stats(stats: &PlayerStats, player_name: &str) -> String {
    let sections: [(&str, Option<String>); 7] = [
        ("Rapid Stats", stats.chess_rapid.as_ref().map(format_game_stats)),
        ("Blitz Stats", stats.chess_blitz.as_ref().map(format_game_stats)),
        ("Bullet Stats", stats.chess_bullet.as_ref().map(format_game_stats)),
        ("Daily Stats", stats.chess_daily.as_ref().map(format_game_stats)),
        ("Fide Rating", stats.fide.map(|rating| rating.to_string())),
        ("Tactics Stats", stats.tactics.as_ref().map(format_tactic_stats)),
        (
            "Puzzle Rush Stats",
            stats.puzzle_rush.as_ref().map(format_puzzle_rush_stats),
        ),
    ];

    let mut out = format!("Stats for {}:", player_name);
    for (heading, body) in sections {
        let body = body.unwrap_or_else(|| NOT_AVAILABLE.to_string());
        out.push('\n');
        out.push_str(heading);
        out.push(':');
        for line in body.lines() {
            out.push('\n');
            out.push_str(INDENT);
            out.push_str(line);
        }
    }
    out
}
