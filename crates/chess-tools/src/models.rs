//! Response types for the chess.com published-data API.
//!
//! Only the fields the reports use are decoded. Sections that chess.com
//! leaves out for players who never played a variant are `Option`s.

use serde::Deserialize;

/// `GET player/{handle}`
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerProfile {
    pub username: String,
    pub url: String,
    /// URL of the country resource, e.g. `https://api.chess.com/pub/country/US`.
    pub country: String,
    /// Epoch seconds.
    pub joined: i64,
    /// Epoch seconds.
    pub last_online: i64,
    pub status: String,
    #[serde(default)]
    pub is_streamer: bool,
    #[serde(default)]
    pub league: Option<String>,
}

/// `GET country/{iso}`
#[derive(Debug, Clone, Deserialize)]
pub struct Country {
    pub name: String,
}

/// `GET titled/{code}`
#[derive(Debug, Clone, Deserialize)]
pub struct TitledRoster {
    pub players: Vec<String>,
}

/// `GET player/{handle}/stats`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerStats {
    #[serde(default)]
    pub chess_daily: Option<GameModeRecord>,
    #[serde(default)]
    pub chess_rapid: Option<GameModeRecord>,
    #[serde(default)]
    pub chess_blitz: Option<GameModeRecord>,
    #[serde(default)]
    pub chess_bullet: Option<GameModeRecord>,
    #[serde(default)]
    pub fide: Option<i64>,
    #[serde(default)]
    pub tactics: Option<TacticsRecord>,
    #[serde(default)]
    pub puzzle_rush: Option<PuzzleRushRecord>,
}

/// Ratings and results for one time control.
#[derive(Debug, Clone, Deserialize)]
pub struct GameModeRecord {
    pub last: LastRating,
    /// Missing until the player has a peak worth recording.
    #[serde(default)]
    pub best: Option<BestRating>,
    pub record: GameRecord,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LastRating {
    pub rating: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BestRating {
    pub rating: i64,
    /// Epoch seconds.
    pub date: i64,
    /// URL of the game where the peak was reached.
    pub game: String,
}

/// Win/loss/draw counts.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct GameRecord {
    pub win: u64,
    pub loss: u64,
    pub draw: u64,
}

impl GameRecord {
    pub fn total(&self) -> u64 {
        self.win + self.loss + self.draw
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TacticsRecord {
    #[serde(default)]
    pub highest: Option<DatedRating>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatedRating {
    pub rating: i64,
    /// Epoch seconds.
    pub date: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PuzzleRushRecord {
    #[serde(default)]
    pub best: Option<PuzzleRushBest>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PuzzleRushBest {
    pub score: u64,
    pub total_attempts: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_without_league() {
        let profile: PlayerProfile = serde_json::from_value(json!({
            "username": "testuser",
            "url": "https://www.chess.com/member/testuser",
            "country": "https://api.chess.com/pub/country/US",
            "joined": 1342890655,
            "last_online": 1718460000,
            "status": "premium",
            "is_streamer": false
        }))
        .unwrap();

        assert_eq!(profile.username, "testuser");
        assert!(profile.league.is_none());
    }

    #[test]
    fn test_profile_missing_required_field() {
        let result = serde_json::from_value::<PlayerProfile>(json!({
            "username": "testuser",
            "url": "https://www.chess.com/member/testuser"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_stats_sparse_payload() {
        let stats: PlayerStats = serde_json::from_value(json!({
            "chess_blitz": {
                "last": {"rating": 1200, "date": 1718460000, "rd": 50},
                "record": {"win": 1, "loss": 2, "draw": 0}
            },
            "tactics": {},
            "puzzle_rush": {}
        }))
        .unwrap();

        let blitz = stats.chess_blitz.unwrap();
        assert!(blitz.best.is_none());
        assert_eq!(blitz.record.total(), 3);
        assert!(stats.chess_rapid.is_none());
        assert!(stats.fide.is_none());
        assert!(stats.tactics.unwrap().highest.is_none());
        assert!(stats.puzzle_rush.unwrap().best.is_none());
    }
}
