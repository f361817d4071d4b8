//! Chess lookups exposed as tools.

mod player_info;
mod player_stats;
mod titled_players;

pub use player_info::{get_player_info, PlayerInfo, COUNTRY_UNAVAILABLE, PLAYER_UNAVAILABLE};
pub use player_stats::{get_player_stats, PlayerStatsTool};
pub use titled_players::{get_titled_players, TitledPlayers};
