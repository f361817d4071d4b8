//! chess.com statistics lookups exposed as callable tools.
//!
//! Three read-only questions are answered against the public chess.com
//! published-data API and rendered as plain text:
//!
//! - [`PlayerInfo`] (`get_player_info`) - profile, with the country resolved
//!   to its name.
//! - [`TitledPlayers`] (`get_titled_players`) - every player holding a title.
//! - [`PlayerStatsTool`] (`get_player_stats`) - ratings, results, tactics and
//!   puzzle rush.
//!
//! # Architecture
//!
//! Each tool runs a query operation: one or two GETs through
//! [`ChessClient`], then a pure formatter from [`format`]. Upstream failures
//! of any kind become a fixed sentence such as `"Unable to fetch player
//! data"`; the only [`ToolError`]s are bad arguments and unknown tool names.
//!
//! # Example
//!
//! ```rust,ignore
//! use chess_tools::{default_registry, ChessApiConfig, ChessClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ChessClient::new(ChessApiConfig::default())?;
//!     let registry = default_registry(client);
//!
//!     let result = registry
//!         .execute_json("get_titled_players", r#"{"title": "grandmasters"}"#)
//!         .await?;
//!     println!("{}", result.content);
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
pub mod format;
mod http;
pub mod models;
mod registry;
mod title;
mod tool;
pub mod tools;

pub use client::ChessClient;
pub use config::{ChessApiConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use error::{FetchError, ToolError};
pub use http::{HttpSource, JsonSource};
pub use registry::ToolRegistry;
pub use title::{normalize_title, Title};
pub use tool::{single_string_schema, Tool, ToolArgs, ToolDefinition, ToolOutput};
pub use tools::{
    get_player_info, get_player_stats, get_titled_players, PlayerInfo, PlayerStatsTool,
    TitledPlayers,
};

// Re-export async_trait for convenience
pub use async_trait::async_trait;

/// Create a registry with the three chess tools sharing `client`.
pub fn default_registry(client: ChessClient) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register(PlayerInfo::new(client.clone()));
    registry.register(TitledPlayers::new(client.clone()));
    registry.register(PlayerStatsTool::new(client));

    registry
}
