//! Rating and results summary for a player.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::client::ChessClient;
use crate::error::ToolError;
use crate::format::format_stats;
use crate::tool::{single_string_schema, Tool, ToolArgs, ToolOutput};

pub async fn get_player_stats(client: &ChessClient, player_name: &str) -> String {
    match client.player_stats(player_name).await {
        Ok(stats) => format_stats(&stats, player_name),
        Err(e) => {
            debug!("Stats lookup for '{}' failed: {}", player_name, e);
            format!("Unable to fetch stats for {}", player_name)
        }
    }
}

/// Tool wrapper around [`get_player_stats`].
///
/// # Parameters
///
/// - `player_name` (required): chess.com username.
pub struct PlayerStatsTool {
    client: ChessClient,
}

impl PlayerStatsTool {
    pub fn new(client: ChessClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for PlayerStatsTool {
    fn name(&self) -> &str {
        "get_player_stats"
    }

    fn description(&self) -> &str {
        "Get stats for a chess player"
    }

    fn input_schema(&self) -> Value {
        single_string_schema("player_name", "chess.com username of the player")
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let player_name = args.get_string("player_name")?;
        Ok(ToolOutput::text(
            get_player_stats(&self.client, &player_name).await,
        ))
    }
}
