//! Player profile lookup.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::client::ChessClient;
use crate::error::ToolError;
use crate::format::format_player_info;
use crate::tool::{single_string_schema, Tool, ToolArgs, ToolOutput};

/// Returned when the profile itself cannot be fetched.
pub const PLAYER_UNAVAILABLE: &str = "Unable to fetch player data";

/// Used in place of the country name when only the country lookup fails.
pub const COUNTRY_UNAVAILABLE: &str = "Unable to fetch country data";

/// Fetch a profile, resolve its country URL to a name, and format both.
///
/// A failed country lookup does not fail the call; the report carries
/// [`COUNTRY_UNAVAILABLE`] instead.
pub async fn get_player_info(client: &ChessClient, player_name: &str) -> String {
    let profile = match client.player_profile(player_name).await {
        Ok(profile) => profile,
        Err(e) => {
            debug!("Profile lookup for '{}' failed: {}", player_name, e);
            return PLAYER_UNAVAILABLE.to_string();
        }
    };

    let country = match client.country(&profile.country).await {
        Ok(country) => country.name,
        Err(e) => {
            debug!("Country lookup '{}' failed: {}", profile.country, e);
            COUNTRY_UNAVAILABLE.to_string()
        }
    };

    format_player_info(&profile, &country)
}

/// Tool wrapper around [`get_player_info`].
///
/// # Parameters
///
/// - `player_name` (required): chess.com username.
pub struct PlayerInfo {
    client: ChessClient,
}

impl PlayerInfo {
    pub fn new(client: ChessClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for PlayerInfo {
    fn name(&self) -> &str {
        "get_player_info"
    }

    fn description(&self) -> &str {
        "Get information about a chess player"
    }

    fn input_schema(&self) -> Value {
        single_string_schema("player_name", "chess.com username of the player")
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let player_name = args.get_string("player_name")?;
        Ok(ToolOutput::text(
            get_player_info(&self.client, &player_name).await,
        ))
    }
}
