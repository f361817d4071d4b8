//! Roster of players holding a title.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::client::ChessClient;
use crate::error::ToolError;
use crate::format::format_titled_players;
use crate::title::normalize_title;
use crate::tool::{single_string_schema, Tool, ToolArgs, ToolOutput};

/// List players with a title. `title` may be a code (`"GM"`) or a phrase
/// (`"grandmasters"`); unrecognized text becomes an empty code, which the
/// API rejects.
pub async fn get_titled_players(client: &ChessClient, title: &str) -> String {
    let code = normalize_title(title);

    match client.titled_players(code).await {
        Ok(roster) => format_titled_players(&roster, code),
        Err(e) => {
            debug!("Titled lookup for '{}' ('{}') failed: {}", code, title, e);
            format!("Unable to fetch players with the {} title", code)
        }
    }
}

/// Tool wrapper around [`get_titled_players`].
///
/// # Parameters
///
/// - `title` (required): one of GM, WGM, IM, WIM, FM, WFM, NM, WNM, CM, WCM,
///   or a spelled-out name such as "international masters".
pub struct TitledPlayers {
    client: ChessClient,
}

impl TitledPlayers {
    pub fn new(client: ChessClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for TitledPlayers {
    fn name(&self) -> &str {
        "get_titled_players"
    }

    fn description(&self) -> &str {
        "Get list of titled players with a given title \
         (e.g. \"GM\", \"WGM\", \"IM\", \"WIM\", \"FM\", \"WFM\", \"NM\", \"WNM\", \"CM\", \"WCM\")"
    }

    fn input_schema(&self) -> Value {
        single_string_schema(
            "title",
            "Title code (GM, WGM, IM, WIM, FM, WFM, NM, WNM, CM, WCM) or its name",
        )
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let title = args.get_string("title")?;
        Ok(ToolOutput::text(
            get_titled_players(&self.client, &title).await,
        ))
    }
}
