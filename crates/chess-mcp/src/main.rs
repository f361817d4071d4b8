//! chess-mcp: serves the chess.com lookup tools over MCP on stdin/stdout.
//!
//! Tools: `get_player_info`, `get_titled_players`, `get_player_stats`.
//! Logs go to stderr; set `RUST_LOG` to adjust (default `info`).

mod server;
mod stdio;

use chess_tools::{default_registry, ChessApiConfig, ChessClient};
use tracing::info;
use tracing_subscriber::EnvFilter;

use server::ChessServer;

#[tokio::main]
async fn main() -> Result<(), stdio::BoxError> {
    // stdout carries protocol traffic only.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = ChessApiConfig::default();
    info!("Starting chess MCP server (api: {})", config.base_url);

    let client = ChessClient::new(config)?;
    let server = ChessServer::new(default_registry(client));

    stdio::serve(server, tokio::io::stdin(), tokio::io::stdout()).await?;

    info!("Shutting down");
    Ok(())
}
