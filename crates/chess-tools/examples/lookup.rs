//! Run the chess tools against the live chess.com API.
//!
//! Run with: cargo run -p chess-tools --example lookup -- hikaru

use std::env;

use chess_tools::{default_registry, ChessApiConfig, ChessClient, ToolRegistry};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("chess_tools=debug".parse()?),
        )
        .init();

    let player = env::args().nth(1).unwrap_or_else(|| "hikaru".to_string());

    let client = ChessClient::new(ChessApiConfig::default())?;
    let registry = default_registry(client);

    println!("Registered tools:");
    for def in registry.definitions() {
        println!("  - {}: {}", def.name, def.description);
    }
    println!();

    run(&registry, "get_player_info", json!({ "player_name": player })).await?;
    run(&registry, "get_player_stats", json!({ "player_name": player })).await?;
    run(&registry, "get_titled_players", json!({ "title": "wcm" })).await?;

    Ok(())
}

async fn run(
    registry: &ToolRegistry,
    name: &str,
    args: serde_json::Value,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("--- {} ---", name);
    let output = registry.execute_json(name, &args.to_string()).await?;
    println!("{}\n", output.content);
    Ok(())
}
