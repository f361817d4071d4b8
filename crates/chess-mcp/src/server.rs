//! MCP handler that serves a [`ToolRegistry`].

use std::collections::HashMap;
use std::sync::Arc;

use chess_tools::ToolRegistry;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, ErrorData, Implementation, JsonObject,
    ListToolsResult, PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler};
use serde_json::Value;
use tracing::{debug, warn};

/// Name reported in `serverInfo`.
pub const SERVER_NAME: &str = "chess";

const INSTRUCTIONS: &str = "Look up chess.com player profiles, titled-player rosters and \
rating statistics. Upstream failures come back as a plain sentence, not an error.";

#[derive(Clone)]
pub struct ChessServer {
    registry: Arc<ToolRegistry>,
}

impl ChessServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Registry definitions as MCP tool descriptors, in name order.
    pub fn tools(&self) -> Vec<Tool> {
        self.registry
            .definitions()
            .into_iter()
            .map(|def| {
                let schema = match def.input_schema {
                    Value::Object(map) => map,
                    _ => JsonObject::new(),
                };
                Tool::new(def.name, def.description, Arc::new(schema))
            })
            .collect()
    }

    /// Run one tool. Argument and dispatch errors become a result flagged
    /// `isError`; upstream outages are ordinary text.
    pub async fn run_tool(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        let params: HashMap<String, Value> = arguments.unwrap_or_default().into_iter().collect();

        match self.registry.execute(name, params).await {
            Ok(output) => CallToolResult::success(vec![Content::text(output.content)]),
            Err(e) => {
                warn!("Tool '{}' failed: {}", name, e);
                CallToolResult::error(vec![Content::text(e.to_string())])
            }
        }
    }
}

impl ServerHandler for ChessServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(self.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        debug!("tools/call {}", request.name);
        Ok(self.run_tool(&request.name, request.arguments).await)
    }
}
