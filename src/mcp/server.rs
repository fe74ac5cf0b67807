//! MCP Server
//!
//! Main server loop handling newline-delimited JSON-RPC messages.

use anyhow::Result;
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use super::handlers::ToolHandlers;
use super::protocol::*;
use super::tools::get_tools;

/// Longest message prefix written to the log
const PREVIEW_CHARS: usize = 100;

/// MCP Server
pub struct McpServer {
    handlers: ToolHandlers,
}

impl McpServer {
    pub fn new(handlers: ToolHandlers) -> Self {
        Self { handlers }
    }

    /// Run the server, reading from stdin and writing to stdout
    pub async fn run_stdio(&self) -> Result<()> {
        self.run(tokio::io::stdin(), tokio::io::stdout()).await
    }

    /// Serve until `reader` reaches EOF
    pub async fn run<R, W>(&self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = BufReader::new(reader).lines();

        tracing::info!("Server started, waiting for messages");

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            tracing::debug!("<- {}", preview(line));

            let Some(response) = self.handle(line).await else {
                continue;
            };
            let out = serde_json::to_string(&response)?;

            tracing::debug!("-> {}", preview(&out));

            writer.write_all(out.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }

        tracing::info!("Server shutting down");
        Ok(())
    }

    /// Handle a single JSON-RPC message; notifications yield no response
    pub async fn handle(&self, msg: &str) -> Option<JsonRpcResponse> {
        let value: Value = match serde_json::from_str(msg) {
            Ok(v) => v,
            Err(e) => return Some(JsonRpcResponse::error(None, PARSE_ERROR, e.to_string())),
        };

        let id = value.get("id").filter(|id| !id.is_null()).cloned();
        let req: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(r) => r,
            Err(e) => return Some(JsonRpcResponse::error(id, INVALID_REQUEST, e.to_string())),
        };

        if req.is_notification() {
            tracing::debug!(method = %req.method, "Notification");
            return None;
        }

        Some(self.dispatch(req).await)
    }

    async fn dispatch(&self, req: JsonRpcRequest) -> JsonRpcResponse {
        let id = req.id.clone();

        match req.method.as_str() {
            "initialize" => JsonRpcResponse::success(id, initialize_result()),

            "ping" => JsonRpcResponse::success(id, json!({})),

            "tools/list" => respond(id, ToolsListResult { tools: get_tools() }),

            "tools/call" => {
                let params: ToolCallParams = match serde_json::from_value(req.params) {
                    Ok(p) => p,
                    Err(e) => return JsonRpcResponse::error(id, INVALID_PARAMS, e.to_string()),
                };

                tracing::info!(tool = %params.name, "Calling tool");
                let result = self.handlers.handle(&params.name, params.arguments).await;
                respond(id, result)
            }

            _ => JsonRpcResponse::error(
                id,
                METHOD_NOT_FOUND,
                format!("Unknown method: {}", req.method),
            ),
        }
    }
}

fn respond(id: Option<Value>, result: impl serde::Serialize) -> JsonRpcResponse {
    match serde_json::to_value(result) {
        Ok(v) => JsonRpcResponse::success(id, v),
        Err(e) => JsonRpcResponse::error(id, INTERNAL_ERROR, format!("Serialization error: {}", e)),
    }
}

fn preview(line: &str) -> String {
    if line.chars().count() > PREVIEW_CHARS {
        format!("{}...", line.chars().take(PREVIEW_CHARS).collect::<String>())
    } else {
        line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_is_char_safe() {
        let long = "联".repeat(150);
        let shown = preview(&long);
        assert!(shown.ends_with("..."));
        assert_eq!(shown.chars().count(), PREVIEW_CHARS + 3);
        assert_eq!(preview("short"), "short");
    }
}
