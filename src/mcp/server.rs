//! Stdio server loop and JSON-RPC method routing.
//!
//! The server reads one newline-delimited JSON-RPC message at a time from
//! stdin, handles it, and writes the response line to stdout. Diagnostics
//! go to stderr through `tracing`; stdout carries protocol frames only.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, trace};

use crate::mcp::types::{
    CallToolParams, Implementation, InitializeRequest, InitializeResult, JsonRpcError,
    JsonRpcRequest, JsonRpcResponse, ListToolsResult, RequestId, ServerCapabilities,
    ToolsCapability, PROTOCOL_VERSION,
};
use crate::tools::ToolRegistry;

/// Maximum number of characters of a frame echoed into trace logs.
const LOG_PREVIEW_LEN: usize = 200;

/// Errors that can take down the server loop.
///
/// Tool and protocol failures never land here; they are answered on the
/// wire. Only stdio I/O and response serialization can end the loop.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize response: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// MCP server exposing a fixed tool catalog over stdio.
pub struct McpServer {
    registry: ToolRegistry,
}

impl McpServer {
    /// Create a new server around the given tool registry.
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Run the server until stdin closes.
    ///
    /// Reads one message per line, handles it, and writes one response
    /// line. Empty lines are skipped; notifications produce no output.
    pub async fn run(&self) -> Result<(), ServerError> {
        let stdin = tokio::io::stdin();
        let mut lines = BufReader::new(stdin).lines();
        let mut stdout = tokio::io::stdout();

        info!("CRM MCP server running on stdio");

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            trace!("<- {}", preview(line));

            let Some(response) = self.handle_line(line).await else {
                continue;
            };

            let body = serde_json::to_string(&response)?;
            trace!("-> {}", preview(&body));
            stdout.write_all(body.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }

        info!("stdin closed, shutting down");
        Ok(())
    }

    /// Handle a single raw message line.
    ///
    /// Returns `None` when no response frame should be written
    /// (notifications).
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(e) => {
                return Some(JsonRpcResponse::error(None, JsonRpcError::parse_error(e.to_string())))
            }
        };

        if request.is_notification() {
            debug!(method = %request.method, "notification");
            return None;
        }

        debug!(method = %request.method, "request");
        Some(self.handle_request(request).await)
    }

    /// Route a request to the matching method handler.
    async fn handle_request(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let JsonRpcRequest {
            id, method, params, ..
        } = request;

        match method.as_str() {
            "initialize" => {
                if let Some(init) = params
                    .and_then(|p| serde_json::from_value::<InitializeRequest>(p).ok())
                {
                    info!(
                        client = %init.client_info.name,
                        version = %init.client_info.version,
                        protocol = %init.protocol_version,
                        "client connected"
                    );
                }
                let result = InitializeResult {
                    protocol_version: PROTOCOL_VERSION.to_string(),
                    capabilities: ServerCapabilities {
                        tools: Some(ToolsCapability {
                            list_changed: Some(false),
                        }),
                    },
                    server_info: Implementation::new("crm-mcp", env!("CARGO_PKG_VERSION")),
                };
                respond_with(id, &result)
            }

            "tools/list" => {
                let result = ListToolsResult {
                    tools: self.registry.list(),
                };
                respond_with(id, &result)
            }

            "tools/call" => {
                let params: CallToolParams =
                    match serde_json::from_value(params.unwrap_or_default()) {
                        Ok(p) => p,
                        Err(e) => {
                            return JsonRpcResponse::error(
                                id,
                                JsonRpcError::invalid_params(e.to_string()),
                            )
                        }
                    };

                let result = self.registry.dispatch(&params.name, params.arguments).await;
                respond_with(id, &result)
            }

            _ => JsonRpcResponse::error(id, JsonRpcError::method_not_found(&method)),
        }
    }
}

/// Serialize a result payload into a success response.
fn respond_with<T: serde::Serialize>(id: Option<RequestId>, result: &T) -> JsonRpcResponse {
    match serde_json::to_value(result) {
        Ok(v) => JsonRpcResponse::success(id, v),
        Err(e) => JsonRpcResponse::error(id, JsonRpcError::internal_error(e.to_string())),
    }
}

/// Truncate a frame for stderr logging.
fn preview(frame: &str) -> String {
    if frame.len() > LOG_PREVIEW_LEN {
        let cut = frame
            .char_indices()
            .take_while(|(i, _)| *i < LOG_PREVIEW_LEN)
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        format!("{}...", &frame[..cut])
    } else {
        frame.to_string()
    }
}
