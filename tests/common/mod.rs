//! Common test utilities for dispatch integration tests.

use serde_json::{json, Value};

use crm_mcp_lib::mcp::McpServer;
use crm_mcp_lib::tools::ToolRegistry;

/// Drives a server instance line-by-line the way a stdio client would.
///
/// Each request gets a fresh incrementing id; the harness checks that the
/// response echoes it before handing the frame back to the test.
pub struct TestClient {
    server: McpServer,
    next_id: i64,
}

impl TestClient {
    pub fn new() -> Self {
        Self {
            server: McpServer::new(ToolRegistry::with_builtin_tools()),
            next_id: 1,
        }
    }

    /// Send a request and return the decoded response frame.
    pub async fn request(&mut self, method: &str, params: Value) -> Value {
        let id = self.next_id;
        self.next_id += 1;

        let line = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        })
        .to_string();

        let response = self
            .server
            .handle_line(&line)
            .await
            .expect("requests with ids get responses");
        let frame = serde_json::to_value(&response).unwrap();
        assert_eq!(frame["jsonrpc"], json!("2.0"));
        assert_eq!(frame["id"], json!(id));
        frame
    }

    /// Send a notification and assert that no frame comes back.
    pub async fn notify(&mut self, method: &str) {
        let line = json!({"jsonrpc": "2.0", "method": method}).to_string();
        assert!(
            self.server.handle_line(&line).await.is_none(),
            "notifications must not be answered"
        );
    }

    /// Send a raw line, returning the decoded response frame if any.
    pub async fn send_raw(&mut self, line: &str) -> Option<Value> {
        self.server
            .handle_line(line)
            .await
            .map(|r| serde_json::to_value(&r).unwrap())
    }

    /// Run the full initialization handshake and return the server's
    /// initialize result.
    pub async fn initialize(&mut self) -> Value {
        let frame = self
            .request(
                "initialize",
                json!({
                    "protocolVersion": "2024-11-05",
                    "capabilities": {},
                    "clientInfo": {"name": "test-client", "version": "0.0.0"},
                }),
            )
            .await;
        self.notify("notifications/initialized").await;
        frame["result"].clone()
    }

    /// Call a tool and return its `CallToolResult` payload.
    pub async fn call_tool(&mut self, name: &str, arguments: Value) -> Value {
        let frame = self
            .request("tools/call", json!({"name": name, "arguments": arguments}))
            .await;
        assert!(
            frame.get("error").is_none(),
            "tool calls must not surface protocol errors: {frame}"
        );
        frame["result"].clone()
    }
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}

/// First text block of a `CallToolResult` payload.
pub fn result_text(result: &Value) -> &str {
    result["content"][0]["text"]
        .as_str()
        .expect("result carries a text block")
}
