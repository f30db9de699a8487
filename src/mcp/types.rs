//! MCP (Model Context Protocol) protocol types.
//!
//! Type definitions for the subset of the MCP specification this server
//! implements: the JSON-RPC 2.0 envelope, the initialization handshake,
//! and the tool catalog/call messages.

use serde::{Deserialize, Serialize};

// ============================================================================
// JSON-RPC Base Types
// ============================================================================

/// JSON-RPC version constant.
pub const JSON_RPC_VERSION: &str = "2.0";

/// MCP protocol version this server speaks.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// JSON-RPC error codes as defined by the MCP specification.
pub mod error_codes {
    /// Parse error (-32700): Invalid JSON was received by the server.
    pub const PARSE_ERROR: i32 = -32700;
    /// Invalid Request (-32600): The JSON sent is not a valid Request object.
    pub const INVALID_REQUEST: i32 = -32600;
    /// Method not found (-32601): The method does not exist / is not available.
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Invalid params (-32602): Invalid method parameter(s).
    pub const INVALID_PARAMS: i32 = -32602;
    /// Internal error (-32603): Internal JSON-RPC error.
    pub const INTERNAL_ERROR: i32 = -32603;
}

/// A JSON-RPC request object.
///
/// A request without an `id` is a notification and must not be answered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JsonRpcRequest {
    /// JSON-RPC version (must be "2.0").
    pub jsonrpc: String,
    /// Request identifier (absent for notifications).
    pub id: Option<RequestId>,
    /// Method name to invoke.
    pub method: String,
    /// Method parameters (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
}

impl JsonRpcRequest {
    /// Create a new JSON-RPC request.
    pub fn new(
        id: RequestId,
        method: impl Into<String>,
        params: Option<serde_json::Value>,
    ) -> Self {
        Self {
            jsonrpc: JSON_RPC_VERSION.to_string(),
            id: Some(id),
            method: method.into(),
            params,
        }
    }

    /// Create a new notification request (no id).
    pub fn notification(method: impl Into<String>, params: Option<serde_json::Value>) -> Self {
        Self {
            jsonrpc: JSON_RPC_VERSION.to_string(),
            id: None,
            method: method.into(),
            params,
        }
    }

    /// Whether this request is a notification (and therefore gets no reply).
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// A JSON-RPC response object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JsonRpcResponse {
    /// JSON-RPC version (must be "2.0").
    pub jsonrpc: String,
    /// Request identifier matching the request. Null when the request id
    /// could not be read (parse errors).
    pub id: Option<RequestId>,
    /// Result of the method call (if successful).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    /// Error object (if the call failed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    /// Create a successful response.
    pub fn success(id: Option<RequestId>, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: JSON_RPC_VERSION.to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Option<RequestId>, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: JSON_RPC_VERSION.to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// A JSON-RPC error object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JsonRpcError {
    /// Error code (integer).
    pub code: i32,
    /// Error message (short description).
    pub message: String,
    /// Additional error data (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcError {
    /// Create a new JSON-RPC error.
    pub fn new(code: i32, message: impl Into<String>, data: Option<serde_json::Value>) -> Self {
        Self {
            code,
            message: message.into(),
            data,
        }
    }

    /// Create a parse error.
    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::new(error_codes::PARSE_ERROR, message, None)
    }

    /// Create a method not found error.
    pub fn method_not_found(method: impl AsRef<str>) -> Self {
        Self::new(
            error_codes::METHOD_NOT_FOUND,
            format!("Method not found: {}", method.as_ref()),
            None,
        )
    }

    /// Create an invalid params error.
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(error_codes::INVALID_PARAMS, message, None)
    }

    /// Create an internal error.
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(error_codes::INTERNAL_ERROR, message, None)
    }
}

/// Request identifier type (string or integer).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum RequestId {
    /// String identifier.
    String(String),
    /// Integer identifier.
    Number(i64),
}

impl From<&str> for RequestId {
    fn from(s: &str) -> Self {
        RequestId::String(s.to_string())
    }
}

impl From<i64> for RequestId {
    fn from(n: i64) -> Self {
        RequestId::Number(n)
    }
}

// ============================================================================
// Initialize Types
// ============================================================================

/// Initialize request params sent by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeRequest {
    /// Protocol version supported by the client.
    pub protocol_version: String,
    /// Client capabilities. Accepted but unused; this server only serves
    /// tools.
    #[serde(default)]
    pub capabilities: serde_json::Value,
    /// Information about the client implementation.
    pub client_info: Implementation,
}

/// Initialize result sent back to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    /// Protocol version the server speaks.
    pub protocol_version: String,
    /// Server capabilities.
    pub capabilities: ServerCapabilities,
    /// Information about the server implementation.
    pub server_info: Implementation,
}

/// Server capabilities advertised during initialization.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServerCapabilities {
    /// Tools capability configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<ToolsCapability>,
}

/// Tools capability configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ToolsCapability {
    /// Whether the server emits notifications for tool list changes. The
    /// catalog here is fixed at startup, so this is always false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_changed: Option<bool>,
}

/// Implementation information (name and version).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Implementation {
    /// Implementation name.
    pub name: String,
    /// Implementation version.
    pub version: String,
}

impl Implementation {
    /// Create new implementation info.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

// ============================================================================
// Tool Types
// ============================================================================

/// Descriptor for a tool the server advertises.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    /// Tool name (unique within the catalog).
    pub name: String,
    /// Human-readable description of the tool.
    pub description: String,
    /// JSON Schema for the tool's input parameters.
    pub input_schema: serde_json::Value,
}

/// Result of listing tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListToolsResult {
    /// The full catalog, insertion order preserved.
    pub tools: Vec<ToolDescriptor>,
}

/// Params of a `tools/call` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToolParams {
    /// Name of the tool to call.
    pub name: String,
    /// Arguments for the tool call.
    #[serde(default)]
    pub arguments: serde_json::Value,
}

/// Result of a tool call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToolResult {
    /// Content returned by the tool.
    pub content: Vec<Content>,
    /// Whether the tool call resulted in an error. Absent on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

impl CallToolResult {
    /// Build a successful result carrying a single text block.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![Content::Text(TextContent { text: text.into() })],
            is_error: None,
        }
    }

    /// Build an error result carrying a single text block.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![Content::Text(TextContent {
                text: message.into(),
            })],
            is_error: Some(true),
        }
    }

    /// Whether this result reports a tool-level error.
    pub fn is_error(&self) -> bool {
        self.is_error.unwrap_or(false)
    }
}

// ============================================================================
// Content Types
// ============================================================================

/// Content blocks a tool can return.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Content {
    /// Text content.
    Text(TextContent),
}

/// Text content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContent {
    /// The text content.
    pub text: String,
}

impl Content {
    /// The text of this block, if it is a text block.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Text(t) => Some(&t.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn request_id_roundtrips_strings_and_numbers() {
        let s: RequestId = serde_json::from_value(json!("abc")).unwrap();
        assert_eq!(s, RequestId::String("abc".to_string()));

        let n: RequestId = serde_json::from_value(json!(7)).unwrap();
        assert_eq!(n, RequestId::Number(7));

        assert_eq!(serde_json::to_value(&s).unwrap(), json!("abc"));
        assert_eq!(serde_json::to_value(&n).unwrap(), json!(7));
    }

    #[test]
    fn request_without_id_is_notification() {
        let req: JsonRpcRequest = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "method": "notifications/initialized"
        }))
        .unwrap();
        assert!(req.is_notification());
        assert_eq!(req.method, "notifications/initialized");
        assert!(req.params.is_none());
    }

    #[test]
    fn response_serializes_camel_case_and_skips_absent_fields() {
        let ok = JsonRpcResponse::success(Some(1.into()), json!({"tools": []}));
        let v = serde_json::to_value(&ok).unwrap();
        assert_eq!(v, json!({"jsonrpc": "2.0", "id": 1, "result": {"tools": []}}));

        let err = JsonRpcResponse::error(None, JsonRpcError::parse_error("bad json"));
        let v = serde_json::to_value(&err).unwrap();
        assert_eq!(v["id"], json!(null));
        assert_eq!(v["error"]["code"], json!(error_codes::PARSE_ERROR));
        assert!(v.get("result").is_none());
    }

    #[test]
    fn call_tool_result_wire_shape() {
        let ok = CallToolResult::text("hello");
        let v = serde_json::to_value(&ok).unwrap();
        assert_eq!(v, json!({"content": [{"type": "text", "text": "hello"}]}));

        let err = CallToolResult::error("boom");
        let v = serde_json::to_value(&err).unwrap();
        assert_eq!(v["isError"], json!(true));
        assert_eq!(v["content"][0]["text"], json!("boom"));
    }

    #[test]
    fn tool_descriptor_uses_input_schema_key() {
        let tool = ToolDescriptor {
            name: "get_customers".to_string(),
            description: "Retrieve customers".to_string(),
            input_schema: json!({"type": "object"}),
        };
        let v = serde_json::to_value(&tool).unwrap();
        assert!(v.get("inputSchema").is_some());
        assert!(v.get("input_schema").is_none());
    }

    #[test]
    fn initialize_result_wire_shape() {
        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
            },
            server_info: Implementation::new("crm-mcp", "0.1.0"),
        };
        let v = serde_json::to_value(&result).unwrap();
        assert_eq!(v["protocolVersion"], json!("2024-11-05"));
        assert_eq!(v["capabilities"]["tools"]["listChanged"], json!(false));
        assert_eq!(v["serverInfo"]["name"], json!("crm-mcp"));
    }
}
