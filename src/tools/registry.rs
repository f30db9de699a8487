//! Tool registry for catalog listing and dispatch.
//!
//! The ToolRegistry owns the fixed set of built-in tools, advertises their
//! descriptors in a stable order, and routes calls by name. Tool failures
//! are converted to error results at this boundary so a bad call can never
//! take the server down.

use tracing::debug;

use crate::mcp::types::{CallToolResult, ToolDescriptor};
use crate::tools::customers::{CreateCustomerTool, GetCustomersTool, UpdateCustomerTool};
use crate::tools::types::Tool;

/// Registry of all available tools.
///
/// Tools are stored in registration order; `list` preserves that order so
/// every `tools/list` response within a process lifetime is identical.
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Creates a registry with all built-in CRM tools registered.
    pub fn with_builtin_tools() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(GetCustomersTool));
        registry.register(Box::new(CreateCustomerTool));
        registry.register(Box::new(UpdateCustomerTool));
        registry
    }

    /// Registers a tool at the end of the catalog.
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        self.tools.push(tool);
    }

    /// List all available tools, registration order preserved.
    pub fn list(&self) -> Vec<ToolDescriptor> {
        self.tools.iter().map(|t| t.descriptor()).collect()
    }

    /// Invoke a tool by name with the given arguments.
    ///
    /// Unknown names and handler failures both surface as results with
    /// `isError = true`; this method never fails.
    pub async fn dispatch(&self, name: &str, arguments: serde_json::Value) -> CallToolResult {
        let Some(tool) = self.tools.iter().find(|t| t.descriptor().name == name) else {
            debug!(tool = name, "call to unknown tool");
            return CallToolResult::error(format!("Unknown tool: {}", name));
        };

        match tool.invoke(arguments).await {
            Ok(result) => result,
            Err(e) => {
                debug!(tool = name, error = %e, "tool failed");
                CallToolResult::error(format!("Error executing {}: {}", name, e))
            }
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::with_builtin_tools()
    }
}
