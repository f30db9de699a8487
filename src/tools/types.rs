//! Shared types and traits for the tool system.
//!
//! This module defines the core abstractions for tools:
//! - Tool trait for implementing new tools
//! - Error types for tool execution

use async_trait::async_trait;

use crate::mcp::types::{CallToolResult, ToolDescriptor};

/// Errors that can occur during tool execution.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("execution failed: {0}")]
    Execution(String),
}

/// Trait for implementing tools.
///
/// Tools are invoked by the dispatcher and must be Send + Sync for use
/// across async boundaries. A tool is a pure function of its arguments:
/// it holds no mutable state and two calls with the same input are
/// interchangeable.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the descriptor for this tool, including name, description,
    /// and JSON schema for inputs.
    fn descriptor(&self) -> ToolDescriptor;

    /// Invokes the tool with the given arguments.
    ///
    /// # Arguments
    /// * `args` - The tool arguments as a JSON object
    async fn invoke(&self, args: serde_json::Value) -> Result<CallToolResult, ToolError>;
}
