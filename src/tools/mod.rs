//! Tool registry and the built-in CRM tools.
//!
//! This module provides:
//! - The `Tool` trait and error types shared by all tools
//! - The `ToolRegistry` that advertises and dispatches them
//! - The three stub CRM tools: get_customers, create_customer,
//!   update_customer
//!
//! # Tool Lifecycle
//!
//! 1. The registry is built once at startup with the fixed catalog
//! 2. `tools/list` serves descriptors in registration order
//! 3. `tools/call` routes to the named tool's handler
//! 4. Handler failures become `isError` results, never crashes
//!
//! # Adding New Tools
//!
//! 1. Implement the `Tool` trait in a new submodule
//! 2. Register it in `ToolRegistry::with_builtin_tools`

// Public exports
pub use registry::ToolRegistry;
pub use types::{Tool, ToolError};

// Submodules
pub mod customers;
mod registry;
mod types;
