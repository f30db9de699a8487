//! MCP (Model Context Protocol) server implementation.
//!
//! This module implements the server side of MCP over stdio:
//! - `types`: JSON-RPC 2.0 envelope and MCP protocol types
//! - `server`: the line-oriented stdio loop and method routing
//!
//! The wire contract is newline-delimited JSON-RPC 2.0. A client opens
//! with the `initialize` handshake, follows up with the
//! `notifications/initialized` notification, then issues `tools/list` and
//! `tools/call` requests.

pub mod server;
pub mod types;

pub use server::{McpServer, ServerError};
pub use types::*;
