//! Stub CRM tool-dispatch server.
//!
//! This crate exposes three fake customer-relationship operations through
//! an MCP-style tool-dispatch contract over stdio. It handles:
//! - The MCP initialization handshake and JSON-RPC 2.0 framing
//! - A fixed tool catalog advertised via `tools/list`
//! - Routing `tools/call` requests to the matching handler
//! - Converting handler failures into error results, never crashes
//!
//! # Architecture
//!
//! - `mcp`: protocol types and the stdio server loop
//! - `tools`: the `Tool` trait, the registry, and the CRM tool handlers
//!
//! There is no persistence and no cross-call state; every call is a pure
//! function of its arguments over a fixed in-memory record set.

pub mod mcp;
pub mod tools;
