//! Parcel Tracker
//!
//! MCP server exposing two tools:
//! - `search-carrier`: resolve a human-typed carrier name to carrier keys
//! - `tracking-delivery`: register a parcel with 17TRACK and fetch its status
//!
//! Carrier resolution lives in the `carrier-resolver` crate. This crate holds
//! the glue: configuration, the upstream tracking gateway and the JSON-RPC
//! transport.

pub mod config;
pub mod mcp;
pub mod tracking;

pub use config::{AppConfig, ConfigError, MissingCarrierPolicy, TrackingConfig};
pub use mcp::McpServer;
pub use tracking::{Track17Client, TrackingError, TrackingGateway, TrackingService};
