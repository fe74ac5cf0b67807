//! MCP (Model Context Protocol) Server Module
//!
//! Exposes carrier search and parcel tracking as MCP tools.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        MCP Client                            │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//!                               │ MCP Protocol (JSON-RPC over stdio)
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      MCP Server (Rust)                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Tools:                                                      │
//! │  ├── search-carrier     - Carrier name → candidate ids      │
//! │  └── tracking-delivery  - Validate carrier, then track      │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │            CarrierResolver + 17TRACK gateway                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! TRACK17_API_KEY=... ./target/debug/parcel_mcp --carriers data/carriers.csv
//! ```

pub mod handlers;
pub mod protocol;
pub mod server;
pub mod tools;

pub use handlers::ToolHandlers;
pub use server::McpServer;
