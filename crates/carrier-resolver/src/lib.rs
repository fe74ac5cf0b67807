//! Carrier Resolver - Read-only Carrier Name Resolution
//!
//! Resolves human-typed carrier names ("dhl", "fedx", "順豐") to the integer
//! carrier keys used by the upstream tracking provider. The reference table is
//! loaded once at startup and never mutated, so every structure in this crate
//! is safe to share between concurrent readers without locking.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Consumers: MCP tool handlers, tracking gate                    │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    CarrierResolver                               │
//! │   find_candidates / resolve_exact / validate_id                 │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    CarrierCatalog (Arc, immutable)               │
//! │   records + CanonicalIndex + ApproximateIndex + id set          │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                  Reference table loader (CSV)                    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use carrier_resolver::{CarrierCatalog, CarrierResolver, ResolverConfig};
//!
//! let catalog = CarrierCatalog::from_path("data/carriers.csv", ResolverConfig::default())?;
//! let resolver = CarrierResolver::new(Arc::new(catalog));
//!
//! let candidates = resolver.find_candidates("fedx", 10);
//! let id = resolver.resolve_exact("DHL Express");
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod index;
pub mod loader;
pub mod record;
pub mod resolver;

// Re-export main types
pub use catalog::CarrierCatalog;
pub use config::ResolverConfig;
pub use error::CatalogError;
pub use index::{AliasCollision, ApproximateIndex, CanonicalIndex, ScoredRecord};
pub use loader::{load_from_path, load_from_reader};
pub use record::{CarrierId, CarrierRecord};
pub use resolver::{CarrierCandidate, CarrierResolver};
