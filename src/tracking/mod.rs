//! 17TRACK parcel tracking
//!
//! This module provides:
//! - The `TrackingGateway` seam over the upstream provider
//! - `Track17Client`, the HTTP implementation of that seam
//! - `TrackingService`, which validates the carrier before any upstream call

pub mod client;
pub mod error;
pub mod gateway;
pub mod service;
pub mod types;

pub use client::Track17Client;
pub use error::TrackingError;
pub use gateway::TrackingGateway;
pub use service::{CarrierArg, TrackingOutcome, TrackingService};
pub use types::{TrackRequestItem, TrackingIdentity};
