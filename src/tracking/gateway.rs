use async_trait::async_trait;
use serde_json::Value;

use super::error::TrackingError;
use super::types::TrackingIdentity;

/// Upstream tracking provider
///
/// Responses are opaque provider JSON; nothing in this crate interprets them.
#[async_trait]
pub trait TrackingGateway: Send + Sync {
    /// Register a parcel for tracking
    async fn register(&self, identity: &TrackingIdentity) -> Result<Value, TrackingError>;

    /// Fetch the current status of a registered parcel
    async fn get_status(&self, identity: &TrackingIdentity) -> Result<Value, TrackingError>;
}
