//! Tracking flow
//!
//! Gates every request on the carrier table before the gateway is touched,
//! then runs register followed by fetch-status under one deadline.

use std::sync::Arc;
use std::time::Duration;

use carrier_resolver::{CarrierId, CarrierResolver};
use serde_json::Value;

use super::error::TrackingError;
use super::gateway::TrackingGateway;
use super::types::TrackingIdentity;
use crate::config::MissingCarrierPolicy;

/// Carrier as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarrierArg {
    Id(CarrierId),
    /// Free text: a numeric string or a carrier name
    Name(String),
}

/// Result of a tracking request, before rendering
#[derive(Debug)]
pub enum TrackingOutcome {
    InvalidCarrier(String),
    MissingCarrier,
    Status(Value),
    Failed(TrackingError),
}

impl TrackingOutcome {
    /// Text returned to the tool caller
    pub fn into_text(self) -> String {
        match self {
            TrackingOutcome::InvalidCarrier(carrier) => format!(
                "Invalid carrier \"{}\". Use the search-carrier tool to look up the carrier id, \
                 then call tracking-delivery again with that id.",
                carrier
            ),
            TrackingOutcome::MissingCarrier => "A carrier is required to track this delivery. \
                 Use the search-carrier tool to look up the carrier id, \
                 then call tracking-delivery again with that id."
                .to_string(),
            TrackingOutcome::Status(value) => {
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
            }
            TrackingOutcome::Failed(e) => format!("Error tracking delivery: {}", e),
        }
    }
}

pub struct TrackingService {
    resolver: CarrierResolver,
    gateway: Arc<dyn TrackingGateway>,
    missing_carrier: MissingCarrierPolicy,
    timeout: Duration,
}

impl TrackingService {
    pub fn new(
        resolver: CarrierResolver,
        gateway: Arc<dyn TrackingGateway>,
        missing_carrier: MissingCarrierPolicy,
        timeout: Duration,
    ) -> Self {
        Self {
            resolver,
            gateway,
            missing_carrier,
            timeout,
        }
    }

    /// Track a parcel, rejecting unknown or missing carriers up front
    pub async fn track(&self, number: &str, carrier: Option<CarrierArg>) -> TrackingOutcome {
        let carrier = match carrier {
            Some(arg) => match self.resolve_carrier(&arg) {
                Some(id) => Some(id),
                None => {
                    let shown = match arg {
                        CarrierArg::Id(id) => id.to_string(),
                        CarrierArg::Name(name) => name,
                    };
                    tracing::info!(number, carrier = %shown, "Rejected unknown carrier");
                    return TrackingOutcome::InvalidCarrier(shown);
                }
            },
            None => match self.missing_carrier {
                MissingCarrierPolicy::Reject => {
                    tracing::info!(number, "Rejected request without carrier");
                    return TrackingOutcome::MissingCarrier;
                }
                MissingCarrierPolicy::AutoDetect => None,
            },
        };

        let identity = TrackingIdentity::new(number, carrier);
        match self.fetch(&identity).await {
            Ok(status) => TrackingOutcome::Status(status),
            Err(e) => {
                tracing::warn!(number, error = %e, "Tracking failed");
                TrackingOutcome::Failed(e)
            }
        }
    }

    /// Map a caller-supplied carrier to a known carrier id
    fn resolve_carrier(&self, arg: &CarrierArg) -> Option<CarrierId> {
        match arg {
            CarrierArg::Id(id) => self.resolver.validate_id(*id).then_some(*id),
            CarrierArg::Name(name) => match name.trim().parse::<CarrierId>() {
                Ok(id) => self.resolver.validate_id(id).then_some(id),
                Err(_) => self.resolver.resolve_exact(name),
            },
        }
    }

    /// Register, then fetch status, under a single deadline
    async fn fetch(&self, identity: &TrackingIdentity) -> Result<Value, TrackingError> {
        let sequence = async {
            if let Err(e) = self.gateway.register(identity).await {
                // already-registered numbers fail here; status may still be available
                tracing::warn!(number = %identity.number, error = %e, "Register failed");
            }
            self.gateway.get_status(identity).await
        };

        tokio::time::timeout(self.timeout, sequence)
            .await
            .map_err(|_| TrackingError::Timeout {
                after: self.timeout,
            })?
    }
}
