//! MCP Tool Handlers
//!
//! Argument validation happens here; the resolver and tracking service
//! assume well-typed input.

use anyhow::{anyhow, bail, Result};
use serde_json::Value;

use carrier_resolver::CarrierResolver;

use super::protocol::ToolCallResult;
use super::tools::{SEARCH_CARRIER, TRACKING_DELIVERY};
use crate::tracking::{CarrierArg, TrackingOutcome, TrackingService};

pub struct ToolHandlers {
    resolver: CarrierResolver,
    tracking: TrackingService,
}

impl ToolHandlers {
    pub fn new(resolver: CarrierResolver, tracking: TrackingService) -> Self {
        Self { resolver, tracking }
    }

    /// Handle a tool call by name
    pub async fn handle(&self, name: &str, args: Value) -> ToolCallResult {
        match self.dispatch(name, args).await {
            Ok(result) => result,
            Err(e) => ToolCallResult::error(e.to_string()),
        }
    }

    async fn dispatch(&self, name: &str, args: Value) -> Result<ToolCallResult> {
        match name {
            SEARCH_CARRIER => self.search_carrier(args),
            TRACKING_DELIVERY => self.tracking_delivery(args).await,
            _ => Err(anyhow!("Unknown tool: {}", name)),
        }
    }

    /// List carriers matching a free-text name
    fn search_carrier(&self, args: Value) -> Result<ToolCallResult> {
        let query = args["query"]
            .as_str()
            .ok_or_else(|| anyhow!("query required"))?;
        if query.trim().is_empty() {
            bail!("query must not be empty");
        }

        let limit = match args.get("limit") {
            None | Some(Value::Null) => self.resolver.default_limit(),
            Some(v) => v
                .as_u64()
                .filter(|n| *n > 0)
                .map(|n| n as usize)
                .ok_or_else(|| anyhow!("limit must be a positive integer"))?,
        };

        let candidates = self.resolver.find_candidates(query, limit);
        tracing::info!(query, limit, found = candidates.len(), "search-carrier");

        Ok(ToolCallResult::json(&serde_json::to_value(candidates)?))
    }

    /// Register and fetch the status of a parcel
    async fn tracking_delivery(&self, args: Value) -> Result<ToolCallResult> {
        let number = args["number"]
            .as_str()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| anyhow!("number required"))?;

        let carrier = parse_carrier(&args["carrier"])?;
        tracing::info!(number, carrier = ?carrier, "tracking-delivery");

        Ok(match self.tracking.track(number, carrier).await {
            outcome @ TrackingOutcome::Failed(_) => ToolCallResult::error(outcome.into_text()),
            outcome => ToolCallResult::text(outcome.into_text()),
        })
    }
}

/// Carrier argument: an integer id, a numeric string, or a carrier name
fn parse_carrier(value: &Value) -> Result<Option<CarrierArg>> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => Ok(Some(
            n.as_u64()
                .and_then(|id| u32::try_from(id).ok())
                .map(CarrierArg::Id)
                // out-of-range ids fail the table check like any unknown id
                .unwrap_or_else(|| CarrierArg::Name(n.to_string())),
        )),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => Ok(Some(CarrierArg::Name(s.trim().to_string()))),
        _ => bail!("carrier must be an integer or a string"),
    }
}
