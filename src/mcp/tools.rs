//! MCP Tool Definitions

use super::protocol::Tool;
use serde_json::json;

pub const SEARCH_CARRIER: &str = "search-carrier";
pub const TRACKING_DELIVERY: &str = "tracking-delivery";

/// Get all available MCP tools
pub fn get_tools() -> Vec<Tool> {
    vec![
        Tool {
            name: SEARCH_CARRIER,
            description: "Find carriers by name. Accepts English or Chinese names and tolerates \
                          typos. Returns candidate carrier ids to pass to tracking-delivery.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Carrier name or part of it (e.g. 'dhl', '顺丰')"
                    },
                    "limit": {
                        "type": "integer",
                        "minimum": 1,
                        "default": 10,
                        "description": "Maximum number of candidates"
                    }
                },
                "required": ["query"]
            }),
        },
        Tool {
            name: TRACKING_DELIVERY,
            description: "Track a delivery by its tracking number and carrier. Use \
                          search-carrier first to find the carrier id.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "number": {
                        "type": "string",
                        "description": "Tracking number of the parcel"
                    },
                    "carrier": {
                        "type": ["integer", "string"],
                        "description": "Carrier id from search-carrier, or an exact carrier name"
                    }
                },
                "required": ["number"]
            }),
        },
    ]
}
