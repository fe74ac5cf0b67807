//! Carrier reference records

use serde::Serialize;

/// Upstream provider carrier key (e.g. 100001 for DHL Express)
pub type CarrierId = u32;

/// A single row of the carrier reference table
///
/// `names` keeps the localized display names in table column order
/// (English, Simplified Chinese, Hong Kong). Empty columns are kept as
/// empty strings so positions stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarrierRecord {
    pub id: CarrierId,
    pub names: Vec<String>,
}

impl CarrierRecord {
    pub fn new(id: CarrierId, names: Vec<String>) -> Self {
        Self { id, names }
    }

    /// Name shown to humans: the first non-empty localized name
    pub fn display_name(&self) -> &str {
        self.names
            .iter()
            .map(|n| n.as_str())
            .find(|n| !n.is_empty())
            .unwrap_or("")
    }

    /// Non-empty names, in column order
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.names
            .iter()
            .map(|n| n.as_str())
            .filter(|n| !n.is_empty())
    }
}
