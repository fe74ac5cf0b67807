//! Errors raised while building the carrier catalog
//!
//! Lookups never fail; only loading the reference table and validating
//! the resolver configuration can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read carrier table: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed carrier table: {0}")]
    Csv(#[from] csv::Error),

    #[error("Carrier table is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error(
        "Invalid thresholds: accept_threshold ({accept}) must be within [0, browse_threshold ({browse})]"
    )]
    InvalidThresholds { accept: f64, browse: f64 },
}
