use std::time::Duration;

use thiserror::Error;

/// Upstream tracking failures
///
/// Rendered to callers as `Error tracking delivery: <message>`.
#[derive(Debug, Error)]
pub enum TrackingError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Provider returned malformed JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Provider did not answer within {}s", .after.as_secs_f64())]
    Timeout { after: Duration },
}
