//! 17TRACK request types

use carrier_resolver::CarrierId;
use serde::Serialize;

/// A parcel as handed to the tracking gateway
///
/// `carrier: None` lets the provider auto-detect the carrier, which is
/// noticeably less accurate than naming it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingIdentity {
    pub number: String,
    pub carrier: Option<CarrierId>,
}

impl TrackingIdentity {
    pub fn new(number: impl Into<String>, carrier: Option<CarrierId>) -> Self {
        Self {
            number: number.into(),
            carrier,
        }
    }

    /// Request body for `register` and `gettrackinfo`: a one-element array
    pub fn request_body(&self) -> [TrackRequestItem<'_>; 1] {
        [TrackRequestItem {
            number: &self.number,
            carrier: self.carrier,
        }]
    }
}

/// One entry of a 17TRACK request array
#[derive(Debug, Serialize)]
pub struct TrackRequestItem<'a> {
    pub number: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<CarrierId>,
}
