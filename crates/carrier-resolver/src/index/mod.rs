//! Lookup structures built once over the carrier table
//!
//! - [`CanonicalIndex`]: lower-cased alias -> carrier id, exact lookup
//! - [`ApproximateIndex`]: Jaro-Winkler ranking for typo-tolerant lookup
//!
//! Both are immutable after construction and hold no interior mutability,
//! so they are `Send + Sync` and can be shared behind an `Arc`.

mod approximate;
mod canonical;

pub use approximate::{ApproximateIndex, ScoredRecord};
pub use canonical::{AliasCollision, CanonicalIndex};

/// Case folding shared by every lookup path
///
/// Lower-casing only: no trimming, no punctuation stripping, no locale folding.
pub(crate) fn fold(value: &str) -> String {
    value.to_lowercase()
}
