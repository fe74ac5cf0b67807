//! Carrier Resolver - two-tier carrier name resolution
//!
//! `find_candidates` is for browsing: a human picks from the list.
//! 1. Case-insensitive substring match on every localized name. Any hit
//!    wins outright; results keep table order.
//! 2. Only when nothing contains the query: fuzzy ranking, best first,
//!    bounded by the browse threshold.
//!
//! `resolve_exact` returns a single id with no confirmation step, so its
//! fuzzy fallback is bounded by the stricter accept threshold and refuses
//! to pick between carriers that tie for the best score.

use std::sync::Arc;

use serde::Serialize;

use crate::catalog::CarrierCatalog;
use crate::index::fold;
use crate::record::CarrierId;

/// Scores this close to the best one count as a tie
const TIE_EPSILON: f64 = 1e-6;

/// A carrier offered to the caller
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarrierCandidate {
    pub id: CarrierId,
    pub name: String,
}

/// Resolution policy over a shared, immutable catalog
#[derive(Debug, Clone)]
pub struct CarrierResolver {
    catalog: Arc<CarrierCatalog>,
}

impl CarrierResolver {
    pub fn new(catalog: Arc<CarrierCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &CarrierCatalog {
        &self.catalog
    }

    /// Candidate count used when the caller gives no limit
    pub fn default_limit(&self) -> usize {
        self.catalog.config().default_limit
    }

    /// Browsable candidates for a free-text query, at most `limit` of them
    pub fn find_candidates(&self, query: &str, limit: usize) -> Vec<CarrierCandidate> {
        let substring = self.substring_matches(query, limit);
        if !substring.is_empty() {
            tracing::debug!(query, hits = substring.len(), "Substring match");
            return substring;
        }

        let fuzzy: Vec<CarrierCandidate> = self
            .catalog
            .approximate()
            .search(query)
            .into_iter()
            .filter_map(|hit| self.catalog.record_at(hit.position))
            .take(limit)
            .map(|record| CarrierCandidate {
                id: record.id,
                name: record.display_name().to_string(),
            })
            .collect();

        tracing::debug!(query, hits = fuzzy.len(), "Fuzzy fallback");
        fuzzy
    }

    /// Resolve a carrier name to a single id without human confirmation
    pub fn resolve_exact(&self, name: &str) -> Option<CarrierId> {
        if let Some(id) = self.catalog.canonical().lookup(name) {
            return Some(id);
        }

        let ranked = self.catalog.approximate().search(name);
        let best = ranked.first()?;
        if best.score > self.catalog.config().accept_threshold {
            tracing::debug!(name, score = best.score, "Best fuzzy candidate below acceptance bound");
            return None;
        }

        let id = self.catalog.record_at(best.position)?.id;

        // a tie with another carrier is a guess, not a resolution
        let rival = ranked
            .iter()
            .skip(1)
            .take_while(|hit| hit.score - best.score <= TIE_EPSILON)
            .filter_map(|hit| self.catalog.record_at(hit.position))
            .find(|record| record.id != id);
        if let Some(rival) = rival {
            tracing::debug!(name, id, rival = rival.id, score = best.score, "Ambiguous fuzzy match");
            return None;
        }

        Some(id)
    }

    /// Whether `id` is a known carrier key
    pub fn validate_id(&self, id: CarrierId) -> bool {
        self.catalog.contains_id(id)
    }

    fn substring_matches(&self, query: &str, limit: usize) -> Vec<CarrierCandidate> {
        let needle = fold(query);

        self.catalog
            .records()
            .iter()
            .filter(|record| record.aliases().any(|name| fold(name).contains(&needle)))
            .take(limit)
            .map(|record| CarrierCandidate {
                id: record.id,
                name: record.display_name().to_string(),
            })
            .collect()
    }
}
