//! Exact alias index
//!
//! Maps every non-empty, lower-cased carrier name to its carrier id.
//! When two records share an alias the first record in table order keeps
//! it; the losing mapping is recorded as an [`AliasCollision`].

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::fold;
use crate::record::{CarrierId, CarrierRecord};

/// An alias claimed by more than one carrier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasCollision {
    /// Lower-cased alias
    pub alias: String,
    /// Carrier that kept the alias
    pub kept: CarrierId,
    /// Carrier whose claim was dropped
    pub dropped: CarrierId,
}

#[derive(Debug, Default)]
pub struct CanonicalIndex {
    by_alias: HashMap<String, CarrierId>,
    collisions: Vec<AliasCollision>,
}

impl CanonicalIndex {
    pub fn build(records: &[CarrierRecord]) -> Self {
        let mut by_alias = HashMap::new();
        let mut collisions = Vec::new();

        for record in records {
            for alias in record.aliases() {
                match by_alias.entry(fold(alias)) {
                    Entry::Vacant(slot) => {
                        slot.insert(record.id);
                    }
                    Entry::Occupied(slot) => {
                        let kept = *slot.get();
                        if kept != record.id {
                            tracing::warn!(
                                alias = %slot.key(),
                                kept,
                                dropped = record.id,
                                "Alias claimed by more than one carrier; keeping first"
                            );
                            collisions.push(AliasCollision {
                                alias: slot.key().clone(),
                                kept,
                                dropped: record.id,
                            });
                        }
                    }
                }
            }
        }

        Self {
            by_alias,
            collisions,
        }
    }

    /// Exact, case-insensitive alias lookup
    pub fn lookup(&self, name: &str) -> Option<CarrierId> {
        self.by_alias.get(&fold(name)).copied()
    }

    /// Aliases that were claimed by more than one carrier
    pub fn collisions(&self) -> &[AliasCollision] {
        &self.collisions
    }

    pub fn len(&self) -> usize {
        self.by_alias.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_alias.is_empty()
    }

    /// Carrier ids referenced by the index
    pub fn ids(&self) -> impl Iterator<Item = CarrierId> + '_ {
        self.by_alias.values().copied()
    }
}
