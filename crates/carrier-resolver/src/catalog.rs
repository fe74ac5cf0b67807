//! Carrier catalog: the read-only bundle every lookup runs against
//!
//! Built once at startup from the reference table. The catalog owns the
//! records and every index derived from them; callers share it behind an
//! `Arc` and never mutate it.

use std::collections::HashSet;
use std::path::Path;

use crate::config::ResolverConfig;
use crate::error::CatalogError;
use crate::index::{ApproximateIndex, CanonicalIndex};
use crate::loader;
use crate::record::{CarrierId, CarrierRecord};

#[derive(Debug)]
pub struct CarrierCatalog {
    records: Vec<CarrierRecord>,
    canonical: CanonicalIndex,
    approximate: ApproximateIndex,
    ids: HashSet<CarrierId>,
    config: ResolverConfig,
}

impl CarrierCatalog {
    /// Build every index over `records`
    pub fn build(records: Vec<CarrierRecord>, config: ResolverConfig) -> Result<Self, CatalogError> {
        config.validate()?;

        let canonical = CanonicalIndex::build(&records);
        let approximate = ApproximateIndex::build(&records, config.browse_threshold);
        let ids: HashSet<CarrierId> = records.iter().map(|r| r.id).collect();
        debug_assert!(canonical.ids().all(|id| ids.contains(&id)));

        tracing::info!(
            records = records.len(),
            aliases = canonical.len(),
            collisions = canonical.collisions().len(),
            "Carrier catalog built"
        );

        Ok(Self {
            records,
            canonical,
            approximate,
            ids,
            config,
        })
    }

    /// Load the reference table from `path` and build the catalog
    pub fn from_path(path: impl AsRef<Path>, config: ResolverConfig) -> Result<Self, CatalogError> {
        let records = loader::load_from_path(path)?;
        Self::build(records, config)
    }

    pub fn records(&self) -> &[CarrierRecord] {
        &self.records
    }

    pub fn canonical(&self) -> &CanonicalIndex {
        &self.canonical
    }

    pub fn approximate(&self) -> &ApproximateIndex {
        &self.approximate
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Record at a table position returned by the approximate index
    pub fn record_at(&self, position: usize) -> Option<&CarrierRecord> {
        self.records.get(position)
    }

    pub fn contains_id(&self, id: CarrierId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
