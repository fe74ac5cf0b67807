//! Typo-tolerant carrier lookup
//!
//! Ranks every record by Jaro-Winkler similarity against the query. A
//! record's similarity is the best of:
//! - the whole lower-cased name, for each localized name
//! - each whitespace-separated token of a multi-word name, so that a
//!   misspelled partial like "expres" still finds "DHL Express"
//!
//! The returned score is `1 - similarity` (lower is better). Only records
//! whose score is within the browse threshold are returned.

use super::fold;
use crate::record::CarrierRecord;

/// A ranked candidate: the record's position in the table plus its score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredRecord {
    pub position: usize,
    pub score: f64,
}

/// Pre-folded names for one record
#[derive(Debug)]
struct IndexedNames {
    names: Vec<String>,
    tokens: Vec<String>,
}

#[derive(Debug)]
pub struct ApproximateIndex {
    entries: Vec<IndexedNames>,
    threshold: f64,
}

impl ApproximateIndex {
    /// Build over `records`, keeping candidates whose score is at most `threshold`
    pub fn build(records: &[CarrierRecord], threshold: f64) -> Self {
        let entries = records
            .iter()
            .map(|record| {
                let names: Vec<String> = record.aliases().map(fold).collect();
                let tokens = names
                    .iter()
                    .filter(|n| n.split_whitespace().nth(1).is_some())
                    .flat_map(|n| n.split_whitespace().map(str::to_string))
                    .collect();
                IndexedNames { names, tokens }
            })
            .collect();

        Self { entries, threshold }
    }

    /// Rank records against `query`, best first
    ///
    /// Ties keep table order.
    pub fn search(&self, query: &str) -> Vec<ScoredRecord> {
        let query = fold(query);
        if query.is_empty() {
            return vec![];
        }

        let mut results: Vec<ScoredRecord> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(position, entry)| {
                let similarity = entry
                    .names
                    .iter()
                    .chain(entry.tokens.iter())
                    .map(|candidate| strsim::jaro_winkler(&query, candidate))
                    .fold(0.0_f64, f64::max);
                let score = 1.0 - similarity;
                (score <= self.threshold).then_some(ScoredRecord { position, score })
            })
            .collect();

        // sort_by is stable, so equal scores stay in table order
        results.sort_by(|a, b| {
            a.score
                .partial_cmp(&b.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<CarrierRecord> {
        vec![
            CarrierRecord::new(100, vec!["DHL Express".into(), "敦豪".into(), "".into()]),
            CarrierRecord::new(200, vec!["FedEx".into(), "联邦快递".into(), "".into()]),
            CarrierRecord::new(300, vec!["Royal Mail".into(), "".into(), "".into()]),
        ]
    }

    #[test]
    fn test_typo_matches() {
        let index = ApproximateIndex::build(&records(), 0.35);
        let results = index.search("fedx");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].position, 1);
        assert!(results[0].score < 0.1);
    }

    #[test]
    fn test_transposition_matches() {
        let index = ApproximateIndex::build(&records(), 0.35);
        assert_eq!(index.search("fdeex")[0].position, 1);
    }

    #[test]
    fn test_partial_token_matches() {
        let index = ApproximateIndex::build(&records(), 0.35);
        assert_eq!(index.search("royl")[0].position, 2);
    }

    #[test]
    fn test_unrelated_query_returns_nothing() {
        let index = ApproximateIndex::build(&records(), 0.35);
        assert!(index.search("zzz").is_empty());
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let index = ApproximateIndex::build(&records(), 0.35);
        assert!(index.search("").is_empty());
    }

    #[test]
    fn test_results_ordered_best_first() {
        let records = vec![
            CarrierRecord::new(1, vec!["Posten".into()]),
            CarrierRecord::new(2, vec!["Postnl".into()]),
            CarrierRecord::new(3, vec!["PostNord".into()]),
        ];
        let index = ApproximateIndex::build(&records, 0.5);
        let results = index.search("postnrd");

        assert!(!results.is_empty());
        assert_eq!(results[0].position, 2);
        for pair in results.windows(2) {
            assert!(pair[0].score <= pair[1].score);
        }
    }

    #[test]
    fn test_empty_corpus() {
        let index = ApproximateIndex::build(&[], 0.35);
        assert!(index.search("dhl").is_empty());
    }
}
