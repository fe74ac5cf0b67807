//! Resolver configuration
//!
//! Scores follow the "lower is better" convention: `score = 1 - similarity`,
//! so 0.0 is a perfect match and 1.0 shares nothing with the query.
//!
//! `browse_threshold` admits
//! candidates into a list a human will pick from; `accept_threshold` decides
//! whether a single best guess is returned with no confirmation at all.

use serde::Deserialize;

use crate::error::CatalogError;

/// Default upper bound on the score of a listed candidate
pub const DEFAULT_BROWSE_THRESHOLD: f64 = 0.35;

/// Default upper bound on the score of an auto-accepted candidate
pub const DEFAULT_ACCEPT_THRESHOLD: f64 = 0.15;

/// Default number of candidates returned by `find_candidates`
pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Highest score admitted into a browsable candidate list
    pub browse_threshold: f64,
    /// Highest score `resolve_exact` accepts from the fuzzy fallback
    pub accept_threshold: f64,
    /// Candidate count used when the caller gives no limit
    pub default_limit: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            browse_threshold: DEFAULT_BROWSE_THRESHOLD,
            accept_threshold: DEFAULT_ACCEPT_THRESHOLD,
            default_limit: DEFAULT_LIMIT,
        }
    }
}

impl ResolverConfig {
    /// Check that the auto-accept bound is at least as strict as the browse bound
    pub fn validate(&self) -> Result<(), CatalogError> {
        let in_range = |t: f64| (0.0..=1.0).contains(&t);
        if !in_range(self.browse_threshold)
            || !in_range(self.accept_threshold)
            || self.accept_threshold > self.browse_threshold
        {
            return Err(CatalogError::InvalidThresholds {
                accept: self.accept_threshold,
                browse: self.browse_threshold,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ResolverConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.accept_threshold < config.browse_threshold);
        assert_eq!(config.default_limit, 10);
    }

    #[test]
    fn test_parse_partial_yaml() {
        let yaml = r#"
browse_threshold: 0.4
"#;
        let config: ResolverConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.browse_threshold, 0.4);
        assert_eq!(config.accept_threshold, DEFAULT_ACCEPT_THRESHOLD);
        assert_eq!(config.default_limit, DEFAULT_LIMIT);
    }

    #[test]
    fn test_accept_looser_than_browse_rejected() {
        let config = ResolverConfig {
            browse_threshold: 0.2,
            accept_threshold: 0.3,
            default_limit: 10,
        };
        assert!(matches!(
            config.validate(),
            Err(CatalogError::InvalidThresholds { .. })
        ));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let config = ResolverConfig {
            browse_threshold: 1.5,
            accept_threshold: 0.1,
            default_limit: 10,
        };
        assert!(config.validate().is_err());
    }
}
