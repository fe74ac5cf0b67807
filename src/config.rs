//! Application configuration
//!
//! Loaded from an optional YAML file, then overridden from the environment.
//!
//! ```yaml
//! carriers_path: data/carriers.csv
//! resolver:
//!   browse_threshold: 0.35
//!   accept_threshold: 0.15
//!   default_limit: 10
//! tracking:
//!   base_url: https://api.17track.net/track/v2.2
//!   timeout_secs: 20
//!   missing_carrier: reject
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use carrier_resolver::{CatalogError, ResolverConfig};
use serde::Deserialize;
use thiserror::Error;

/// Default reference table location
pub const DEFAULT_CARRIERS_PATH: &str = "data/carriers.csv";

/// 17TRACK API v2.2
pub const DEFAULT_BASE_URL: &str = "https://api.17track.net/track/v2.2";

const DEFAULT_TIMEOUT_SECS: u64 = 20;

// Environment overrides
pub const ENV_CONFIG_PATH: &str = "PARCEL_TRACKER_CONFIG";
pub const ENV_CARRIERS_PATH: &str = "PARCEL_TRACKER_CARRIERS";
pub const ENV_API_KEY: &str = "TRACK17_API_KEY";
pub const ENV_API_KEY_LEGACY: &str = "17TRACK_KEY";
pub const ENV_BASE_URL: &str = "TRACK17_BASE_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// What `tracking-delivery` does when the caller names no carrier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingCarrierPolicy {
    /// Refuse and ask the caller to search for a carrier first
    #[default]
    Reject,
    /// Send the request without a carrier and let the provider guess
    AutoDetect,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    pub base_url: String,
    /// Passed through to the provider unexamined
    pub api_token: String,
    /// Deadline for the register + fetch-status sequence
    pub timeout_secs: u64,
    pub user_agent: String,
    pub missing_carrier: MissingCarrierPolicy,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("parcel-tracker/{}", env!("CARGO_PKG_VERSION")),
            missing_carrier: MissingCarrierPolicy::Reject,
        }
    }
}

impl TrackingConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub carriers_path: PathBuf,
    pub resolver: ResolverConfig,
    pub tracking: TrackingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            carriers_path: PathBuf::from(DEFAULT_CARRIERS_PATH),
            resolver: ResolverConfig::default(),
            tracking: TrackingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_yaml::from_str(content)?;
        config.resolver.validate()?;
        Ok(config)
    }

    /// File config when a path is given, defaults otherwise, then process env
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply environment overrides read through `lookup`
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let set = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = set(ENV_CARRIERS_PATH) {
            self.carriers_path = PathBuf::from(path);
        }
        if let Some(token) = set(ENV_API_KEY).or_else(|| set(ENV_API_KEY_LEGACY)) {
            self.tracking.api_token = token;
        }
        if let Some(url) = set(ENV_BASE_URL) {
            self.tracking.base_url = url;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_parse_config() {
        let yaml = r#"
carriers_path: /srv/carriers.csv
resolver:
  browse_threshold: 0.4
  accept_threshold: 0.1
tracking:
  timeout_secs: 5
  missing_carrier: auto_detect
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.carriers_path, PathBuf::from("/srv/carriers.csv"));
        assert_eq!(config.resolver.browse_threshold, 0.4);
        assert_eq!(config.resolver.default_limit, 10);
        assert_eq!(config.tracking.timeout(), Duration::from_secs(5));
        assert_eq!(config.tracking.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.tracking.missing_carrier, MissingCarrierPolicy::AutoDetect);
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = AppConfig::from_yaml("{}").unwrap();
        assert_eq!(config.carriers_path, PathBuf::from(DEFAULT_CARRIERS_PATH));
        assert_eq!(config.tracking.missing_carrier, MissingCarrierPolicy::Reject);
        assert!(config.tracking.api_token.is_empty());
    }

    #[test]
    fn test_rejects_inverted_thresholds() {
        let yaml = "resolver:\n  browse_threshold: 0.1\n  accept_threshold: 0.3\n";
        assert!(matches!(
            AppConfig::from_yaml(yaml),
            Err(ConfigError::Catalog(CatalogError::InvalidThresholds { .. }))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_CARRIERS_PATH, "/tmp/c.csv"),
            (ENV_API_KEY_LEGACY, "legacy-token"),
            (ENV_BASE_URL, "http://localhost:9999"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.apply_env(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.carriers_path, PathBuf::from("/tmp/c.csv"));
        assert_eq!(config.tracking.api_token, "legacy-token");
        assert_eq!(config.tracking.base_url, "http://localhost:9999");
    }

    #[test]
    fn test_primary_key_wins_over_legacy() {
        let env: HashMap<&str, &str> = [(ENV_API_KEY, "primary"), (ENV_API_KEY_LEGACY, "legacy")]
            .into_iter()
            .collect();

        let mut config = AppConfig::default();
        config.apply_env(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.tracking.api_token, "primary");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::from_file(dir.path().join("absent.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("parcel_tracker.yaml");
        std::fs::write(&path, "tracking:\n  api_token: abc\n").unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.tracking.api_token, "abc");
    }
}
