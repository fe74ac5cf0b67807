//! The config and carrier table shipped with the repository load cleanly

use std::path::Path;
use std::sync::Arc;

use carrier_resolver::{CarrierCatalog, CarrierResolver};
use parcel_tracker::config::{AppConfig, MissingCarrierPolicy};

fn repo_path(relative: impl AsRef<Path>) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(relative)
}

#[test]
fn test_shipped_config_and_table() {
    let config = AppConfig::from_file(repo_path("config/parcel_tracker.yaml")).unwrap();
    assert_eq!(config.tracking.missing_carrier, MissingCarrierPolicy::Reject);

    let catalog =
        CarrierCatalog::from_path(repo_path(&config.carriers_path), config.resolver).unwrap();
    assert!(catalog.canonical().collisions().is_empty());

    let resolver = CarrierResolver::new(Arc::new(catalog));
    assert_eq!(resolver.resolve_exact("dhl express"), Some(100001));
    assert_eq!(resolver.resolve_exact("順豐速運"), Some(100012));
    assert!(resolver.validate_id(21051));

    // shared tokens across several carriers never auto-resolve
    for ambiguous in ["post", "express", "china", "postt"] {
        assert_eq!(resolver.resolve_exact(ambiguous), None, "{}", ambiguous);
    }
}
