//! Parcel Tracker MCP Server Binary
//!
//! ## Usage
//!
//! ```bash
//! TRACK17_API_KEY=... ./target/debug/parcel_mcp --config config/parcel_tracker.yaml
//! ```
//!
//! ## Environment Variables
//!
//! - `TRACK17_API_KEY` (or `17TRACK_KEY`): 17TRACK API token
//! - `TRACK17_BASE_URL` (optional): provider base URL
//! - `PARCEL_TRACKER_CONFIG` (optional): YAML config path
//! - `PARCEL_TRACKER_CARRIERS` (optional): carrier table path
//! - `RUST_LOG` (optional): log filter, logs go to stderr

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use carrier_resolver::{CarrierCatalog, CarrierResolver};
use parcel_tracker::config::{AppConfig, ENV_CONFIG_PATH};
use parcel_tracker::mcp::{McpServer, ToolHandlers};
use parcel_tracker::tracking::{Track17Client, TrackingService};

#[derive(Parser)]
#[command(name = "parcel_mcp")]
#[command(version)]
#[command(about = "MCP server for carrier lookup and 17TRACK parcel tracking")]
struct Cli {
    /// YAML configuration file
    #[arg(long, env = ENV_CONFIG_PATH)]
    config: Option<PathBuf>,

    /// Carrier reference table (CSV), overrides the config file
    #[arg(long)]
    carriers: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "parcel_tracker=info,carrier_resolver=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(carriers) = cli.carriers {
        config.carriers_path = carriers;
    }

    if config.tracking.api_token.is_empty() {
        tracing::warn!("No 17TRACK token configured; upstream calls will be rejected");
    }

    tracing::info!(path = %config.carriers_path.display(), "Loading carrier table");
    let catalog = CarrierCatalog::from_path(&config.carriers_path, config.resolver.clone())
        .with_context(|| format!("Failed to load {}", config.carriers_path.display()))?;
    let resolver = CarrierResolver::new(Arc::new(catalog));

    let gateway = Arc::new(Track17Client::new(&config.tracking)?);
    let tracking = TrackingService::new(
        resolver.clone(),
        gateway,
        config.tracking.missing_carrier,
        config.tracking.timeout(),
    );

    let server = McpServer::new(ToolHandlers::new(resolver, tracking));
    server.run_stdio().await
}
