//! Product Catalog console
//!
//! A headless front end for the product catalog API: a paginated product
//! list and a create/edit form kept in sync through a notification channel.

mod config;
mod console;
mod shutdown;

use catalog_core::events::NotificationChannel;
use catalog_core::views::{ProductForm, ProductListView};
use catalog_sdk::client::ProductsClient;
use clap::Parser;
use config::ConfigLoader;
use console::Console;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

/// Product Catalog - console front end for the products API
#[derive(Parser, Debug)]
#[command(name = "catalog-app")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "./catalog-config.toml")]
    config: PathBuf,

    /// Override the products resource URL
    /// (e.g., http://localhost:8081/api/products)
    #[arg(short, long, env = "CATALOG_API_URL")]
    base_url: Option<Url>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    init_tracing();

    // Parse command line arguments
    let args = Args::parse();

    tracing::info!("Starting catalog-app v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config_loader = ConfigLoader::new(&args.config, args.base_url);
    let config = config_loader.load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;
    tracing::info!(base_url = %config.api.base_url, "Configuration loaded from {:?}", args.config);

    // Build the gateway
    let mut http = reqwest::Client::builder();
    if let Some(timeout) = config.api.timeout {
        http = http.timeout(timeout);
    }
    let client = ProductsClient::new(config.api.base_url)?.with_http_client(http.build()?);

    // One channel for the whole process, shared by both views
    let channel = NotificationChannel::new();
    let list = ProductListView::new(client.clone(), channel.clone());
    let form = ProductForm::new(client.clone(), channel);

    Console::new(client, list, form, config.list.sort_by)
        .run()
        .await?;

    tracing::info!("Console closed");
    Ok(())
}

/// Initialize the tracing subscriber with environment-based filtering.
///
/// Logs go to stderr so they never interleave with the console on stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,catalog_core=debug,reqwest=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
