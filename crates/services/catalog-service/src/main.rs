//! Catalog Service - prints aggregate figures for the stored catalog.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_service_lib::config::{CatalogServiceConfig, StorageBackend};
use common::AppError;

#[derive(Parser)]
#[command(name = "catalog-service")]
#[command(about = "Product and customer catalog")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print active counts, total cost and average price as JSON
    Summary {
        /// Storage backend (overrides CATALOG_STORAGE)
        #[arg(long, value_enum)]
        storage: Option<StorageBackend>,
        /// Data directory for file storage (overrides CATALOG_DATA_DIR)
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = CatalogServiceConfig::from_env().map_err(report)?;

    match cli.command {
        Commands::Summary { storage, data_dir } => {
            if let Some(storage) = storage {
                config.storage = storage;
            }
            if let Some(data_dir) = data_dir {
                config.data_dir = data_dir;
            }

            let summary = catalog_service_lib::run_summary(&config)
                .await
                .map_err(report)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}

/// Log a failure before handing it back to `main`.
fn report(err: AppError) -> AppError {
    if err.is_client_error() {
        tracing::warn!(code = err.code(), "{}", err.user_message());
    } else {
        tracing::error!(code = err.code(), "{}", err.user_message());
    }
    err
}
