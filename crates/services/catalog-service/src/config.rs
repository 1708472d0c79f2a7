//! Catalog service configuration.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use clap::ValueEnum;
use common::{AppError, AppResult, ServiceConfig};

const DEFAULT_DATA_DIR: &str = "./data";

/// Where repositories keep their records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StorageBackend {
    /// Process-local, lost on exit
    #[default]
    Memory,
    /// One JSON file per entity type under `data_dir`
    File,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "file" => Ok(StorageBackend::File),
            other => Err(format!("unknown storage backend '{}'", other)),
        }
    }
}

/// Catalog service configuration.
#[derive(Debug, Clone)]
pub struct CatalogServiceConfig {
    /// Name and log level
    pub service: ServiceConfig,
    /// Repository backend
    pub storage: StorageBackend,
    /// Directory holding `products.json` and `customers.json`
    pub data_dir: PathBuf,
}

impl CatalogServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Fails on an unknown `CATALOG_STORAGE` value rather than guessing.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let storage = match lookup("CATALOG_STORAGE") {
            Some(raw) => raw.parse().map_err(AppError::config)?,
            None => StorageBackend::Memory,
        };

        Ok(Self {
            service: ServiceConfig {
                service_name: "catalog-service".to_string(),
                log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            },
            storage,
            data_dir: lookup("CATALOG_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
        })
    }
}

impl Default for CatalogServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "catalog-service".to_string(),
                log_level: "info".to_string(),
            },
            storage: StorageBackend::Memory,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}
