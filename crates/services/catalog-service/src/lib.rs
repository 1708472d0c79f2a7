//! Catalog Service Library
//!
//! Products, customers and the carts that link them. Validation and the
//! soft-delete lifecycle live in [`service`]; storage sits behind the
//! traits in [`repository`].

pub mod config;
pub mod repository;
pub mod service;

use tracing::info;

use common::AppResult;

use crate::config::CatalogServiceConfig;
use crate::service::{Catalog, CatalogSummary};

/// Open the configured storage and compute the catalog summary.
pub async fn run_summary(config: &CatalogServiceConfig) -> AppResult<CatalogSummary> {
    info!(
        service = %config.service.service_name,
        storage = ?config.storage,
        data_dir = %config.data_dir.display(),
        "Opening catalog"
    );

    let summary = Catalog::from_config(config).summary().await?;
    info!(
        active_products = summary.active_products,
        active_customers = summary.active_customers,
        "Catalog summary computed"
    );
    Ok(summary)
}
