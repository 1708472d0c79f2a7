//! Service container - wires repositories into the two catalog services.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use common::AppResult;
use domain::{Customer, Product};

use super::{CustomerManager, CustomerService, ProductManager, ProductService};
use crate::config::{CatalogServiceConfig, StorageBackend};
use crate::repository::{CustomerRepository, InMemoryStore, JsonFileStore, ProductRepository};

/// File holding products under the data directory
pub const PRODUCTS_FILE: &str = "products.json";

/// File holding customers under the data directory
pub const CUSTOMERS_FILE: &str = "customers.json";

/// Both catalog services sharing one product service.
#[derive(Clone)]
pub struct Catalog {
    product_service: Arc<dyn ProductService>,
    customer_service: Arc<dyn CustomerService>,
}

/// Aggregate figures over the active subset of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogSummary {
    pub active_products: usize,
    pub total_cost: f64,
    pub average_price: f64,
    pub active_customers: usize,
}

impl Catalog {
    /// Build the services on top of the given repositories
    pub fn new(
        product_repo: Arc<dyn ProductRepository>,
        customer_repo: Arc<dyn CustomerRepository>,
    ) -> Self {
        let product_service: Arc<dyn ProductService> = Arc::new(ProductManager::new(product_repo));
        let customer_service = Arc::new(CustomerManager::new(
            customer_repo,
            product_service.clone(),
        ));

        Self {
            product_service,
            customer_service,
        }
    }

    /// Catalog over empty in-memory stores
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryStore::<Product>::new()),
            Arc::new(InMemoryStore::<Customer>::new()),
        )
    }

    /// Catalog over JSON files in `dir`
    pub fn json_files(dir: &Path) -> Self {
        Self::new(
            Arc::new(JsonFileStore::<Product>::new(dir.join(PRODUCTS_FILE))),
            Arc::new(JsonFileStore::<Customer>::new(dir.join(CUSTOMERS_FILE))),
        )
    }

    /// Catalog over the configured backend
    pub fn from_config(config: &CatalogServiceConfig) -> Self {
        match config.storage {
            StorageBackend::Memory => Self::in_memory(),
            StorageBackend::File => Self::json_files(&config.data_dir),
        }
    }

    /// Get product service
    pub fn products(&self) -> Arc<dyn ProductService> {
        self.product_service.clone()
    }

    /// Get customer service
    pub fn customers(&self) -> Arc<dyn CustomerService> {
        self.customer_service.clone()
    }

    /// Collect the active-set aggregates of both services
    pub async fn summary(&self) -> AppResult<CatalogSummary> {
        let active_products = self.product_service.get_active_products_count().await?;
        let total_cost = self.product_service.get_active_product_total_cost().await?;
        let average_price = self.product_service.get_active_product_average_price().await?;
        let active_customers = self.customer_service.get_active_customer_count().await?;

        Ok(CatalogSummary {
            active_products,
            total_cost,
            average_price,
            active_customers,
        })
    }
}
