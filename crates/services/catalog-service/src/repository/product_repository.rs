//! Product repository contract.

use async_trait::async_trait;

use common::AppResult;
use domain::{NewProduct, Product, ProductId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product repository trait for dependency injection.
///
/// Query methods return active and soft-deleted products alike; filtering
/// is the service layer's job.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products in storage order
    async fn find_all(&self) -> AppResult<Vec<Product>>;

    /// Product by ID, `None` if it was never saved
    async fn find_by_id(&self, id: ProductId) -> AppResult<Option<Product>>;

    /// Persist a new product and assign its ID
    async fn save(&self, product: NewProduct) -> AppResult<Product>;

    /// Overwrite the stored product with the same ID
    async fn update(&self, product: &Product) -> AppResult<()>;

    /// Overwrite several products in one write; nothing is stored unless
    /// every ID exists
    async fn update_many(&self, products: &[Product]) -> AppResult<()>;
}
