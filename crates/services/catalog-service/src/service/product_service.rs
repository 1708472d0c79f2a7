//! Product service - validation, soft-delete lifecycle and price aggregates.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::{NewProduct, Product, ProductId, PRODUCT_ENTITY};

use crate::repository::ProductRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product service trait for dependency injection.
///
/// "Active" queries and aggregates skip soft-deleted products. Every
/// mutating operation persists its change before returning.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Validate and store a new product (always active)
    async fn save(&self, product: NewProduct) -> AppResult<Product>;

    /// Active products in repository order
    async fn get_all_active_products(&self) -> AppResult<Vec<Product>>;

    /// Active product by ID; missing and soft-deleted are both not found
    async fn get_active_product_by_id(&self, id: ProductId) -> AppResult<Product>;

    /// Validate and persist title/price changes. The stored active flag is
    /// kept; only delete/restore change it.
    async fn update(&self, product: &Product) -> AppResult<()>;

    /// Soft delete an active product
    async fn delete_by_id(&self, id: ProductId) -> AppResult<()>;

    /// Soft delete every active product with exactly this title.
    /// Returns how many were deleted.
    async fn delete_by_title(&self, title: &str) -> AppResult<usize>;

    /// Reactivate a product regardless of its current state
    async fn restore_by_id(&self, id: ProductId) -> AppResult<()>;

    async fn get_active_products_count(&self) -> AppResult<usize>;

    /// Sum of active prices, 0.0 when there are none
    async fn get_active_product_total_cost(&self) -> AppResult<f64>;

    /// Mean active price, 0.0 when there are none
    async fn get_active_product_average_price(&self) -> AppResult<f64>;
}

/// Concrete implementation of ProductService using repository.
pub struct ProductManager {
    repo: Arc<dyn ProductRepository>,
}

impl ProductManager {
    /// Create new product service instance with repository
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }
}

/// Sum of prices. Folds from +0.0 so an empty slice yields exactly 0.0.
pub(crate) fn total_price(products: &[Product]) -> f64 {
    products.iter().fold(0.0, |acc, p| acc + p.price)
}

/// Mean of prices, 0.0 for an empty slice.
pub(crate) fn average_price(products: &[Product]) -> f64 {
    if products.is_empty() {
        return 0.0;
    }
    total_price(products) / products.len() as f64
}

#[async_trait]
impl ProductService for ProductManager {
    async fn save(&self, product: NewProduct) -> AppResult<Product> {
        product.validate()?;

        let saved = self.repo.save(product).await?;
        tracing::info!(id = saved.id, title = %saved.title, "Product saved");
        Ok(saved)
    }

    async fn get_all_active_products(&self) -> AppResult<Vec<Product>> {
        let products = self.repo.find_all().await?;
        Ok(products.into_iter().filter(Product::is_active).collect())
    }

    async fn get_active_product_by_id(&self, id: ProductId) -> AppResult<Product> {
        let found = self.repo.find_by_id(id).await?.filter(Product::is_active);
        if found.is_none() {
            tracing::warn!(id, "Active product not found");
        }
        found.ok_or_not_found(PRODUCT_ENTITY, id)
    }

    async fn update(&self, product: &Product) -> AppResult<()> {
        product.validate()?;

        let mut stored = self
            .repo
            .find_by_id(product.id)
            .await?
            .ok_or_not_found(PRODUCT_ENTITY, product.id)?;
        stored.apply_details(product);

        self.repo.update(&stored).await?;
        tracing::info!(id = product.id, "Product updated");
        Ok(())
    }

    async fn delete_by_id(&self, id: ProductId) -> AppResult<()> {
        let mut product = self.get_active_product_by_id(id).await?;
        product.soft_delete();

        self.repo.update(&product).await?;
        tracing::info!(id, "Product soft deleted");
        Ok(())
    }

    async fn delete_by_title(&self, title: &str) -> AppResult<usize> {
        let matching: Vec<Product> = self
            .get_all_active_products()
            .await?
            .into_iter()
            .filter(|product| product.title == title)
            .map(|mut product| {
                product.soft_delete();
                product
            })
            .collect();

        if !matching.is_empty() {
            self.repo.update_many(&matching).await?;
        }
        tracing::info!(title, deleted = matching.len(), "Products soft deleted by title");
        Ok(matching.len())
    }

    async fn restore_by_id(&self, id: ProductId) -> AppResult<()> {
        let mut product = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_not_found(PRODUCT_ENTITY, id)?;

        if product.is_active() {
            tracing::debug!(id, "Product already active");
            return Ok(());
        }

        product.restore();
        self.repo.update(&product).await?;
        tracing::info!(id, "Product restored");
        Ok(())
    }

    async fn get_active_products_count(&self) -> AppResult<usize> {
        Ok(self.get_all_active_products().await?.len())
    }

    async fn get_active_product_total_cost(&self) -> AppResult<f64> {
        let products = self.get_all_active_products().await?;
        Ok(total_price(&products))
    }

    async fn get_active_product_average_price(&self) -> AppResult<f64> {
        let products = self.get_all_active_products().await?;
        let average = average_price(&products);
        tracing::debug!(count = products.len(), average, "Active product average price");
        Ok(average)
    }
}
