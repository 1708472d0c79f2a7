//! Customer service - customer lifecycle plus the cart that links
//! customers to products.
//!
//! Product lookups always go through [`ProductService`], so cart rules see
//! the same notion of "active product" as the rest of the catalog.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::{Customer, CustomerId, NewCustomer, Product, ProductId, CUSTOMER_ENTITY};

use super::product_service::{average_price, total_price};
use super::ProductService;
use crate::repository::CustomerRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Customer service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CustomerService: Send + Sync {
    /// Validate and store a new customer (always active)
    async fn save(&self, customer: NewCustomer) -> AppResult<Customer>;

    /// Active customers in repository order
    async fn get_all_active_customers(&self) -> AppResult<Vec<Customer>>;

    /// Active customer by ID; missing and soft-deleted are both not found
    async fn get_active_customer_by_id(&self, id: CustomerId) -> AppResult<Customer>;

    /// Validate and persist a name change. The stored active flag and cart
    /// are kept.
    async fn update(&self, customer: &Customer) -> AppResult<()>;

    /// Soft delete an active customer, keeping its cart
    async fn delete_by_id(&self, id: CustomerId) -> AppResult<()>;

    /// Soft delete every active customer with exactly this name.
    /// Returns how many were deleted.
    async fn delete_by_name(&self, name: &str) -> AppResult<usize>;

    /// Reactivate a customer regardless of its current state
    async fn restore_by_id(&self, id: CustomerId) -> AppResult<()>;

    async fn get_active_customer_count(&self) -> AppResult<usize>;

    /// Active products in the cart of an active customer, in cart order
    async fn get_customer_cart(&self, id: CustomerId) -> AppResult<Vec<Product>>;

    /// Sum of active product prices in the cart
    async fn get_customer_cart_price(&self, id: CustomerId) -> AppResult<f64>;

    /// Mean active product price in the cart, 0.0 when none
    async fn get_customer_cart_average_price(&self, id: CustomerId) -> AppResult<f64>;

    /// Append an active product to an active customer's cart
    async fn add_product_to_customer_cart(
        &self,
        customer_id: CustomerId,
        product_id: ProductId,
    ) -> AppResult<()>;

    /// Remove one occurrence of an active product from the cart
    async fn remove_product_from_customer_cart(
        &self,
        customer_id: CustomerId,
        product_id: ProductId,
    ) -> AppResult<()>;

    /// Empty the cart of an active customer
    async fn clear_customer_cart(&self, id: CustomerId) -> AppResult<()>;
}

/// Concrete implementation of CustomerService.
pub struct CustomerManager {
    repo: Arc<dyn CustomerRepository>,
    products: Arc<dyn ProductService>,
}

impl CustomerManager {
    /// Create new customer service from its repository and the product service
    pub fn new(repo: Arc<dyn CustomerRepository>, products: Arc<dyn ProductService>) -> Self {
        Self { repo, products }
    }
}

#[async_trait]
impl CustomerService for CustomerManager {
    async fn save(&self, customer: NewCustomer) -> AppResult<Customer> {
        customer.validate()?;

        let saved = self.repo.save(customer).await?;
        tracing::info!(id = saved.id, name = %saved.name, "Customer saved");
        Ok(saved)
    }

    async fn get_all_active_customers(&self) -> AppResult<Vec<Customer>> {
        let customers = self.repo.find_all().await?;
        Ok(customers.into_iter().filter(Customer::is_active).collect())
    }

    async fn get_active_customer_by_id(&self, id: CustomerId) -> AppResult<Customer> {
        let found = self.repo.find_by_id(id).await?.filter(Customer::is_active);
        if found.is_none() {
            tracing::warn!(id, "Active customer not found");
        }
        found.ok_or_not_found(CUSTOMER_ENTITY, id)
    }

    async fn update(&self, customer: &Customer) -> AppResult<()> {
        customer.validate()?;

        let mut stored = self
            .repo
            .find_by_id(customer.id)
            .await?
            .ok_or_not_found(CUSTOMER_ENTITY, customer.id)?;
        stored.apply_details(customer);

        self.repo.update(&stored).await?;
        tracing::info!(id = customer.id, "Customer updated");
        Ok(())
    }

    async fn delete_by_id(&self, id: CustomerId) -> AppResult<()> {
        let mut customer = self.get_active_customer_by_id(id).await?;
        customer.soft_delete();

        self.repo.update(&customer).await?;
        tracing::info!(id, "Customer soft deleted");
        Ok(())
    }

    async fn delete_by_name(&self, name: &str) -> AppResult<usize> {
        let matching: Vec<Customer> = self
            .get_all_active_customers()
            .await?
            .into_iter()
            .filter(|customer| customer.name == name)
            .map(|mut customer| {
                customer.soft_delete();
                customer
            })
            .collect();

        if !matching.is_empty() {
            self.repo.update_many(&matching).await?;
        }
        tracing::info!(name, deleted = matching.len(), "Customers soft deleted by name");
        Ok(matching.len())
    }

    async fn restore_by_id(&self, id: CustomerId) -> AppResult<()> {
        let mut customer = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_not_found(CUSTOMER_ENTITY, id)?;

        if customer.is_active() {
            tracing::debug!(id, "Customer already active");
            return Ok(());
        }

        customer.restore();
        self.repo.update(&customer).await?;
        tracing::info!(id, "Customer restored");
        Ok(())
    }

    async fn get_active_customer_count(&self) -> AppResult<usize> {
        Ok(self.get_all_active_customers().await?.len())
    }

    async fn get_customer_cart(&self, id: CustomerId) -> AppResult<Vec<Product>> {
        let customer = self.get_active_customer_by_id(id).await?;
        if customer.products.is_empty() {
            return Ok(Vec::new());
        }

        let active: HashMap<ProductId, Product> = self
            .products
            .get_all_active_products()
            .await?
            .into_iter()
            .map(|product| (product.id, product))
            .collect();

        Ok(customer
            .products
            .iter()
            .filter_map(|product_id| active.get(product_id).cloned())
            .collect())
    }

    async fn get_customer_cart_price(&self, id: CustomerId) -> AppResult<f64> {
        let cart = self.get_customer_cart(id).await?;
        Ok(total_price(&cart))
    }

    async fn get_customer_cart_average_price(&self, id: CustomerId) -> AppResult<f64> {
        let cart = self.get_customer_cart(id).await?;
        Ok(average_price(&cart))
    }

    async fn add_product_to_customer_cart(
        &self,
        customer_id: CustomerId,
        product_id: ProductId,
    ) -> AppResult<()> {
        let mut customer = self.get_active_customer_by_id(customer_id).await?;
        let product = self.products.get_active_product_by_id(product_id).await?;

        customer.add_to_cart(product.id);
        self.repo.update(&customer).await?;
        tracing::info!(customer_id, product_id, "Product added to cart");
        Ok(())
    }

    async fn remove_product_from_customer_cart(
        &self,
        customer_id: CustomerId,
        product_id: ProductId,
    ) -> AppResult<()> {
        let mut customer = self.get_active_customer_by_id(customer_id).await?;
        let product = self.products.get_active_product_by_id(product_id).await?;

        if !customer.remove_from_cart(product.id) {
            tracing::debug!(customer_id, product_id, "Product not in cart");
            return Ok(());
        }

        self.repo.update(&customer).await?;
        tracing::info!(customer_id, product_id, "Product removed from cart");
        Ok(())
    }

    async fn clear_customer_cart(&self, id: CustomerId) -> AppResult<()> {
        let mut customer = self.get_active_customer_by_id(id).await?;
        customer.clear_cart();

        self.repo.update(&customer).await?;
        tracing::info!(id, "Cart cleared");
        Ok(())
    }
}
