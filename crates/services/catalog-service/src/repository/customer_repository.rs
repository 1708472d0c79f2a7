//! Customer repository contract.

use async_trait::async_trait;

use common::AppResult;
use domain::{Customer, CustomerId, NewCustomer};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Customer repository trait for dependency injection.
///
/// Query methods return active and soft-deleted customers alike.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// All customers in storage order
    async fn find_all(&self) -> AppResult<Vec<Customer>>;

    /// Customer by ID, `None` if it was never saved
    async fn find_by_id(&self, id: CustomerId) -> AppResult<Option<Customer>>;

    /// Persist a new customer and assign its ID
    async fn save(&self, customer: NewCustomer) -> AppResult<Customer>;

    /// Overwrite the stored customer (cart included) with the same ID
    async fn update(&self, customer: &Customer) -> AppResult<()>;

    /// Overwrite several customers in one write; nothing is stored unless
    /// every ID exists
    async fn update_many(&self, customers: &[Customer]) -> AppResult<()>;
}
