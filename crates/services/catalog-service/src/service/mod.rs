//! Application services layer - validation and use cases.
//!
//! Services depend on repository traits, not on a storage backend.

pub mod container;
mod customer_service;
mod product_service;

pub use container::{Catalog, CatalogSummary};
pub use customer_service::{CustomerManager, CustomerService};
pub use product_service::{ProductManager, ProductService};

#[cfg(any(test, feature = "test-utils"))]
pub use customer_service::MockCustomerService;
#[cfg(any(test, feature = "test-utils"))]
pub use product_service::MockProductService;
