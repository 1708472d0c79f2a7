//! Repository layer for data access.

mod customer_repository;
mod file;
mod memory;
mod product_repository;
mod record;

pub use customer_repository::CustomerRepository;
pub use file::JsonFileStore;
pub use memory::InMemoryStore;
pub use product_repository::ProductRepository;
pub use record::Record;

#[cfg(any(test, feature = "test-utils"))]
pub use customer_repository::MockCustomerRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use product_repository::MockProductRepository;
