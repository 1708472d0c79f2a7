//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! products, customers with their carts, and the validation rules both obey.

pub mod constants;
pub mod customer;
pub mod error;
pub mod product;
pub mod validation;

pub use constants::*;
pub use customer::{Customer, CustomerId, NewCustomer};
pub use error::{DomainError, DomainResult};
pub use product::{NewProduct, Product, ProductId};
