//! Customer domain entity and its cart.

use serde::{Deserialize, Serialize};

use crate::constants::CUSTOMER_NAME_EMPTY;
use crate::error::DomainResult;
use crate::product::ProductId;
use crate::validation::ensure_not_blank;

/// Repository-assigned customer identifier
pub type CustomerId = u64;

/// Customer domain entity
///
/// The cart is an ordered list of product identifiers. Duplicates are
/// allowed; product state itself lives in the product repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    /// Soft delete marker (false = deleted)
    pub active: bool,
    #[serde(default)]
    pub products: Vec<ProductId>,
}

impl Customer {
    /// Build a stored customer from a save payload and its assigned id.
    pub fn from_new(id: CustomerId, new: NewCustomer) -> Self {
        Self {
            id,
            name: new.name,
            active: true,
            products: new.products,
        }
    }

    /// Check the name.
    pub fn validate(&self) -> DomainResult<()> {
        ensure_not_blank(&self.name, CUSTOMER_NAME_EMPTY)
    }

    /// Check if customer is active (not deleted)
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Copy the editable fields (the name) from `changes`.
    /// The active flag and the cart are left as they are.
    pub fn apply_details(&mut self, changes: &Customer) {
        self.name.clone_from(&changes.name);
    }

    /// Soft delete the customer; the cart is left untouched
    pub fn soft_delete(&mut self) {
        self.active = false;
    }

    /// Restore a soft-deleted customer
    pub fn restore(&mut self) {
        self.active = true;
    }

    /// Append a product to the end of the cart.
    pub fn add_to_cart(&mut self, product_id: ProductId) {
        self.products.push(product_id);
    }

    /// Remove the first occurrence of `product_id`. Returns whether one was removed.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> bool {
        match self.products.iter().position(|id| *id == product_id) {
            Some(index) => {
                self.products.remove(index);
                true
            }
            None => false,
        }
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.products.clear();
    }
}

/// Customer creation payload (no identifier yet)
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct NewCustomer {
    /// Display name, must not be blank
    pub name: String,
    /// Initial cart contents
    #[serde(default)]
    pub products: Vec<ProductId>,
}

impl NewCustomer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            products: Vec::new(),
        }
    }

    /// Set the initial cart.
    pub fn with_products(mut self, products: Vec<ProductId>) -> Self {
        self.products = products;
        self
    }

    /// Check the name.
    pub fn validate(&self) -> DomainResult<()> {
        ensure_not_blank(&self.name, CUSTOMER_NAME_EMPTY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DomainError;

    fn ann() -> Customer {
        Customer::from_new(1, NewCustomer::new("Ann"))
    }

    #[test]
    fn blank_name_is_rejected_on_both_paths() {
        let expected = Err(DomainError::Validation(CUSTOMER_NAME_EMPTY.to_string()));
        assert_eq!(NewCustomer::new(" \t").validate(), expected);

        let mut customer = ann();
        customer.name = String::new();
        assert_eq!(customer.validate(), expected);
    }

    #[test]
    fn remove_takes_only_the_first_occurrence() {
        let mut customer = ann();
        customer.add_to_cart(4);
        customer.add_to_cart(5);
        customer.add_to_cart(4);

        assert!(customer.remove_from_cart(4));
        assert_eq!(customer.products, vec![5, 4]);
        assert!(!customer.remove_from_cart(9));
        assert_eq!(customer.products, vec![5, 4]);
    }

    #[test]
    fn soft_delete_keeps_the_cart() {
        let mut customer = Customer::from_new(2, NewCustomer::new("Bob").with_products(vec![1, 2]));
        customer.soft_delete();
        assert!(!customer.is_active());
        assert_eq!(customer.products, vec![1, 2]);
        customer.restore();
        assert!(customer.is_active());
    }

    #[test]
    fn apply_details_keeps_cart_and_flag() {
        let mut stored = Customer::from_new(1, NewCustomer::new("Ann").with_products(vec![3]));
        stored.soft_delete();
        let changes = Customer::from_new(1, NewCustomer::new("Annie"));

        stored.apply_details(&changes);
        assert_eq!(stored.name, "Annie");
        assert_eq!(stored.products, vec![3]);
        assert!(!stored.is_active());
    }

    #[test]
    fn missing_cart_deserializes_as_empty() {
        let customer: Customer =
            serde_json::from_str(r#"{"id": 1, "name": "Ann", "active": true}"#).unwrap();
        assert!(customer.products.is_empty());
    }
}
