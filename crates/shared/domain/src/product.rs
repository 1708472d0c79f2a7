//! Product domain entity and related types.

use serde::{Deserialize, Serialize};

use crate::constants::{PRODUCT_PRICE_NOT_POSITIVE, PRODUCT_TITLE_EMPTY};
use crate::error::DomainResult;
use crate::validation::{ensure_not_blank, ensure_positive};

/// Repository-assigned product identifier
pub type ProductId = u64;

/// Product domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    /// Soft delete marker (false = deleted)
    pub active: bool,
}

impl Product {
    /// Build a stored product from a save payload and its assigned id.
    pub fn from_new(id: ProductId, new: NewProduct) -> Self {
        Self {
            id,
            title: new.title,
            price: new.price,
            active: true,
        }
    }

    /// Check title and price.
    pub fn validate(&self) -> DomainResult<()> {
        validate_fields(&self.title, self.price)
    }

    /// Check if product is active (not deleted)
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Copy the editable fields (title and price) from `changes`.
    /// The identifier and the active flag are left as they are.
    pub fn apply_details(&mut self, changes: &Product) {
        self.title.clone_from(&changes.title);
        self.price = changes.price;
    }

    /// Soft delete the product
    pub fn soft_delete(&mut self) {
        self.active = false;
    }

    /// Restore a soft-deleted product
    pub fn restore(&mut self) {
        self.active = true;
    }
}

/// Product creation payload (no identifier yet)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewProduct {
    /// Display title, must not be blank
    pub title: String,
    /// Unit price, must be greater than zero
    pub price: f64,
}

impl NewProduct {
    pub fn new(title: impl Into<String>, price: f64) -> Self {
        Self {
            title: title.into(),
            price,
        }
    }

    /// Check title and price.
    pub fn validate(&self) -> DomainResult<()> {
        validate_fields(&self.title, self.price)
    }
}

fn validate_fields(title: &str, price: f64) -> DomainResult<()> {
    ensure_not_blank(title, PRODUCT_TITLE_EMPTY)?;
    ensure_positive(price, PRODUCT_PRICE_NOT_POSITIVE)
}
