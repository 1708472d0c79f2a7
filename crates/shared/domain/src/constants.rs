//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation messages
// =============================================================================

/// Rejection message for a blank product title
pub const PRODUCT_TITLE_EMPTY: &str = "Product title cannot be empty";

/// Rejection message for a zero, negative or NaN price
pub const PRODUCT_PRICE_NOT_POSITIVE: &str = "Product price must not be negative";

/// Rejection message for a blank customer name
pub const CUSTOMER_NAME_EMPTY: &str = "Customer name cannot be empty";

// =============================================================================
// Entity names
// =============================================================================

/// Entity label used in not-found diagnostics for products
pub const PRODUCT_ENTITY: &str = "Product";

/// Entity label used in not-found diagnostics for customers
pub const CUSTOMER_ENTITY: &str = "Customer";

// =============================================================================
// Identifiers
// =============================================================================

/// First identifier handed out by an empty repository
pub const FIRST_ID: u64 = 1;
