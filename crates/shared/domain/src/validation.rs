//! Field rules shared by the save and update paths of every entity.

use crate::error::{DomainError, DomainResult};

/// Reject text that is empty or whitespace-only.
pub fn ensure_not_blank(value: &str, message: &'static str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(message));
    }
    Ok(())
}

/// Reject prices that are not strictly positive. NaN is rejected too.
pub fn ensure_positive(value: f64, message: &'static str) -> DomainResult<()> {
    if value.is_nan() || value <= 0.0 {
        return Err(DomainError::validation(message));
    }
    Ok(())
}
