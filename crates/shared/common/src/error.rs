//! Unified error handling for the service layer.
//!
//! Callers see validation failures (caller-correctable), not found (carries
//! the offending identifier) and I/O (storage failures, propagated
//! unchanged). Configuration errors only occur at startup.

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: u64 },

    // Validation
    #[error("{0}")]
    Validation(String),

    // Storage
    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),

    // Startup
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound { .. } => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Whether the caller can fix the request and try again
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::NotFound { .. } | AppError::Validation(_))
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Io(e) => {
                tracing::error!("Storage error: {:?}", e);
                "A storage error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, entity: &'static str, id: u64) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, entity: &'static str, id: u64) -> AppResult<T> {
        self.ok_or(AppError::NotFound { entity, id })
    }
}

/// Convenience constructors
impl AppError {
    pub fn not_found(entity: &'static str, id: u64) -> Self {
        AppError::NotFound { entity, id }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }
}
