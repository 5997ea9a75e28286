//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error taxonomy.
///
/// Engine modules define their own precise error enums; this type is the
/// uniform shape the outer controller layers consume. Every engine error maps
/// into exactly one of these classes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Referenced entity (Partida, voucher) is absent.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input failed a validation rule.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Voucher status transition outside the allowed table.
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    /// Mutating operation attempted in a state that forbids it.
    #[error("Illegal state: {0}")]
    IllegalState(String),

    /// Backing catalog/storage failure, propagated unchanged.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) | Self::InvalidTransition(_) => 400,
            Self::IllegalState(_) => 422,
            Self::Catalog(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidTransition(_) => "INVALID_TRANSITION",
            Self::IllegalState(_) => "ILLEGAL_STATE",
            Self::Catalog(_) => "CATALOG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AppError::NotFound(String::new()).status_code(), 404);
        assert_eq!(AppError::Validation(String::new()).status_code(), 400);
        assert_eq!(
            AppError::InvalidTransition(String::new()).status_code(),
            400
        );
        assert_eq!(AppError::IllegalState(String::new()).status_code(), 422);
        assert_eq!(AppError::Catalog(String::new()).status_code(), 500);
        assert_eq!(AppError::Internal(String::new()).status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::NotFound(String::new()).error_code(), "NOT_FOUND");
        assert_eq!(
            AppError::Validation(String::new()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            AppError::InvalidTransition(String::new()).error_code(),
            "INVALID_TRANSITION"
        );
        assert_eq!(
            AppError::IllegalState(String::new()).error_code(),
            "ILLEGAL_STATE"
        );
        assert_eq!(
            AppError::Catalog(String::new()).error_code(),
            "CATALOG_ERROR"
        );
        assert_eq!(
            AppError::Internal(String::new()).error_code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::NotFound("partida 42".into()).to_string(),
            "Not found: partida 42"
        );
        assert_eq!(
            AppError::IllegalState("voucher cancelled".into()).to_string(),
            "Illegal state: voucher cancelled"
        );
    }
}
