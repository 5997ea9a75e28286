//! Tax error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during tax computation.
#[derive(Debug, Error)]
pub enum TaxError {
    /// Voucher type code is not one of the known types.
    #[error("Unknown voucher type: {0}")]
    UnknownVoucherType(String),

    /// Net amount is negative.
    #[error("Net amount cannot be negative: {0}")]
    NegativeAmount(Decimal),

    /// Percentage is outside the 0..=100 range.
    #[error("Percentage must be between 0 and 100: {0}")]
    InvalidPercentage(Decimal),
}

impl TaxError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        400
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownVoucherType(_) => "UNKNOWN_VOUCHER_TYPE",
            Self::NegativeAmount(_) => "NEGATIVE_AMOUNT",
            Self::InvalidPercentage(_) => "INVALID_PERCENTAGE",
        }
    }
}

impl From<TaxError> for tesoro_shared::AppError {
    fn from(err: TaxError) -> Self {
        Self::Validation(err.to_string())
    }
}
