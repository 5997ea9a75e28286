//! Voucher error types.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::partida::PartidaError;
use crate::tax::TaxError;

use super::types::VoucherStatus;

/// Errors that can occur during voucher operations.
#[derive(Debug, Error)]
pub enum VoucherError {
    /// Attempted an invalid status transition.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: VoucherStatus,
        /// The attempted target status.
        to: VoucherStatus,
    },

    /// Attempted a mutating operation on a cancelled voucher.
    #[error("Cannot modify a cancelled voucher")]
    CannotModifyCancelled,

    /// Voucher status forbids editing.
    #[error("Voucher in status {status} cannot be edited")]
    NotEditable {
        /// The current status.
        status: VoucherStatus,
    },

    /// Voucher status forbids registering an abono.
    #[error("Voucher in status {status} cannot receive an abono")]
    AbonoNotAllowed {
        /// The current status.
        status: VoucherStatus,
    },

    /// A voucher requires at least one detail line.
    #[error("Voucher must have at least one detail line")]
    NoDetailLines,

    /// A line amount is negative.
    #[error("Detail line amount cannot be negative: {0}")]
    NegativeAmount(Decimal),

    /// Abono description is required but not provided.
    #[error("Abono description is required")]
    AbonoDescriptionRequired,

    /// Cancellation reason is required but not provided.
    #[error("Cancellation reason is required")]
    CancelReasonRequired,

    /// A detail line referenced an invalid Partida.
    #[error(transparent)]
    Partida(#[from] PartidaError),

    /// Tax computation rejected the input.
    #[error(transparent)]
    Tax(#[from] TaxError),
}

impl VoucherError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidTransition { .. }
            | Self::NoDetailLines
            | Self::NegativeAmount(_)
            | Self::AbonoDescriptionRequired
            | Self::CancelReasonRequired => 400,

            Self::CannotModifyCancelled | Self::NotEditable { .. } | Self::AbonoNotAllowed { .. } => {
                422
            }

            Self::Partida(err) => err.status_code(),
            Self::Tax(err) => err.status_code(),
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::CannotModifyCancelled => "CANNOT_MODIFY_CANCELLED",
            Self::NotEditable { .. } => "NOT_EDITABLE",
            Self::AbonoNotAllowed { .. } => "ABONO_NOT_ALLOWED",
            Self::NoDetailLines => "NO_DETAIL_LINES",
            Self::NegativeAmount(_) => "NEGATIVE_AMOUNT",
            Self::AbonoDescriptionRequired => "ABONO_DESCRIPTION_REQUIRED",
            Self::CancelReasonRequired => "CANCEL_REASON_REQUIRED",
            Self::Partida(err) => err.error_code(),
            Self::Tax(err) => err.error_code(),
        }
    }
}

impl From<VoucherError> for tesoro_shared::AppError {
    fn from(err: VoucherError) -> Self {
        match err {
            VoucherError::InvalidTransition { .. } => Self::InvalidTransition(err.to_string()),
            VoucherError::CannotModifyCancelled
            | VoucherError::NotEditable { .. }
            | VoucherError::AbonoNotAllowed { .. } => Self::IllegalState(err.to_string()),
            VoucherError::NoDetailLines
            | VoucherError::NegativeAmount(_)
            | VoucherError::AbonoDescriptionRequired
            | VoucherError::CancelReasonRequired => Self::Validation(err.to_string()),
            VoucherError::Partida(inner) => Self::from(inner),
            VoucherError::Tax(inner) => Self::from(inner),
        }
    }
}
