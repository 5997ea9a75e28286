//! Partida error types.

use tesoro_shared::types::{ItemCode, MovementType};
use thiserror::Error;

/// Errors that can occur during hierarchy resolution and validation.
#[derive(Debug, Error)]
pub enum PartidaError {
    /// Referenced item does not exist in the catalog.
    #[error("Partida {item_code} not found for movement type {movement}")]
    NotFound {
        /// The missing item code.
        item_code: ItemCode,
        /// The movement type that was searched.
        movement: MovementType,
    },

    /// Item exists but is not selectable on a voucher detail line.
    #[error(
        "Partida {item_code} at level {level} is not leaf-eligible \
         (movement type {movement} requires level {required})"
    )]
    NotLeafEligible {
        /// The rejected item code.
        item_code: ItemCode,
        /// The item's stored level.
        level: u8,
        /// The movement type of the item.
        movement: MovementType,
        /// The required leaf depth.
        required: u8,
    },

    /// Item level is outside the ceiling for its movement type.
    #[error("Level {level} is invalid for movement type {movement} (must be 1..={max})")]
    InvalidLevel {
        /// The rejected level.
        level: u8,
        /// The movement type being validated.
        movement: MovementType,
        /// The maximum allowed level.
        max: u8,
    },

    /// Backing catalog failure, propagated unchanged from the injected
    /// reader.
    #[error("Catalog error: {0}")]
    Catalog(String),
}

impl PartidaError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::NotLeafEligible { .. } | Self::InvalidLevel { .. } => 400,
            Self::Catalog(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "PARTIDA_NOT_FOUND",
            Self::NotLeafEligible { .. } => "PARTIDA_NOT_LEAF_ELIGIBLE",
            Self::InvalidLevel { .. } => "PARTIDA_INVALID_LEVEL",
            Self::Catalog(_) => "CATALOG_ERROR",
        }
    }
}

impl From<PartidaError> for tesoro_shared::AppError {
    fn from(err: PartidaError) -> Self {
        match &err {
            PartidaError::NotFound { .. } => Self::NotFound(err.to_string()),
            PartidaError::NotLeafEligible { .. } | PartidaError::InvalidLevel { .. } => {
                Self::Validation(err.to_string())
            }
            PartidaError::Catalog(_) => Self::Catalog(err.to_string()),
        }
    }
}
