//! Tax domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::TaxError;

/// Voucher type, determining the tax treatment of the amounts.
///
/// The set is closed: adding a type is a compile-time exercise, not a
/// runtime string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoucherType {
    /// Invoice (factura); IGV applies at the configured rate.
    Factura,
    /// Sales receipt (boleta); IGV applies at the configured rate.
    Boleta,
    /// Professional-fee receipt (recibo por honorarios); a user-supplied
    /// retention applies instead of IGV.
    ReciboHonorarios,
    /// Any other document; no tax applies.
    Otros,
}

impl VoucherType {
    /// Returns the string representation of the type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Factura => "factura",
            Self::Boleta => "boleta",
            Self::ReciboHonorarios => "recibo_honorarios",
            Self::Otros => "otros",
        }
    }

    /// Parses a voucher type from a string.
    ///
    /// # Errors
    ///
    /// Returns `TaxError::UnknownVoucherType` carrying the rejected code.
    pub fn parse(s: &str) -> Result<Self, TaxError> {
        match s.to_lowercase().as_str() {
            "factura" => Ok(Self::Factura),
            "boleta" => Ok(Self::Boleta),
            "recibo_honorarios" => Ok(Self::ReciboHonorarios),
            "otros" => Ok(Self::Otros),
            _ => Err(TaxError::UnknownVoucherType(s.to_string())),
        }
    }

    /// Returns true if IGV applies to this type.
    #[must_use]
    pub const fn applies_igv(&self) -> bool {
        matches!(self, Self::Factura | Self::Boleta)
    }

    /// Returns true if the tax amount is user-editable (retention types).
    #[must_use]
    pub const fn tax_editable(&self) -> bool {
        matches!(self, Self::ReciboHonorarios)
    }
}

impl fmt::Display for VoucherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of a custom (user-percentage) tax computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Tax amount, rounded to 2 decimals.
    pub tax: Decimal,
    /// Total amount, rounded to 2 decimals.
    pub total: Decimal,
}
