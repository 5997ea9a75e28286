//! IGV and retention calculation.
//!
//! # Modules
//!
//! - `types` - Voucher types and computed breakdowns
//! - `error` - Tax-specific error types
//! - `calculator` - The stateless computation functions

pub mod calculator;
pub mod error;
pub mod types;

#[cfg(test)]
mod calculator_props;

pub use calculator::{round_sunat, TaxCalculator};
pub use error::TaxError;
pub use types::{TaxBreakdown, VoucherType};
