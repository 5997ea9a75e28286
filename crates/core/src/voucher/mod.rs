//! Payment voucher lifecycle and pricing.
//!
//! # Modules
//!
//! - `types` - Voucher domain types (VoucherStatus, Voucher, VoucherAction)
//! - `error` - Voucher-specific error types
//! - `state` - Status transition table
//! - `service` - Pricing and lifecycle decisions

pub mod error;
pub mod service;
pub mod state;
pub mod types;

#[cfg(test)]
mod state_props;

pub use error::VoucherError;
pub use service::VoucherService;
pub use state::{can_transition, transition};
pub use types::{
    AbonoInput, CounterpartyKind, CreateVoucherInput, Voucher, VoucherAction, VoucherDetail,
    VoucherDetailInput, VoucherStatus,
};
