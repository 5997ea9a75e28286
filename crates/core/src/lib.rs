//! Core business logic for Tesoro.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, validation rules, and calculations live
//! here; loading catalog rows is delegated to an injected reader and
//! persisting vouchers is left to the caller.
//!
//! # Modules
//!
//! - `partida` - Budget item (Partida) hierarchy resolution
//! - `tax` - IGV and retention calculation
//! - `voucher` - Payment voucher lifecycle and pricing

pub mod partida;
pub mod tax;
pub mod voucher;
