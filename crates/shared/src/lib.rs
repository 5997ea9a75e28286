//! Shared types, errors, and configuration for Tesoro.
//!
//! This crate provides common pieces used across the engine crates:
//! - Typed codes for type-safe natural-key references
//! - Application-wide error taxonomy
//! - Configuration management (tax regime, hierarchy depth ceilings)

pub mod config;
pub mod error;
pub mod types;

pub use config::EngineConfig;
pub use error::{AppError, AppResult};
