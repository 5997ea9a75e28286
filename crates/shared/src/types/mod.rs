//! Common types used across the application.

pub mod code;
pub mod movement;

pub use code::*;
pub use movement::MovementType;
