//! Movement type of a budget item or voucher.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Movement type: income ("I") or expense ("E").
///
/// Determines the required leaf depth of the Partida hierarchy (see
/// [`crate::config::HierarchyConfig`]) and which side of the cash flow a
/// voucher records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    /// Income movement (ingreso).
    Income,
    /// Expense movement (egreso).
    Expense,
}

impl MovementType {
    /// Returns the single-letter catalog code for this movement type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "I",
            Self::Expense => "E",
        }
    }

    /// Parses a movement type from its catalog code.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "I" => Some(Self::Income),
            "E" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for MovementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_type_as_str() {
        assert_eq!(MovementType::Income.as_str(), "I");
        assert_eq!(MovementType::Expense.as_str(), "E");
    }

    #[test]
    fn test_movement_type_parse() {
        assert_eq!(MovementType::parse("I"), Some(MovementType::Income));
        assert_eq!(MovementType::parse("e"), Some(MovementType::Expense));
        assert_eq!(MovementType::parse("X"), None);
    }

    #[test]
    fn test_movement_type_display() {
        assert_eq!(format!("{}", MovementType::Income), "I");
    }
}
