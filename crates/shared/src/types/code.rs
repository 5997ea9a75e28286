//! Typed codes for type-safe natural-key references.
//!
//! The catalog and voucher tables are keyed by natural codes (company code,
//! counterparty code, budget item number), not surrogate UUIDs. Wrapping them
//! prevents accidentally passing a `CompanyCode` where a `ProjectCode` is
//! expected.

use serde::{Deserialize, Serialize};

/// Macro to generate typed string-code wrappers.
macro_rules! typed_code {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Creates a code from any string-like value.
            pub fn new(code: impl Into<String>) -> Self {
                Self(code.into())
            }

            /// Returns the code as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

typed_code!(CompanyCode, "Code of the company a record belongs to.");
typed_code!(ProjectCode, "Code of the project a voucher is charged to.");
typed_code!(
    CounterpartyCode,
    "Code of a voucher counterparty (provider, client, or employee)."
);

/// Numeric code of a budget item (Partida) within its company and movement
/// type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemCode(pub i32);

impl ItemCode {
    /// Returns the inner numeric code.
    #[must_use]
    pub const fn into_inner(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for ItemCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ItemCode {
    fn from(code: i32) -> Self {
        Self(code)
    }
}
