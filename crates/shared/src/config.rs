//! Application configuration management.
//!
//! Tax rates and hierarchy depth ceilings are injected configuration rather
//! than literals baked into the calculators, so alternate regimes can be
//! exercised in tests.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::MovementType;

/// Engine configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// Tax regime configuration.
    #[serde(default)]
    pub tax: TaxConfig,
    /// Partida hierarchy configuration.
    #[serde(default)]
    pub hierarchy: HierarchyConfig,
}

/// Tax regime configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxConfig {
    /// IGV rate applied to invoice/receipt vouchers (fraction, not percent).
    #[serde(default = "default_igv_rate")]
    pub igv_rate: Decimal,
}

fn default_igv_rate() -> Decimal {
    // 18% SUNAT IGV
    Decimal::new(18, 2)
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self {
            igv_rate: default_igv_rate(),
        }
    }
}

/// Partida hierarchy configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct HierarchyConfig {
    /// Maximum (and voucher-selectable) depth for income items.
    #[serde(default = "default_income_max_depth")]
    pub income_max_depth: u8,
    /// Maximum (and voucher-selectable) depth for expense items.
    #[serde(default = "default_expense_max_depth")]
    pub expense_max_depth: u8,
    /// Separator used when joining display names into a full path.
    #[serde(default = "default_path_separator")]
    pub path_separator: String,
}

fn default_income_max_depth() -> u8 {
    2
}

fn default_expense_max_depth() -> u8 {
    3
}

fn default_path_separator() -> String {
    " > ".to_string()
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            income_max_depth: default_income_max_depth(),
            expense_max_depth: default_expense_max_depth(),
            path_separator: default_path_separator(),
        }
    }
}

impl HierarchyConfig {
    /// Returns the required leaf depth for a movement type.
    #[must_use]
    pub const fn required_depth(&self, movement: MovementType) -> u8 {
        match movement {
            MovementType::Income => self.income_max_depth,
            MovementType::Expense => self.expense_max_depth,
        }
    }
}

impl EngineConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TESORO").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
