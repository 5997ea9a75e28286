//! IGV and retention calculation.
//!
//! All functions are stateless with respect to the voucher: they map
//! (voucher type, net amount, optional user percentage) to tax and total
//! amounts. Rounding is applied as the last step of every computation,
//! never on intermediate values except where stated.

use rust_decimal::{Decimal, RoundingStrategy};

use tesoro_shared::config::TaxConfig;

use super::error::TaxError;
use super::types::{TaxBreakdown, VoucherType};

/// Rounds to 2 decimal places, half-up ("SUNAT rounding").
///
/// Idempotent: rounding an already-rounded value returns it unchanged.
#[must_use]
pub fn round_sunat(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Tax calculator parameterized by the configured tax regime.
#[derive(Debug, Clone)]
pub struct TaxCalculator {
    config: TaxConfig,
}

impl TaxCalculator {
    /// Creates a calculator with the given tax configuration.
    #[must_use]
    pub const fn new(config: TaxConfig) -> Self {
        Self { config }
    }

    /// Returns the configured IGV rate (fraction, not percent).
    #[must_use]
    pub const fn igv_rate(&self) -> Decimal {
        self.config.igv_rate
    }

    /// Computes the default tax for a voucher type.
    ///
    /// IGV types tax at the configured rate; RECIBO defaults to zero until a
    /// retention percentage is supplied (see [`Self::compute_custom_tax`]);
    /// OTROS never taxes.
    ///
    /// The net's sign is not validated here: [`crate::voucher::VoucherService`]
    /// rejects negative nets before pricing, and a negative net passed
    /// directly yields a sign-mirrored tax.
    #[must_use]
    pub fn compute_tax(&self, voucher_type: VoucherType, net: Decimal) -> Decimal {
        match voucher_type {
            VoucherType::Factura | VoucherType::Boleta => {
                round_sunat(net * self.config.igv_rate)
            }
            VoucherType::ReciboHonorarios | VoucherType::Otros => Decimal::ZERO,
        }
    }

    /// Computes the voucher total from net and tax.
    ///
    /// IGV types add the tax; RECIBO subtracts it (retention is withheld
    /// from the net); OTROS passes the net through unchanged. Like
    /// [`Self::compute_tax`], signs are not validated here.
    #[must_use]
    pub fn compute_total(&self, voucher_type: VoucherType, net: Decimal, tax: Decimal) -> Decimal {
        match voucher_type {
            VoucherType::Factura | VoucherType::Boleta => round_sunat(net + tax),
            VoucherType::ReciboHonorarios => round_sunat(net - tax),
            VoucherType::Otros => net,
        }
    }

    /// Computes tax and total from a user-supplied percentage.
    ///
    /// The percentage is divided with 4-decimal intermediate precision to
    /// avoid truncation bias. NOTE: this path produces an *additive* total,
    /// while the default RECIBO rule in [`Self::compute_total`] is
    /// subtractive. The asymmetry reproduces the reference behavior on
    /// purpose; see DESIGN.md before unifying.
    ///
    /// # Errors
    ///
    /// Returns `TaxError::NegativeAmount` for a negative net and
    /// `TaxError::InvalidPercentage` for a percentage outside 0..=100.
    pub fn compute_custom_tax(
        &self,
        net: Decimal,
        percentage: Decimal,
    ) -> Result<TaxBreakdown, TaxError> {
        if net.is_sign_negative() {
            return Err(TaxError::NegativeAmount(net));
        }
        if percentage.is_sign_negative() || percentage > Decimal::ONE_HUNDRED {
            return Err(TaxError::InvalidPercentage(percentage));
        }

        let rate = (percentage / Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero);
        let tax = round_sunat(net * rate);
        let total = round_sunat(net + tax);

        Ok(TaxBreakdown { tax, total })
    }
}
