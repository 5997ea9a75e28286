//! Property-based tests for the tax calculator.

use proptest::prelude::*;
use rust_decimal::Decimal;
use tesoro_shared::config::TaxConfig;

use crate::tax::calculator::{round_sunat, TaxCalculator};
use crate::tax::types::VoucherType;

/// Strategy for non-negative amounts with up to 4 decimal places.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000).prop_map(|n| Decimal::new(n, 4))
}

/// Strategy for percentages in 0..=100 with 2 decimal places.
fn arb_percentage() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000).prop_map(|n| Decimal::new(n, 2))
}

fn arb_voucher_type() -> impl Strategy<Value = VoucherType> {
    prop_oneof![
        Just(VoucherType::Factura),
        Just(VoucherType::Boleta),
        Just(VoucherType::ReciboHonorarios),
        Just(VoucherType::Otros),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// round_sunat(round_sunat(x)) == round_sunat(x) for all x.
    #[test]
    fn prop_rounding_idempotent(n in -1_000_000_000i64..1_000_000_000, scale in 0u32..=6) {
        let x = Decimal::new(n, scale);
        prop_assert_eq!(round_sunat(round_sunat(x)), round_sunat(x));
    }

    /// Rounded values carry at most 2 decimal places.
    #[test]
    fn prop_rounding_scale(amount in arb_amount()) {
        prop_assert!(round_sunat(amount).scale() <= 2);
    }

    /// Default tax is never negative for a non-negative net, and is zero
    /// exactly for the non-IGV types.
    #[test]
    fn prop_default_tax_sign(voucher_type in arb_voucher_type(), net in arb_amount()) {
        let calc = TaxCalculator::new(TaxConfig::default());
        let tax = calc.compute_tax(voucher_type, net);
        prop_assert!(!tax.is_sign_negative());
        if !voucher_type.applies_igv() {
            prop_assert_eq!(tax, Decimal::ZERO);
        }
    }

    /// For IGV types the total equals the rounded sum of net and tax.
    #[test]
    fn prop_igv_total_is_additive(net in arb_amount()) {
        let calc = TaxCalculator::new(TaxConfig::default());
        for voucher_type in [VoucherType::Factura, VoucherType::Boleta] {
            let tax = calc.compute_tax(voucher_type, net);
            let total = calc.compute_total(voucher_type, net, tax);
            prop_assert_eq!(total, round_sunat(net + tax));
        }
    }

    /// The retention total never exceeds the net it is withheld from.
    #[test]
    fn prop_retention_total_subtractive(net in arb_amount(), percentage in arb_percentage()) {
        let calc = TaxCalculator::new(TaxConfig::default());
        let breakdown = calc.compute_custom_tax(net, percentage).unwrap();
        let total = calc.compute_total(VoucherType::ReciboHonorarios, net, breakdown.tax);
        prop_assert!(total <= round_sunat(net));
    }

    /// The custom-percentage path is additive and internally consistent.
    #[test]
    fn prop_custom_tax_consistent(net in arb_amount(), percentage in arb_percentage()) {
        let calc = TaxCalculator::new(TaxConfig::default());
        let breakdown = calc.compute_custom_tax(net, percentage).unwrap();
        prop_assert!(!breakdown.tax.is_sign_negative());
        prop_assert_eq!(breakdown.total, round_sunat(net + breakdown.tax));
    }
}
