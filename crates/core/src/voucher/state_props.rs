//! Property-based tests for the voucher state machine.

use proptest::prelude::*;

use crate::voucher::error::VoucherError;
use crate::voucher::state::{can_transition, transition};
use crate::voucher::types::VoucherStatus;

fn arb_status() -> impl Strategy<Value = VoucherStatus> {
    prop_oneof![
        Just(VoucherStatus::Registered),
        Just(VoucherStatus::PartiallyPaid),
        Just(VoucherStatus::FullyPaid),
        Just(VoucherStatus::Cancelled),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// `transition` succeeds exactly when `can_transition` allows it, and a
    /// rejection reports the attempted pair unchanged.
    #[test]
    fn prop_transition_agrees_with_table(from in arb_status(), to in arb_status()) {
        match transition(from, to) {
            Ok(new_status) => {
                prop_assert!(can_transition(from, to));
                prop_assert_eq!(new_status, to);
            }
            Err(VoucherError::InvalidTransition { from: f, to: t }) => {
                prop_assert!(!can_transition(from, to));
                prop_assert_eq!(f, from);
                prop_assert_eq!(t, to);
            }
            Err(_) => prop_assert!(false, "unexpected error variant"),
        }
    }

    /// Cancelled never transitions anywhere.
    #[test]
    fn prop_cancelled_is_terminal(to in arb_status()) {
        prop_assert!(!can_transition(VoucherStatus::Cancelled, to));
    }

    /// No status transitions to itself.
    #[test]
    fn prop_no_self_transitions(status in arb_status()) {
        prop_assert!(!can_transition(status, status));
    }

    /// Nothing ever transitions back to Registered.
    #[test]
    fn prop_registered_is_initial_only(from in arb_status()) {
        prop_assert!(!can_transition(from, VoucherStatus::Registered));
    }

    /// Edit and abono permissions coincide with the non-paid, non-terminal
    /// states.
    #[test]
    fn prop_capabilities_follow_status(status in arb_status()) {
        let live = matches!(
            status,
            VoucherStatus::Registered | VoucherStatus::PartiallyPaid
        );
        prop_assert_eq!(status.allows_edit(), live);
        prop_assert_eq!(status.allows_abono(), live);
        prop_assert_eq!(status.is_terminal(), status == VoucherStatus::Cancelled);
    }
}
