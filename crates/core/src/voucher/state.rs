//! Voucher status state machine.
//!
//! The machine only decides: it operates on the caller-supplied current
//! status and returns the new status or an error, leaving persistence to
//! the caller. A rejected transition leaves the voucher untouched.

use super::error::VoucherError;
use super::types::VoucherStatus;

/// Checks whether a status transition is allowed.
///
/// Valid transitions:
/// - Registered → PartiallyPaid | FullyPaid | Cancelled
/// - PartiallyPaid → FullyPaid | Cancelled
/// - FullyPaid → Cancelled
/// - Cancelled → (none)
#[must_use]
pub fn can_transition(from: VoucherStatus, to: VoucherStatus) -> bool {
    matches!(
        (from, to),
        (
            VoucherStatus::Registered,
            VoucherStatus::PartiallyPaid | VoucherStatus::FullyPaid | VoucherStatus::Cancelled
        ) | (
            VoucherStatus::PartiallyPaid,
            VoucherStatus::FullyPaid | VoucherStatus::Cancelled
        ) | (VoucherStatus::FullyPaid, VoucherStatus::Cancelled)
    )
}

/// Executes a status transition.
///
/// # Errors
///
/// Returns `VoucherError::InvalidTransition` if the transition is outside
/// the allowed table; the current status is left unchanged.
pub fn transition(from: VoucherStatus, to: VoucherStatus) -> Result<VoucherStatus, VoucherError> {
    if can_transition(from, to) {
        Ok(to)
    } else {
        Err(VoucherError::InvalidTransition { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(VoucherStatus::Registered, VoucherStatus::PartiallyPaid)]
    #[case(VoucherStatus::Registered, VoucherStatus::FullyPaid)]
    #[case(VoucherStatus::Registered, VoucherStatus::Cancelled)]
    #[case(VoucherStatus::PartiallyPaid, VoucherStatus::FullyPaid)]
    #[case(VoucherStatus::PartiallyPaid, VoucherStatus::Cancelled)]
    #[case(VoucherStatus::FullyPaid, VoucherStatus::Cancelled)]
    fn test_valid_transitions(#[case] from: VoucherStatus, #[case] to: VoucherStatus) {
        assert!(can_transition(from, to));
        assert_eq!(transition(from, to).unwrap(), to);
    }

    #[rstest]
    #[case(VoucherStatus::FullyPaid, VoucherStatus::Registered)]
    #[case(VoucherStatus::FullyPaid, VoucherStatus::PartiallyPaid)]
    #[case(VoucherStatus::PartiallyPaid, VoucherStatus::Registered)]
    #[case(VoucherStatus::Registered, VoucherStatus::Registered)]
    fn test_invalid_transitions(#[case] from: VoucherStatus, #[case] to: VoucherStatus) {
        assert!(!can_transition(from, to));
        assert!(matches!(
            transition(from, to),
            Err(VoucherError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_cancelled_is_terminal_for_every_target() {
        for to in [
            VoucherStatus::Registered,
            VoucherStatus::PartiallyPaid,
            VoucherStatus::FullyPaid,
            VoucherStatus::Cancelled,
        ] {
            assert!(!can_transition(VoucherStatus::Cancelled, to));
        }
    }
}
