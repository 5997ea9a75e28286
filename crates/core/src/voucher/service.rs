//! Voucher orchestration service.
//!
//! Combines the three engine pieces for a create/update: detail lines are
//! validated against the hierarchy resolver, totals come from the tax
//! calculator, and the state machine gates the mutation. The service only
//! computes; the caller persists the result in a single atomic operation so
//! a half-applied voucher is never observable.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::partida::{HierarchyResolver, PartidaCatalog};
use crate::tax::{round_sunat, TaxCalculator, VoucherType};

use super::error::VoucherError;
use super::state;
use super::types::{
    AbonoInput, CreateVoucherInput, Voucher, VoucherAction, VoucherDetail, VoucherDetailInput,
    VoucherStatus,
};

/// Stateless service for voucher pricing and lifecycle decisions.
pub struct VoucherService;

impl VoucherService {
    /// Validates and prices a new voucher.
    ///
    /// Checks that at least one detail line is present, that every line
    /// references a leaf-eligible Partida at the required depth, and that no
    /// amount is negative; then derives header and per-line tax/totals. The
    /// result starts in `Registered` state with a fresh seed.
    ///
    /// # Errors
    ///
    /// Returns `VoucherError::NoDetailLines`, `VoucherError::NegativeAmount`,
    /// a wrapped `PartidaError` for a bad item reference, or a wrapped
    /// `TaxError` for a bad retention percentage.
    pub fn price<C: PartidaCatalog>(
        input: CreateVoucherInput,
        resolver: &HierarchyResolver,
        catalog: &C,
        calculator: &TaxCalculator,
    ) -> Result<Voucher, VoucherError> {
        if input.details.is_empty() {
            return Err(VoucherError::NoDetailLines);
        }
        if input.net_amount.is_sign_negative() {
            return Err(VoucherError::NegativeAmount(input.net_amount));
        }

        for detail in &input.details {
            resolver.validate_for_voucher(
                catalog,
                &input.company,
                input.movement,
                detail.item_code,
            )?;
        }

        let (tax_amount, total_amount) = Self::amounts_for(
            calculator,
            input.voucher_type,
            input.net_amount,
            input.retention_percentage,
        )?;

        let details = input
            .details
            .iter()
            .map(|line| {
                Self::price_detail(
                    calculator,
                    input.voucher_type,
                    line,
                    input.retention_percentage,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            voucher_number = %input.voucher_number,
            voucher_type = %input.voucher_type,
            net = %input.net_amount,
            tax = %tax_amount,
            total = %total_amount,
            "priced voucher"
        );

        Ok(Voucher {
            company: input.company,
            counterparty_kind: input.counterparty_kind,
            counterparty: input.counterparty,
            voucher_number: input.voucher_number,
            project: input.project,
            movement: input.movement,
            payment_sequence: input.payment_sequence,
            voucher_type: input.voucher_type,
            currency: input.currency,
            exchange_rate: input.exchange_rate,
            gross_amount: input.gross_amount,
            net_amount: input.net_amount,
            tax_amount,
            total_amount,
            abono_date: None,
            abono_description: None,
            status: VoucherStatus::Registered,
            seed: Uuid::now_v7(),
            details,
        })
    }

    /// Validates that a voucher may be mutated (header edits, detail line
    /// changes) in its current status.
    ///
    /// # Errors
    ///
    /// Returns `VoucherError::CannotModifyCancelled` for a cancelled voucher
    /// and `VoucherError::NotEditable` for any other non-editable status.
    pub fn validate_can_modify(status: VoucherStatus) -> Result<(), VoucherError> {
        if status.is_terminal() {
            return Err(VoucherError::CannotModifyCancelled);
        }
        if !status.allows_edit() {
            return Err(VoucherError::NotEditable { status });
        }
        Ok(())
    }

    /// Registers a payment (abono) against a voucher.
    ///
    /// Stamps the payment date and payment-method description and moves the
    /// voucher toward a paid state. A partial abono on an already
    /// partially-paid voucher keeps the status unchanged.
    ///
    /// # Errors
    ///
    /// Returns `VoucherError::CannotModifyCancelled` on a cancelled voucher,
    /// `VoucherError::AbonoNotAllowed` on a fully-paid one, and
    /// `VoucherError::AbonoDescriptionRequired` for an empty description.
    pub fn register_abono(
        status: VoucherStatus,
        input: AbonoInput,
    ) -> Result<VoucherAction, VoucherError> {
        if status.is_terminal() {
            return Err(VoucherError::CannotModifyCancelled);
        }
        if !status.allows_abono() {
            return Err(VoucherError::AbonoNotAllowed { status });
        }
        if input.description.trim().is_empty() {
            return Err(VoucherError::AbonoDescriptionRequired);
        }

        let target = if input.settles_in_full {
            VoucherStatus::FullyPaid
        } else {
            VoucherStatus::PartiallyPaid
        };
        let new_status = if target == status {
            status
        } else {
            state::transition(status, target)?
        };

        debug!(%status, %new_status, paid_at = %input.paid_at, "registered abono");

        Ok(VoucherAction::RegisterAbono {
            new_status,
            paid_at: input.paid_at,
            description: input.description,
            recorded_at: Utc::now(),
        })
    }

    /// Cancels (annuls) a voucher.
    ///
    /// Vouchers are never physically deleted; cancellation is the terminal
    /// state and requires a reason.
    ///
    /// # Errors
    ///
    /// Returns `VoucherError::CannotModifyCancelled` if already cancelled
    /// and `VoucherError::CancelReasonRequired` for an empty reason.
    pub fn cancel(
        status: VoucherStatus,
        cancel_reason: String,
    ) -> Result<VoucherAction, VoucherError> {
        if status.is_terminal() {
            return Err(VoucherError::CannotModifyCancelled);
        }
        if cancel_reason.trim().is_empty() {
            return Err(VoucherError::CancelReasonRequired);
        }

        let new_status = state::transition(status, VoucherStatus::Cancelled)?;

        Ok(VoucherAction::Cancel {
            new_status,
            cancel_reason,
            cancelled_at: Utc::now(),
        })
    }

    /// Checks whether the detail lines sum to the header amounts.
    ///
    /// Header and detail totals are kept independent (the source system
    /// never asserted the equality); this predicate is offered to callers
    /// that want the reconciliation check anyway. Both sides are rounded
    /// before comparing, so a header carrying unrounded input still
    /// reconciles against details summing to the same value.
    #[must_use]
    pub fn details_reconcile(voucher: &Voucher) -> bool {
        let net: Decimal = voucher.details.iter().map(|d| d.net_amount).sum();
        let tax: Decimal = voucher.details.iter().map(|d| d.tax_amount).sum();
        let total: Decimal = voucher.details.iter().map(|d| d.total_amount).sum();
        round_sunat(net) == round_sunat(voucher.net_amount)
            && round_sunat(tax) == round_sunat(voucher.tax_amount)
            && round_sunat(total) == round_sunat(voucher.total_amount)
    }

    /// Derives (tax, total) for a net amount under the voucher type rules.
    ///
    /// A RECIBO with a user-supplied retention percentage goes through the
    /// custom-percentage path (additive total); without one it defaults to
    /// zero tax under the subtractive rule.
    fn amounts_for(
        calculator: &TaxCalculator,
        voucher_type: VoucherType,
        net: Decimal,
        retention_percentage: Option<Decimal>,
    ) -> Result<(Decimal, Decimal), VoucherError> {
        if voucher_type.tax_editable() {
            if let Some(percentage) = retention_percentage {
                let breakdown = calculator.compute_custom_tax(net, percentage)?;
                return Ok((breakdown.tax, breakdown.total));
            }
        }
        let tax = calculator.compute_tax(voucher_type, net);
        let total = calculator.compute_total(voucher_type, net, tax);
        Ok((tax, total))
    }

    /// Prices one detail line with the same rules as the header.
    fn price_detail(
        calculator: &TaxCalculator,
        voucher_type: VoucherType,
        line: &VoucherDetailInput,
        retention_percentage: Option<Decimal>,
    ) -> Result<VoucherDetail, VoucherError> {
        if line.net_amount.is_sign_negative() {
            return Err(VoucherError::NegativeAmount(line.net_amount));
        }
        let (tax_amount, total_amount) = Self::amounts_for(
            calculator,
            voucher_type,
            line.net_amount,
            retention_percentage,
        )?;
        Ok(VoucherDetail {
            item_code: line.item_code,
            description: line.description.clone(),
            net_amount: line.net_amount,
            tax_amount,
            total_amount,
        })
    }
}
