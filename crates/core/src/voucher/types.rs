//! Voucher domain types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use tesoro_shared::types::{CompanyCode, CounterpartyCode, ItemCode, MovementType, ProjectCode};

use crate::tax::VoucherType;

/// Voucher status in the payment lifecycle.
///
/// The valid transitions are:
/// - Registered → PartiallyPaid | FullyPaid | Cancelled
/// - PartiallyPaid → FullyPaid | Cancelled
/// - FullyPaid → Cancelled
/// - Cancelled → (terminal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoucherStatus {
    /// Voucher has been registered and carries no payments yet.
    Registered,
    /// At least one abono has been registered, balance outstanding.
    PartiallyPaid,
    /// The voucher has been settled in full.
    FullyPaid,
    /// Voucher has been annulled (terminal, never physically deleted).
    Cancelled,
}

impl VoucherStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::PartiallyPaid => "partially_paid",
            Self::FullyPaid => "fully_paid",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "registered" => Some(Self::Registered),
            "partially_paid" => Some(Self::PartiallyPaid),
            "fully_paid" => Some(Self::FullyPaid),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Returns true if header fields and detail lines may be edited.
    #[must_use]
    pub const fn allows_edit(&self) -> bool {
        matches!(self, Self::Registered | Self::PartiallyPaid)
    }

    /// Returns true if a payment (abono) may be registered.
    #[must_use]
    pub const fn allows_abono(&self) -> bool {
        matches!(self, Self::Registered | Self::PartiallyPaid)
    }

    /// Returns true if the status is terminal.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl fmt::Display for VoucherStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of counterparty a voucher is issued against.
///
/// Collapses the three source voucher flavors (provider, client, employee)
/// into one tagged dimension of the voucher identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterpartyKind {
    /// A supplier being paid (egreso voucher).
    Provider,
    /// A client paying the company (ingreso voucher).
    Client,
    /// An employee being reimbursed or paid fees.
    Employee,
}

/// A payment voucher header.
///
/// Identity is the natural key (company, counterparty, voucher number).
/// Amounts in local currency are derived by the tax engine; the voucher is
/// never physically deleted, only moved to `Cancelled`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Voucher {
    /// Company the voucher belongs to.
    pub company: CompanyCode,
    /// Kind of counterparty.
    pub counterparty_kind: CounterpartyKind,
    /// Counterparty code.
    pub counterparty: CounterpartyCode,
    /// Voucher number within (company, counterparty).
    pub voucher_number: String,
    /// Project the voucher is charged to.
    pub project: ProjectCode,
    /// Movement type of all detail lines.
    pub movement: MovementType,
    /// Payment sequence number.
    pub payment_sequence: i32,
    /// Voucher type, determining tax treatment.
    pub voucher_type: VoucherType,
    /// ISO currency code of the origin amount.
    pub currency: String,
    /// Exchange rate from origin to local currency.
    pub exchange_rate: Decimal,
    /// Gross amount in origin currency.
    pub gross_amount: Decimal,
    /// Net amount in local currency.
    pub net_amount: Decimal,
    /// Tax amount in local currency.
    pub tax_amount: Decimal,
    /// Total amount in local currency.
    pub total_amount: Decimal,
    /// Date of the last registered abono, if any.
    pub abono_date: Option<NaiveDate>,
    /// Payment-method description of the last abono, if any.
    pub abono_description: Option<String>,
    /// Current lifecycle status.
    pub status: VoucherStatus,
    /// Anti-collision/version tag.
    pub seed: Uuid,
    /// Detail lines; at least one is required at creation.
    pub details: Vec<VoucherDetail>,
}

/// A voucher detail line charging one leaf-eligible Partida.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoucherDetail {
    /// Referenced budget item; must be leaf-eligible for the movement type.
    pub item_code: ItemCode,
    /// Optional line description.
    pub description: Option<String>,
    /// Net amount of the line.
    pub net_amount: Decimal,
    /// Tax amount of the line.
    pub tax_amount: Decimal,
    /// Total amount of the line.
    pub total_amount: Decimal,
}

/// Input for creating a voucher.
#[derive(Debug, Clone)]
pub struct CreateVoucherInput {
    /// Company the voucher belongs to.
    pub company: CompanyCode,
    /// Kind of counterparty.
    pub counterparty_kind: CounterpartyKind,
    /// Counterparty code.
    pub counterparty: CounterpartyCode,
    /// Voucher number within (company, counterparty).
    pub voucher_number: String,
    /// Project the voucher is charged to.
    pub project: ProjectCode,
    /// Movement type of all detail lines.
    pub movement: MovementType,
    /// Payment sequence number.
    pub payment_sequence: i32,
    /// Voucher type, determining tax treatment.
    pub voucher_type: VoucherType,
    /// ISO currency code of the origin amount.
    pub currency: String,
    /// Exchange rate from origin to local currency.
    pub exchange_rate: Decimal,
    /// Gross amount in origin currency.
    pub gross_amount: Decimal,
    /// Net amount in local currency.
    pub net_amount: Decimal,
    /// Retention percentage for RECIBO vouchers, if the user supplied one.
    pub retention_percentage: Option<Decimal>,
    /// Detail line inputs.
    pub details: Vec<VoucherDetailInput>,
}

/// Input for a single detail line.
#[derive(Debug, Clone)]
pub struct VoucherDetailInput {
    /// Referenced budget item.
    pub item_code: ItemCode,
    /// Optional line description.
    pub description: Option<String>,
    /// Net amount of the line.
    pub net_amount: Decimal,
}

/// Input for registering a payment (abono).
#[derive(Debug, Clone)]
pub struct AbonoInput {
    /// Payment date to stamp on the voucher.
    pub paid_at: NaiveDate,
    /// Payment-method description (required).
    pub description: String,
    /// True if this abono settles the voucher in full.
    pub settles_in_full: bool,
}

/// Lifecycle action representing a state change with audit data.
#[derive(Debug, Clone)]
pub enum VoucherAction {
    /// Register an abono against the voucher.
    RegisterAbono {
        /// The new status after the abono.
        new_status: VoucherStatus,
        /// Payment date stamped on the voucher.
        paid_at: NaiveDate,
        /// Payment-method description stamped on the voucher.
        description: String,
        /// When the abono was recorded.
        recorded_at: DateTime<Utc>,
    },
    /// Cancel (annul) the voucher.
    Cancel {
        /// The new status after cancellation.
        new_status: VoucherStatus,
        /// The reason for cancellation.
        cancel_reason: String,
        /// When the cancellation was recorded.
        cancelled_at: DateTime<Utc>,
    },
}

impl VoucherAction {
    /// Returns the new status resulting from this action.
    #[must_use]
    pub fn new_status(&self) -> VoucherStatus {
        match self {
            Self::RegisterAbono { new_status, .. } | Self::Cancel { new_status, .. } => {
                *new_status
            }
        }
    }
}
