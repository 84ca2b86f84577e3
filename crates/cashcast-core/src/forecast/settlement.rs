//! Settlement date prediction.
//!
//! Estimates the single calendar day an open invoice's remaining balance
//! lands in the forecast. Deterministic: uncertainty lives in the
//! probability weighting, not in the date.

use chrono::{Duration, NaiveDate};

use crate::types::{Invoice, PaymentStatus};

/// Partially paid invoices are assumed to clear shortly after their due date.
pub const PARTIAL_SETTLEMENT_LAG_DAYS: i64 = 7;

/// Overdue invoices are modeled as resolving a fixed two weeks out,
/// regardless of how overdue they already are.
pub const OVERDUE_SETTLEMENT_LAG_DAYS: i64 = 14;

/// Whole days between the reference date and the due date.
/// Negative when the invoice is not yet due.
pub fn days_overdue(as_of: NaiveDate, due_date: NaiveDate) -> i64 {
    (as_of - due_date).num_days()
}

/// The calendar date an invoice's remaining balance is assumed to settle.
///
/// Paid invoices report their actual payment date (falling back to `as_of`
/// when the record is missing one); statuses without a dedicated rule fall
/// back to the due date.
pub fn predicted_settlement_date(invoice: &Invoice, as_of: NaiveDate) -> NaiveDate {
    match invoice.payment_status {
        PaymentStatus::Paid => invoice.payment_date.unwrap_or(as_of),
        PaymentStatus::Partial => {
            invoice.payment_due_date + Duration::days(PARTIAL_SETTLEMENT_LAG_DAYS)
        }
        PaymentStatus::Unpaid => invoice.payment_due_date,
        PaymentStatus::Overdue => as_of + Duration::days(OVERDUE_SETTLEMENT_LAG_DAYS),
        PaymentStatus::Cancelled | PaymentStatus::Other(_) => invoice.payment_due_date,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
