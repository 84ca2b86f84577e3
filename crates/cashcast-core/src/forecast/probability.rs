//! Payment-likelihood model.
//!
//! Maps an invoice's settlement state and overdue depth to three scenario
//! probabilities (expected / optimistic / pessimistic). Pure lookup over an
//! immutable bucket table; every input maps to a defined row, unknown
//! statuses take a neutral fallback row rather than failing.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{PaymentStatus, Rate};

/// Likelihood of collecting an invoice's remaining balance, per scenario.
///
/// Invariant for every bucket: `pessimistic <= expected <= optimistic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentProbability {
    pub expected: Rate,
    pub optimistic: Rate,
    pub pessimistic: Rate,
}

/// Scenario probabilities for `(status, days_overdue)`.
///
/// `days_overdue` is negative for invoices not yet due. Buckets are
/// contiguous; overdue depth only differentiates `Unpaid` and `Overdue`
/// invoices, the remaining statuses have a single row each.
pub fn payment_probability(status: &PaymentStatus, days_overdue: i64) -> PaymentProbability {
    match status {
        PaymentStatus::Paid => bucket(dec!(1.00), dec!(1.00), dec!(1.00)),
        PaymentStatus::Partial => bucket(dec!(0.80), dec!(0.95), dec!(0.60)),
        PaymentStatus::Unpaid => {
            if days_overdue < 0 {
                bucket(dec!(0.90), dec!(0.98), dec!(0.70))
            } else if days_overdue <= 7 {
                bucket(dec!(0.80), dec!(0.90), dec!(0.60))
            } else if days_overdue <= 30 {
                bucket(dec!(0.60), dec!(0.80), dec!(0.40))
            } else {
                bucket(dec!(0.40), dec!(0.60), dec!(0.20))
            }
        }
        PaymentStatus::Overdue => {
            if days_overdue <= 15 {
                bucket(dec!(0.70), dec!(0.85), dec!(0.50))
            } else if days_overdue <= 30 {
                bucket(dec!(0.50), dec!(0.70), dec!(0.30))
            } else if days_overdue <= 60 {
                bucket(dec!(0.30), dec!(0.50), dec!(0.10))
            } else {
                bucket(dec!(0.20), dec!(0.40), dec!(0.05))
            }
        }
        PaymentStatus::Cancelled => bucket(dec!(0.00), dec!(0.10), dec!(0.00)),
        // Statuses this model does not know about
        PaymentStatus::Other(_) => bucket(dec!(0.50), dec!(0.70), dec!(0.30)),
    }
}

fn bucket(expected: Decimal, optimistic: Decimal, pessimistic: Decimal) -> PaymentProbability {
    PaymentProbability {
        expected,
        optimistic,
        pessimistic,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_paid_is_certain() {
        let p = payment_probability(&PaymentStatus::Paid, 0);
        assert_eq!(p.expected, dec!(1));
        assert_eq!(p.optimistic, dec!(1));
        assert_eq!(p.pessimistic, dec!(1));
    }

    #[test]
    fn test_partial_ignores_overdue_depth() {
        let early = payment_probability(&PaymentStatus::Partial, -30);
        let late = payment_probability(&PaymentStatus::Partial, 120);
        assert_eq!(early, late);
        assert_eq!(early.expected, dec!(0.80));
    }

    #[test]
    fn test_unpaid_not_yet_due() {
        let p = payment_probability(&PaymentStatus::Unpaid, -10);
        assert_eq!(p.expected, dec!(0.90));
        assert_eq!(p.optimistic, dec!(0.98));
        assert_eq!(p.pessimistic, dec!(0.70));
    }

    #[test]
    fn test_unpaid_bucket_boundaries() {
        assert_eq!(
            payment_probability(&PaymentStatus::Unpaid, 0).expected,
            dec!(0.80)
        );
        assert_eq!(
            payment_probability(&PaymentStatus::Unpaid, 7).expected,
            dec!(0.80)
        );
        assert_eq!(
            payment_probability(&PaymentStatus::Unpaid, 8).expected,
            dec!(0.60)
        );
        assert_eq!(
            payment_probability(&PaymentStatus::Unpaid, 30).expected,
            dec!(0.60)
        );
        assert_eq!(
            payment_probability(&PaymentStatus::Unpaid, 31).expected,
            dec!(0.40)
        );
    }

    #[test]
    fn test_overdue_bucket_boundaries() {
        assert_eq!(
            payment_probability(&PaymentStatus::Overdue, 15).expected,
            dec!(0.70)
        );
        assert_eq!(
            payment_probability(&PaymentStatus::Overdue, 16).expected,
            dec!(0.50)
        );
        assert_eq!(
            payment_probability(&PaymentStatus::Overdue, 30).expected,
            dec!(0.50)
        );
        assert_eq!(
            payment_probability(&PaymentStatus::Overdue, 31).expected,
            dec!(0.30)
        );
        assert_eq!(
            payment_probability(&PaymentStatus::Overdue, 60).expected,
            dec!(0.30)
        );
        assert_eq!(
            payment_probability(&PaymentStatus::Overdue, 61).expected,
            dec!(0.20)
        );
    }

    #[test]
    fn test_cancelled_keeps_small_upside() {
        let p = payment_probability(&PaymentStatus::Cancelled, 5);
        assert_eq!(p.expected, Decimal::ZERO);
        assert_eq!(p.optimistic, dec!(0.10));
        assert_eq!(p.pessimistic, Decimal::ZERO);
    }

    #[test]
    fn test_unknown_status_falls_back() {
        let p = payment_probability(&PaymentStatus::Other("disputed".into()), 45);
        assert_eq!(p.expected, dec!(0.50));
        assert_eq!(p.optimistic, dec!(0.70));
        assert_eq!(p.pessimistic, dec!(0.30));
    }

    #[test]
    fn test_scenario_ordering_holds_across_buckets() {
        let statuses = [
            PaymentStatus::Paid,
            PaymentStatus::Partial,
            PaymentStatus::Unpaid,
            PaymentStatus::Overdue,
            PaymentStatus::Cancelled,
            PaymentStatus::Other("reminder_sent".into()),
        ];
        for status in &statuses {
            for days in [-45, -1, 0, 7, 8, 15, 16, 30, 31, 60, 61, 365] {
                let p = payment_probability(status, days);
                assert!(
                    p.pessimistic <= p.expected && p.expected <= p.optimistic,
                    "ordering violated for {:?} at {} days",
                    status,
                    days
                );
                assert!(p.pessimistic >= Decimal::ZERO && p.optimistic <= Decimal::ONE);
            }
        }
    }
}
