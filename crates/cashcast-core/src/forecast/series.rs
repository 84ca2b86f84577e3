//! Daily series construction.
//!
//! Allocates each open invoice's probability-weighted remaining balance onto
//! the horizon day matching its predicted settlement date, then folds the
//! per-day amounts into running totals per scenario.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use super::probability::payment_probability;
use super::settlement::{days_overdue, predicted_settlement_date};
use super::CashFlowDataPoint;
use crate::types::{Invoice, PaymentStatus};

/// One zeroed data point per calendar day of `[as_of, as_of + horizon_days)`,
/// with every open invoice's weighted remaining balance added to the day it
/// is predicted to settle on.
///
/// Paid invoices are skipped: they are realized cash, not a future inflow.
/// Invoices predicted to settle outside the horizon contribute nothing; the
/// window does not clamp them to its boundary days.
pub fn build_daily_series(
    invoices: &[Invoice],
    as_of: NaiveDate,
    horizon_days: u32,
) -> Vec<CashFlowDataPoint> {
    let mut days: Vec<CashFlowDataPoint> = (0..i64::from(horizon_days))
        .map(|offset| CashFlowDataPoint::zeroed(as_of + Duration::days(offset)))
        .collect();

    for invoice in invoices {
        if invoice.payment_status == PaymentStatus::Paid {
            continue;
        }

        let overdue = days_overdue(as_of, invoice.payment_due_date);
        let probability = payment_probability(&invoice.payment_status, overdue);
        let settles_on = predicted_settlement_date(invoice, as_of);
        let remaining = invoice.remaining_amount();

        let offset = (settles_on - as_of).num_days();
        if offset < 0 || offset >= i64::from(horizon_days) {
            continue;
        }

        let day = &mut days[offset as usize];
        day.expected += remaining * probability.expected;
        day.optimistic += remaining * probability.optimistic;
        day.pessimistic += remaining * probability.pessimistic;
    }

    days
}

/// Left-to-right fold setting each day's cumulative fields to the running
/// scenario totals up to and including that day.
pub fn accumulate_running_totals(days: &mut [CashFlowDataPoint]) {
    let mut expected = Decimal::ZERO;
    let mut optimistic = Decimal::ZERO;
    let mut pessimistic = Decimal::ZERO;

    for day in days.iter_mut() {
        expected += day.expected;
        optimistic += day.optimistic;
        pessimistic += day.pessimistic;
        day.cumulative_expected = expected;
        day.cumulative_optimistic = optimistic;
        day.cumulative_pessimistic = pessimistic;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn as_of() -> NaiveDate {
        date(2025, 3, 3)
    }

    fn unpaid(total: Decimal, due: NaiveDate) -> Invoice {
        Invoice {
            total,
            payment_status: PaymentStatus::Unpaid,
            payment_due_date: due,
            payment_date: None,
            payment_amount: None,
        }
    }

    #[test]
    fn test_series_covers_full_horizon() {
        let days = build_daily_series(&[], as_of(), 90);
        assert_eq!(days.len(), 90);
        assert_eq!(days[0].date, as_of());
        assert_eq!(days[89].date, date(2025, 5, 31));
        for day in &days {
            assert_eq!(day.expected, Decimal::ZERO);
            assert_eq!(day.optimistic, Decimal::ZERO);
            assert_eq!(day.pessimistic, Decimal::ZERO);
        }
    }

    #[test]
    fn test_zero_day_horizon_is_empty() {
        let invoices = [unpaid(dec!(1000), date(2025, 3, 13))];
        assert!(build_daily_series(&invoices, as_of(), 0).is_empty());
    }

    #[test]
    fn test_unpaid_invoice_lands_on_due_date() {
        // Not yet due for 10 days: probabilities 0.90 / 0.98 / 0.70
        let invoices = [unpaid(dec!(1000), date(2025, 3, 13))];
        let days = build_daily_series(&invoices, as_of(), 90);

        assert_eq!(days[10].expected, dec!(900.00));
        assert_eq!(days[10].optimistic, dec!(980.00));
        assert_eq!(days[10].pessimistic, dec!(700.00));
        for (i, day) in days.iter().enumerate() {
            if i != 10 {
                assert_eq!(day.expected, Decimal::ZERO, "day {} should be empty", i);
            }
        }
    }

    #[test]
    fn test_overdue_invoice_with_recorded_payment() {
        // Overdue 20 days (bucket 16-30: 0.5 / 0.7 / 0.3), 300 of 500 outstanding
        let invoices = [Invoice {
            total: dec!(500),
            payment_status: PaymentStatus::Overdue,
            payment_due_date: date(2025, 2, 11),
            payment_date: None,
            payment_amount: Some(dec!(200)),
        }];
        let days = build_daily_series(&invoices, as_of(), 90);

        assert_eq!(days[14].expected, dec!(150.0));
        assert_eq!(days[14].optimistic, dec!(210.0));
        assert_eq!(days[14].pessimistic, dec!(90.0));
    }

    #[test]
    fn test_cancelled_invoice_keeps_only_upside() {
        let invoices = [Invoice {
            total: dec!(400),
            payment_status: PaymentStatus::Cancelled,
            payment_due_date: date(2025, 3, 8),
            payment_date: None,
            payment_amount: None,
        }];
        let days = build_daily_series(&invoices, as_of(), 90);

        assert_eq!(days[5].expected, Decimal::ZERO);
        assert_eq!(days[5].optimistic, dec!(40.00));
        assert_eq!(days[5].pessimistic, Decimal::ZERO);
    }

    #[test]
    fn test_paid_invoices_contribute_nothing() {
        let open = unpaid(dec!(1000), date(2025, 3, 13));
        let paid = Invoice {
            total: dec!(5000),
            payment_status: PaymentStatus::Paid,
            payment_due_date: date(2025, 3, 5),
            payment_date: Some(date(2025, 3, 4)),
            payment_amount: None,
        };
        let with_paid = build_daily_series(&[open.clone(), paid], as_of(), 90);
        let without = build_daily_series(&[open], as_of(), 90);
        assert_eq!(with_paid, without);
    }

    #[test]
    fn test_settlement_outside_horizon_is_dropped() {
        // Due on the first day past the window end
        let invoices = [unpaid(dec!(1000), date(2025, 3, 13))];
        let days = build_daily_series(&invoices, as_of(), 10);
        assert!(days.iter().all(|d| d.expected == Decimal::ZERO));

        // Due before the window start (unpaid settles on its due date)
        let invoices = [unpaid(dec!(1000), date(2025, 2, 20))];
        let days = build_daily_series(&invoices, as_of(), 10);
        assert!(days.iter().all(|d| d.expected == Decimal::ZERO));
    }

    #[test]
    fn test_settlement_on_last_horizon_day_is_kept() {
        let invoices = [unpaid(dec!(1000), date(2025, 3, 12))];
        let days = build_daily_series(&invoices, as_of(), 10);
        assert_eq!(days[9].expected, dec!(900.00));
    }

    #[test]
    fn test_same_day_contributions_accumulate() {
        let invoices = [
            unpaid(dec!(1000), date(2025, 3, 13)),
            unpaid(dec!(250), date(2025, 3, 13)),
        ];
        let days = build_daily_series(&invoices, as_of(), 90);
        assert_eq!(days[10].expected, dec!(1125.00));
    }

    #[test]
    fn test_running_totals_fold() {
        let invoices = [
            unpaid(dec!(100), date(2025, 3, 4)),
            unpaid(dec!(200), date(2025, 3, 6)),
        ];
        let mut days = build_daily_series(&invoices, as_of(), 5);
        accumulate_running_totals(&mut days);

        assert_eq!(days[0].cumulative_expected, Decimal::ZERO);
        assert_eq!(days[1].cumulative_expected, dec!(90.00));
        assert_eq!(days[2].cumulative_expected, dec!(90.00));
        assert_eq!(days[3].cumulative_expected, dec!(270.00));
        assert_eq!(days[4].cumulative_expected, dec!(270.00));
    }

    #[test]
    fn test_running_totals_non_decreasing() {
        let invoices = [
            unpaid(dec!(100), date(2025, 3, 4)),
            unpaid(dec!(900), date(2025, 3, 20)),
            Invoice {
                total: dec!(500),
                payment_status: PaymentStatus::Overdue,
                payment_due_date: date(2025, 2, 1),
                payment_date: None,
                payment_amount: None,
            },
        ];
        let mut days = build_daily_series(&invoices, as_of(), 60);
        accumulate_running_totals(&mut days);

        for pair in days.windows(2) {
            assert!(pair[0].cumulative_expected <= pair[1].cumulative_expected);
            assert!(pair[0].cumulative_optimistic <= pair[1].cumulative_optimistic);
            assert!(pair[0].cumulative_pessimistic <= pair[1].cumulative_pessimistic);
        }
    }
}
