//! Headline metrics over the daily series.

use serde::{Deserialize, Serialize};

use super::CashFlowDataPoint;
use crate::types::Money;

/// Six headline scalars driving the forecast dashboard KPIs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashFlowSummary {
    /// Expected inflow over the full horizon.
    pub total_expected: Money,
    /// Expected inflow over the first 30 days (the full horizon if shorter).
    pub next_30_days: Money,
    /// Expected inflow over the first 60 days.
    pub next_60_days: Money,
    /// Expected inflow over the first 90 days.
    pub next_90_days: Money,
    /// Spread between the optimistic and pessimistic scenarios; a measure
    /// of forecast uncertainty.
    pub risk_amount: Money,
    /// Pessimistic-scenario total: the conservative floor.
    pub high_probability_amount: Money,
}

/// Single pass over the daily series. Total for any series, including an
/// empty one (all zeros).
pub fn summarize(daily: &[CashFlowDataPoint]) -> CashFlowSummary {
    let mut summary = CashFlowSummary::default();

    for (i, day) in daily.iter().enumerate() {
        summary.total_expected += day.expected;
        if i < 30 {
            summary.next_30_days += day.expected;
        }
        if i < 60 {
            summary.next_60_days += day.expected;
        }
        if i < 90 {
            summary.next_90_days += day.expected;
        }
        summary.risk_amount += day.optimistic - day.pessimistic;
        summary.high_probability_amount += day.pessimistic;
    }

    summary
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
