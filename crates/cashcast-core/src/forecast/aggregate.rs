//! Weekly and monthly re-bucketing of the daily series.
//!
//! Per-period scenario amounts are summed across the days of the period;
//! cumulative fields carry the last day's running totals, so they stay
//! consistent with the daily series instead of being re-summed.

use chrono::{Datelike, Weekday};

use super::CashFlowDataPoint;

/// Weekly buckets. A new week opens on every Monday and on the first day of
/// the series, so a mid-week horizon start yields a short leading week.
/// Each bucket is anchored to its first day's date.
pub fn aggregate_weekly(daily: &[CashFlowDataPoint]) -> Vec<CashFlowDataPoint> {
    let mut weekly: Vec<CashFlowDataPoint> = Vec::new();

    for (i, day) in daily.iter().enumerate() {
        if i == 0 || day.date.weekday() == Weekday::Mon {
            weekly.push(CashFlowDataPoint::zeroed(day.date));
        }
        if let Some(bucket) = weekly.last_mut() {
            fold_day(bucket, day);
        }
    }

    weekly
}

/// Monthly buckets. A new month opens whenever the year-month key changes
/// from the previous day. Same sum / cumulative-carry rule as weekly.
pub fn aggregate_monthly(daily: &[CashFlowDataPoint]) -> Vec<CashFlowDataPoint> {
    let mut monthly: Vec<CashFlowDataPoint> = Vec::new();
    let mut current_month: Option<(i32, u32)> = None;

    for day in daily {
        let key = (day.date.year(), day.date.month());
        if current_month != Some(key) {
            monthly.push(CashFlowDataPoint::zeroed(day.date));
            current_month = Some(key);
        }
        if let Some(bucket) = monthly.last_mut() {
            fold_day(bucket, day);
        }
    }

    monthly
}

fn fold_day(bucket: &mut CashFlowDataPoint, day: &CashFlowDataPoint) {
    bucket.expected += day.expected;
    bucket.optimistic += day.optimistic;
    bucket.pessimistic += day.pessimistic;
    // Carried, not summed: the period ends where its last day's totals stand
    bucket.cumulative_expected = day.cumulative_expected;
    bucket.cumulative_optimistic = day.cumulative_optimistic;
    bucket.cumulative_pessimistic = day.cumulative_pessimistic;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
