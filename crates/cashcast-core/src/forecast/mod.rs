//! Cash flow forecasting engine.
//!
//! Turns a snapshot of outstanding invoices into a probabilistic projection
//! of future cash inflows over a bounded horizon:
//! - Per-invoice payment likelihood conditioned on status and overdue depth
//! - A predicted settlement date per open invoice
//! - A daily series of probability-weighted inflows with running totals
//! - Weekly and monthly re-bucketings of the same series
//! - Six headline summary metrics for dashboard KPIs
//!
//! The engine is stateless and synchronous: one call, one result, no clock
//! reads (the reference date is an explicit input) and no I/O. Calling it
//! twice with the same input yields identical output.
//!
//! All monetary arithmetic uses `rust_decimal::Decimal`. No `f64`.

pub mod aggregate;
pub mod probability;
pub mod series;
pub mod settlement;
pub mod summary;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{with_metadata, ComputationOutput, Currency, Invoice, Money, PaymentStatus};
use crate::{CashcastError, CashcastResult};

pub use probability::{payment_probability, PaymentProbability};
pub use settlement::{days_overdue, predicted_settlement_date};
pub use summary::CashFlowSummary;

/// Horizon applied when the caller does not specify one.
pub const DEFAULT_HORIZON_DAYS: u32 = 90;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

/// Input for one forecast run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastInput {
    /// Invoice snapshot to project. Paid invoices are tolerated and skipped.
    pub invoices: Vec<Invoice>,
    /// Reference date treated as "today". Passed in rather than read from a
    /// clock so identical inputs always produce identical forecasts.
    pub as_of: NaiveDate,
    /// Number of future calendar days to project, starting at `as_of`.
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,
    /// Currency all amounts are denominated in. Tag only; no conversion.
    #[serde(default)]
    pub currency: Currency,
}

fn default_horizon_days() -> u32 {
    DEFAULT_HORIZON_DAYS
}

/// One calendar day (or aggregated week/month) of projected inflows.
///
/// Per-period scenario amounts plus the running totals through this period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowDataPoint {
    /// Day the amounts fall on; for aggregated periods, the first day.
    pub date: NaiveDate,
    pub expected: Money,
    pub optimistic: Money,
    pub pessimistic: Money,
    pub cumulative_expected: Money,
    pub cumulative_optimistic: Money,
    pub cumulative_pessimistic: Money,
}

impl CashFlowDataPoint {
    pub fn zeroed(date: NaiveDate) -> Self {
        CashFlowDataPoint {
            date,
            expected: Decimal::ZERO,
            optimistic: Decimal::ZERO,
            pessimistic: Decimal::ZERO,
            cumulative_expected: Decimal::ZERO,
            cumulative_optimistic: Decimal::ZERO,
            cumulative_pessimistic: Decimal::ZERO,
        }
    }
}

/// The forecast: three chronological series over the same horizon plus the
/// headline summary. Owned by the caller; the engine keeps nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowPrediction {
    pub currency: Currency,
    pub daily_data: Vec<CashFlowDataPoint>,
    pub weekly_data: Vec<CashFlowDataPoint>,
    pub monthly_data: Vec<CashFlowDataPoint>,
    pub summary: CashFlowSummary,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Run the forecast pipeline over an invoice snapshot.
///
/// Builds the daily series (one point per horizon day), folds in running
/// totals, re-buckets weekly and monthly, and derives the summary. The run
/// is deterministic for a given input; a zero-day horizon yields empty
/// series and a zeroed summary.
pub fn forecast_cash_flow(input: &ForecastInput) -> CashcastResult<CashFlowPrediction> {
    validate_input(input)?;

    let mut daily_data = series::build_daily_series(&input.invoices, input.as_of, input.horizon_days);
    series::accumulate_running_totals(&mut daily_data);

    let weekly_data = aggregate::aggregate_weekly(&daily_data);
    let monthly_data = aggregate::aggregate_monthly(&daily_data);
    let summary = summary::summarize(&daily_data);

    Ok(CashFlowPrediction {
        currency: input.currency.clone(),
        daily_data,
        weekly_data,
        monthly_data,
        summary,
    })
}

/// Like [`forecast_cash_flow`], wrapped in the standard computation envelope
/// with methodology, assumptions, and warnings.
///
/// Warns about open invoices whose predicted settlement falls outside the
/// horizon; their amounts are excluded from every series (the window drops
/// rather than clamps), which is easy to misread as missing data.
pub fn forecast_with_metadata(
    input: &ForecastInput,
) -> CashcastResult<ComputationOutput<CashFlowPrediction>> {
    let start = std::time::Instant::now();

    let mut warnings = Vec::new();
    let dropped = count_settling_outside_horizon(input);
    if dropped > 0 {
        warnings.push(format!(
            "{} open invoice(s) are predicted to settle outside the {}-day horizon \
             and are excluded from the projection.",
            dropped, input.horizon_days
        ));
    }

    let prediction = forecast_cash_flow(input)?;

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "partial_settlement_lag_days": settlement::PARTIAL_SETTLEMENT_LAG_DAYS,
        "overdue_settlement_lag_days": settlement::OVERDUE_SETTLEMENT_LAG_DAYS,
        "out_of_horizon_contributions": "dropped",
        "paid_invoices": "skipped",
    });

    Ok(with_metadata(
        "Probability-weighted settlement-date allocation",
        &assumptions,
        warnings,
        elapsed,
        prediction,
    ))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn validate_input(input: &ForecastInput) -> CashcastResult<()> {
    for (i, invoice) in input.invoices.iter().enumerate() {
        if invoice.total < Decimal::ZERO {
            return Err(CashcastError::InvalidInput {
                field: format!("invoices[{i}].total"),
                reason: "Invoice total cannot be negative.".into(),
            });
        }
        if let Some(paid) = invoice.payment_amount {
            if paid < Decimal::ZERO {
                return Err(CashcastError::InvalidInput {
                    field: format!("invoices[{i}].payment_amount"),
                    reason: "Payment amount cannot be negative.".into(),
                });
            }
            if paid > invoice.total {
                return Err(CashcastError::InvalidInput {
                    field: format!("invoices[{i}].payment_amount"),
                    reason: "Payment amount cannot exceed the invoice total.".into(),
                });
            }
        }
    }
    Ok(())
}

fn count_settling_outside_horizon(input: &ForecastInput) -> usize {
    input
        .invoices
        .iter()
        .filter(|invoice| invoice.payment_status != PaymentStatus::Paid)
        .filter(|invoice| {
            let offset =
                (predicted_settlement_date(invoice, input.as_of) - input.as_of).num_days();
            offset < 0 || offset >= i64::from(input.horizon_days)
        })
        .count()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
