use chrono::{Local, NaiveDate};
use clap::Args;
use serde::Deserialize;
use serde_json::Value;

use cashcast_core::forecast::{self, ForecastInput, DEFAULT_HORIZON_DAYS};
use cashcast_core::{Currency, Invoice, PaymentStatus};

use crate::input;

/// Payload accepted from a file or stdin.
///
/// `as_of` and `horizon_days` are optional here: command-line flags win,
/// then the payload, then the defaults (current local date, 90 days).
#[derive(Deserialize)]
pub struct ForecastRequest {
    pub invoices: Vec<Invoice>,
    pub as_of: Option<NaiveDate>,
    pub horizon_days: Option<u32>,
    pub currency: Option<Currency>,
}

/// Arguments for a full cash flow forecast
#[derive(Args)]
pub struct ForecastArgs {
    /// Path to a JSON or YAML invoice file
    #[arg(long)]
    pub input: Option<String>,

    /// Reference date treated as "today" (YYYY-MM-DD); defaults to the current date
    #[arg(long)]
    pub as_of: Option<NaiveDate>,

    /// Forecast horizon in days
    #[arg(long)]
    pub horizon: Option<u32>,
}

/// Arguments for the summary-only forecast
#[derive(Args)]
pub struct SummaryArgs {
    /// Path to a JSON or YAML invoice file
    #[arg(long)]
    pub input: Option<String>,

    /// Reference date treated as "today" (YYYY-MM-DD); defaults to the current date
    #[arg(long)]
    pub as_of: Option<NaiveDate>,

    /// Forecast horizon in days
    #[arg(long)]
    pub horizon: Option<u32>,
}

/// Arguments for a probability-table lookup
#[derive(Args)]
pub struct ProbabilityArgs {
    /// Payment status (unpaid, partial, paid, overdue, cancelled, or any custom status)
    #[arg(long)]
    pub status: String,

    /// Whole days past due; negative when not yet due
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub days_overdue: i64,
}

pub fn run_forecast(args: ForecastArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input = resolve_input(args.input.as_deref(), args.as_of, args.horizon)?;
    let output = forecast::forecast_with_metadata(&input)?;
    Ok(serde_json::to_value(output)?)
}

pub fn run_summary(args: SummaryArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input = resolve_input(args.input.as_deref(), args.as_of, args.horizon)?;
    let prediction = forecast::forecast_cash_flow(&input)?;
    Ok(serde_json::to_value(prediction.summary)?)
}

pub fn run_probability(args: ProbabilityArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let status = parse_status(&args.status);
    let probability = forecast::payment_probability(&status, args.days_overdue);
    Ok(serde_json::to_value(probability)?)
}

fn resolve_input(
    path: Option<&str>,
    as_of_flag: Option<NaiveDate>,
    horizon_flag: Option<u32>,
) -> Result<ForecastInput, Box<dyn std::error::Error>> {
    let request: ForecastRequest = if let Some(path) = path {
        input::file::read_request(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file.json|file.yaml> or piped stdin required for a forecast".into());
    };

    let as_of = as_of_flag
        .or(request.as_of)
        .unwrap_or_else(|| Local::now().date_naive());
    let horizon_days = horizon_flag
        .or(request.horizon_days)
        .unwrap_or(DEFAULT_HORIZON_DAYS);

    Ok(ForecastInput {
        invoices: request.invoices,
        as_of,
        horizon_days,
        currency: request.currency.unwrap_or_default(),
    })
}

/// Map a user-supplied status string onto the engine's status type.
/// Unknown strings are passed through; the engine gives them its fallback row.
fn parse_status(raw: &str) -> PaymentStatus {
    match raw.to_ascii_lowercase().as_str() {
        "unpaid" => PaymentStatus::Unpaid,
        "partial" => PaymentStatus::Partial,
        "paid" => PaymentStatus::Paid,
        "overdue" => PaymentStatus::Overdue,
        "cancelled" | "canceled" => PaymentStatus::Cancelled,
        _ => PaymentStatus::Other(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_known_values() {
        assert_eq!(parse_status("unpaid"), PaymentStatus::Unpaid);
        assert_eq!(parse_status("Overdue"), PaymentStatus::Overdue);
        assert_eq!(parse_status("canceled"), PaymentStatus::Cancelled);
    }

    #[test]
    fn test_parse_status_unknown_passthrough() {
        assert_eq!(
            parse_status("disputed"),
            PaymentStatus::Other("disputed".into())
        );
    }
}
