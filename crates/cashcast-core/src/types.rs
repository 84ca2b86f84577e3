use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Probabilities and rates expressed as decimals (0.80 = 80%). Never as percentages.
pub type Rate = Decimal;

/// Currency code
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    GBP,
    USD,
    #[default]
    EUR,
    CHF,
    JPY,
    CAD,
    AUD,
    HKD,
    SGD,
    Other(String),
}

/// Settlement state of an invoice as recorded by the document store.
///
/// `Other` absorbs status strings this engine does not know about; the
/// probability model gives them a neutral fallback row instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    Unpaid,
    Partial,
    Paid,
    Overdue,
    Cancelled,
    Other(String),
}

/// An outstanding (or settled) invoice as supplied by the invoice source.
///
/// Read-only snapshot for one forecast run. The engine never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Amount owed. Non-negative.
    pub total: Money,
    /// Settlement state at the time of the snapshot.
    pub payment_status: PaymentStatus,
    /// Date the amount was contractually due.
    pub payment_due_date: NaiveDate,
    /// Date actually paid. Recorded only for paid invoices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
    /// Amount already received. At most `total`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_amount: Option<Money>,
}

impl Invoice {
    /// Unpaid balance: `total` less any recorded payment.
    pub fn remaining_amount(&self) -> Money {
        self.total - self.payment_amount.unwrap_or(Decimal::ZERO)
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
