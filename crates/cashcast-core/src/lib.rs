pub mod error;
pub mod forecast;
pub mod types;

pub use error::CashcastError;
pub use types::*;

/// Standard result type for all cashcast operations
pub type CashcastResult<T> = Result<T, CashcastError>;
