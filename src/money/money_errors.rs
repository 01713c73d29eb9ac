use thiserror::Error;

// --- Define Result Type ---
pub type Result<T> = std::result::Result<T, MoneyError>;

/// Custom error type for monetary value operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: {left} vs {right}")]
    CurrencyMismatch { left: String, right: String },
    #[error("Invalid monetary amount: {0}")]
    InvalidAmount(String),
}
