use rust_decimal::Decimal;
use thiserror::Error;

use crate::assets::AssetError;
use crate::money::MoneyError;

// --- Define Result Type ---
pub type Result<T> = std::result::Result<T, RevaluationError>;

/// Custom error type for revaluation processing
#[derive(Error, Debug)]
pub enum RevaluationError {
    #[error("Asset '{code}' is disposed and cannot be revalued")]
    AssetDisposed { code: String },
    #[error(
        "Invalid revaluation: new net book value {new_net_book_value} is below \
         the salvage value {salvage_value}"
    )]
    InvalidRevaluation {
        new_net_book_value: Decimal,
        salvage_value: Decimal,
    },
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),
    #[error("Monetary error: {0}")]
    Money(#[from] MoneyError),
}
