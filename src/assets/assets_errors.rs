use rust_decimal::Decimal;
use thiserror::Error;

use crate::money::MoneyError;

use super::assets_model::AssetStatus;

// --- Define Result Type ---
pub type Result<T> = std::result::Result<T, AssetError>;

/// Custom error type for fixed-asset aggregate operations
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Asset '{code}' is disposed and can no longer be modified")]
    AssetDisposed { code: String },
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("A depreciation record for period '{period}' already exists")]
    DuplicatePeriod { period: String },
    #[error("No depreciation record found for period '{period}'")]
    PeriodNotFound { period: String },
    #[error("Invalid status transition from {from:?} to {to:?}")]
    InvalidTransition { from: AssetStatus, to: AssetStatus },
    #[error("Configuration change rejected: {0}")]
    ConfigurationLocked(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error(
        "Posting would depreciate below the salvage floor: \
         accumulated {accumulated} exceeds depreciable {depreciable}"
    )]
    BelowSalvageFloor {
        accumulated: Decimal,
        depreciable: Decimal,
    },
    #[error("Monetary error: {0}")]
    Money(#[from] MoneyError),
}
