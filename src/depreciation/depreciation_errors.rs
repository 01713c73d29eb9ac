use thiserror::Error;

use crate::assets::AssetError;
use crate::money::MoneyError;

// --- Define Result Type ---
pub type Result<T> = std::result::Result<T, DepreciationError>;

/// Custom error type for depreciation schedule calculations
#[derive(Error, Debug)]
pub enum DepreciationError {
    #[error("Asset '{code}' is disposed; no further depreciation is possible")]
    AssetDisposed { code: String },
    #[error("Asset '{code}' is already fully depreciated")]
    AlreadyFullyDepreciated { code: String },
    #[error("A depreciation record for period '{period}' already exists")]
    DuplicatePeriod { period: String },
    #[error("Asset '{code}' has no in-service date")]
    MissingInServiceDate { code: String },
    #[error("Computed depreciation for period '{period}' is zero or negative")]
    ZeroOrNegativeResult { period: String },
    #[error("Units-of-production depreciation requires a units-consumed input for the period")]
    MissingUsageInput,
    #[error("Invalid depreciation configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),
    #[error("Monetary error: {0}")]
    Money(#[from] MoneyError),
}
