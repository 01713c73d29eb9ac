use chrono::NaiveDate;
use thiserror::Error;

use crate::assets::AssetError;
use crate::depreciation::DepreciationError;
use crate::money::MoneyError;

// --- Define Result Type ---
pub type Result<T> = std::result::Result<T, DisposalError>;

/// Custom error type for disposal processing
#[derive(Error, Debug)]
pub enum DisposalError {
    #[error("Asset '{code}' is already disposed")]
    AlreadyDisposed { code: String },
    #[error(
        "Disposal date {disposal_date} precedes the acquisition date {acquisition_date}"
    )]
    DisposalDateBeforeAcquisition {
        disposal_date: NaiveDate,
        acquisition_date: NaiveDate,
    },
    #[error("A sale disposal requires a sale amount")]
    SaleAmountRequired,
    #[error("Invalid sale amount: {0}")]
    InvalidSaleAmount(String),
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),
    #[error("Depreciation error: {0}")]
    Depreciation(#[from] DepreciationError),
    #[error("Monetary error: {0}")]
    Money(#[from] MoneyError),
}
