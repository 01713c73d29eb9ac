use thiserror::Error;

use crate::assets::AssetError;
use crate::depreciation::DepreciationError;
use crate::disposal::DisposalError;
use crate::money::MoneyError;
use crate::revaluation::RevaluationError;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the valuation engine
#[derive(Error, Debug)]
pub enum Error {
    #[error("Monetary operation failed: {0}")]
    Money(#[from] MoneyError),

    #[error("Asset operation failed: {0}")]
    Asset(#[from] AssetError),

    #[error("Depreciation error: {0}")]
    Depreciation(#[from] DepreciationError),

    #[error("Disposal error: {0}")]
    Disposal(#[from] DisposalError),

    #[error("Revaluation error: {0}")]
    Revaluation(#[from] RevaluationError),
}
