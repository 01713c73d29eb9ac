pub mod assets_constants;
pub mod assets_errors;
pub mod assets_model;

// Re-export the main public entry points and types
pub use assets_errors::{AssetError, Result};
pub use assets_model::{
    AssetCategory, AssetStatus, AssetType, DepreciationMethod, FixedAsset, PeriodGranularity,
};
