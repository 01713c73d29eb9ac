pub mod calculator;
pub mod depreciation_errors;
pub mod depreciation_model;

// Re-export the main public entry points and types
pub use calculator::{Period, ScheduleCalculator};
pub use depreciation_errors::{DepreciationError, Result};
pub use depreciation_model::{DepreciationRecord, PeriodUsage};
