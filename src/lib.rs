pub mod constants;
pub mod utils;

pub mod assets;
pub mod depreciation;
pub mod disposal;
pub mod money;
pub mod revaluation;

pub mod errors;

pub use errors::{Error, Result};
pub use assets::*;
pub use money::MonetaryAmount;
pub use depreciation::{DepreciationRecord, PeriodUsage, ScheduleCalculator};
pub use disposal::{DisposalOutcome, DisposalProcessor, DisposalType};
pub use revaluation::{RevaluationOutcome, RevaluationProcessor};
