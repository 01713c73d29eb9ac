pub mod revaluation_errors;
pub mod revaluation_model;
pub mod revaluation_processor;

// Re-export the main public entry points and types
pub use revaluation_errors::{Result, RevaluationError};
pub use revaluation_model::RevaluationOutcome;
pub use revaluation_processor::RevaluationProcessor;
