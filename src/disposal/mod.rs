pub mod disposal_errors;
pub mod disposal_model;
pub mod disposal_processor;

// Re-export the main public entry points and types
pub use disposal_errors::{DisposalError, Result};
pub use disposal_model::{DisposalOutcome, DisposalType};
pub use disposal_processor::DisposalProcessor;
