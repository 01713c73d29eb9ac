pub mod money_errors;
pub mod money_model;

// Re-export the main public entry points and types
pub use money_errors::{MoneyError, Result};
pub use money_model::MonetaryAmount;
