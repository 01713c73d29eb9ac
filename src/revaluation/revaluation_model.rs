use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::money::MonetaryAmount;

/// The audit record of one revaluation: where the carrying value stood,
/// where it was moved, and the cost value that absorbed the difference.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RevaluationOutcome {
    pub asset_id: String,
    pub revaluation_date: NaiveDate,
    pub previous_net_book_value: MonetaryAmount,
    pub new_net_book_value: MonetaryAmount,
    /// Signed difference; negative for a write-down.
    pub revaluation_amount: MonetaryAmount,
    pub new_cost_value: MonetaryAmount,
    pub reason: Option<String>,
}
