use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::MonetaryAmount;
use crate::utils::decimal_serde::decimal_serde;

/// One calculated depreciation period for an asset.
///
/// A record is produced by the schedule calculator as a pure preview; it
/// only becomes part of the asset's history when the caller applies it.
/// `is_posted` stays `false` until the external journal-posting step flips
/// it via `FixedAsset::mark_posted`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DepreciationRecord {
    pub id: String,
    pub asset_id: String,
    /// Canonical period key, e.g. "2024-03", "2024-Q1" or "2024".
    pub period: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub depreciation_amount: MonetaryAmount,
    pub accumulated_depreciation_after: MonetaryAmount,
    pub net_book_value_after: MonetaryAmount,
    pub is_posted: bool,
    pub calculation_date: NaiveDate,
}

/// Caller-supplied metering input for units-of-production depreciation.
/// The engine does not track usage itself.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PeriodUsage {
    #[serde(with = "decimal_serde")]
    pub units_consumed: Decimal,
}

impl PeriodUsage {
    pub fn new(units_consumed: Decimal) -> Self {
        PeriodUsage { units_consumed }
    }
}
