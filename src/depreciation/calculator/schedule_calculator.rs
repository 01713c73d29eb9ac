use chrono::NaiveDate;
use log::{debug, warn};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::assets::{AssetStatus, DepreciationMethod, FixedAsset};
use crate::money::MonetaryAmount;

use super::method_handlers;
use super::period::Period;
use crate::depreciation::depreciation_errors::{DepreciationError, Result};
use crate::depreciation::depreciation_model::{DepreciationRecord, PeriodUsage};

/// Computes one period's depreciation for a fixed asset.
///
/// `preview_period` is pure and leaves the asset untouched;
/// `apply_period` additionally posts the record to the asset, updating the
/// accumulated depreciation and last depreciation date in the same step.
/// A period key can be applied at most once per asset.
#[derive(Default, Debug, Clone)]
pub struct ScheduleCalculator {}

impl ScheduleCalculator {
    pub fn new() -> Self {
        ScheduleCalculator {}
    }

    /// Calculates the depreciation record for the period containing
    /// `as_of` without mutating the asset.
    ///
    /// `usage` carries the period's units consumed and is only required for
    /// units-of-production assets.
    pub fn preview_period(
        &self,
        asset: &FixedAsset,
        as_of: NaiveDate,
        usage: Option<&PeriodUsage>,
    ) -> Result<DepreciationRecord> {
        self.compute(asset, as_of, usage, None)
    }

    /// Calculates and atomically posts the period: the record is appended
    /// and the asset totals are rolled forward together, or nothing
    /// happens at all.
    pub fn apply_period(
        &self,
        asset: &mut FixedAsset,
        as_of: NaiveDate,
        usage: Option<&PeriodUsage>,
    ) -> Result<DepreciationRecord> {
        let record = self.compute(asset, as_of, usage, None)?;
        asset.post_depreciation(record.clone())?;
        Ok(record)
    }

    /// Posts a final, partial period through `through` (inclusive). Used by
    /// the disposal flow to catch up depreciation to the disposal date.
    /// Returns `Ok(None)` when the disposal period has nothing left to
    /// post (already recorded, fully depreciated, or a zero result).
    pub(crate) fn apply_partial_period(
        &self,
        asset: &mut FixedAsset,
        through: NaiveDate,
    ) -> Result<Option<DepreciationRecord>> {
        match self.compute(asset, through, None, Some(through)) {
            Ok(record) => {
                asset.post_depreciation(record.clone())?;
                Ok(Some(record))
            }
            Err(DepreciationError::AlreadyFullyDepreciated { .. })
            | Err(DepreciationError::DuplicatePeriod { .. })
            | Err(DepreciationError::ZeroOrNegativeResult { .. })
            | Err(DepreciationError::MissingInServiceDate { .. })
            | Err(DepreciationError::MissingUsageInput) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn compute(
        &self,
        asset: &FixedAsset,
        as_of: NaiveDate,
        usage: Option<&PeriodUsage>,
        prorate_through: Option<NaiveDate>,
    ) -> Result<DepreciationRecord> {
        if asset.status() == AssetStatus::Disposed {
            return Err(DepreciationError::AssetDisposed {
                code: asset.code().to_string(),
            });
        }
        if asset.method() == DepreciationMethod::None {
            // Non-depreciating assets report as fully depreciated up front.
            return Err(DepreciationError::AlreadyFullyDepreciated {
                code: asset.code().to_string(),
            });
        }
        let in_service =
            asset
                .in_service_date()
                .ok_or_else(|| DepreciationError::MissingInServiceDate {
                    code: asset.code().to_string(),
                })?;
        if asset.is_fully_depreciated() {
            return Err(DepreciationError::AlreadyFullyDepreciated {
                code: asset.code().to_string(),
            });
        }

        let period = Period::containing(as_of, asset.period_granularity());
        if asset.has_period(&period.key) {
            return Err(DepreciationError::DuplicatePeriod {
                period: period.key.clone(),
            });
        }

        debug!(
            "Calculating {:?} depreciation for asset {} period {}",
            asset.method(),
            asset.code(),
            period.key
        );

        let raw = method_handlers::periodic_amount(asset, as_of, usage)?;
        let prorated = self.prorate(asset, &period, in_service, prorate_through, raw);

        // Clamp so accumulated depreciation never passes the salvage floor.
        let remaining =
            asset.depreciable_amount().amount() - asset.accumulated_depreciation().amount();
        let clamped = if prorated > remaining {
            warn!(
                "Depreciation for asset {} period {} clamped from {} to remaining {}",
                asset.code(),
                period.key,
                prorated,
                remaining
            );
            remaining
        } else {
            prorated
        };

        let depreciation_amount = MonetaryAmount::new(clamped, asset.currency())?;
        if !depreciation_amount.is_positive() {
            return Err(DepreciationError::ZeroOrNegativeResult {
                period: period.key.clone(),
            });
        }

        let accumulated_after = asset
            .accumulated_depreciation()
            .add(&depreciation_amount)?;
        let net_book_value_after = asset.cost_value().subtract(&accumulated_after)?;

        Ok(DepreciationRecord {
            id: Uuid::new_v4().to_string(),
            asset_id: asset.id().to_string(),
            period: period.key,
            period_start: period.start,
            period_end: period.end,
            depreciation_amount,
            accumulated_depreciation_after: accumulated_after,
            net_book_value_after,
            is_posted: false,
            calculation_date: as_of,
        })
    }

    /// Partial-period scaling by days in service within the period. The
    /// first period prorates from the in-service date; a disposal prorates
    /// through the disposal date instead. Units-of-production amounts are
    /// already usage-scaled and never prorated.
    fn prorate(
        &self,
        asset: &FixedAsset,
        period: &Period,
        in_service: NaiveDate,
        prorate_through: Option<NaiveDate>,
        raw: Decimal,
    ) -> Decimal {
        if !asset.partial_year_proration()
            || asset.method() == DepreciationMethod::UnitsOfProduction
            || raw.is_zero()
        {
            return raw;
        }
        let total_days = Decimal::from(period.total_days());

        if let Some(through) = prorate_through {
            let from = if period.contains(in_service) {
                in_service
            } else {
                period.start
            };
            let days = (through - from).num_days() + 1;
            if days <= 0 {
                return Decimal::ZERO;
            }
            let days = Decimal::from(days.min(period.total_days()));
            return raw * days / total_days;
        }

        if period.contains(in_service) && in_service > period.start {
            let days = Decimal::from(period.days_from(in_service));
            return raw * days / total_days;
        }

        raw
    }
}
