use chrono::NaiveDate;
use log::{debug, error};

use crate::assets::{AssetStatus, FixedAsset};
use crate::money::MonetaryAmount;

use super::revaluation_errors::{RevaluationError, Result};
use super::revaluation_model::RevaluationOutcome;

/// Adjusts an asset's carrying value to an externally appraised figure.
///
/// The difference is absorbed into the cost value while accumulated
/// depreciation stays untouched, so the net book value lands exactly on
/// the target and the depreciation schedule remains consistent going
/// forward.
#[derive(Default, Debug, Clone)]
pub struct RevaluationProcessor {}

impl RevaluationProcessor {
    pub fn new() -> Self {
        RevaluationProcessor {}
    }

    pub fn revalue(
        &self,
        asset: &mut FixedAsset,
        new_net_book_value: MonetaryAmount,
        reason: Option<&str>,
        as_of: NaiveDate,
    ) -> Result<RevaluationOutcome> {
        if asset.status() == AssetStatus::Disposed {
            return Err(RevaluationError::AssetDisposed {
                code: asset.code().to_string(),
            });
        }
        if new_net_book_value.currency() != asset.currency() {
            error!(
                "Rejected revaluation of asset {}: currency {} differs from asset currency {}",
                asset.code(),
                new_net_book_value.currency(),
                asset.currency()
            );
            return Err(RevaluationError::Money(
                crate::money::MoneyError::CurrencyMismatch {
                    left: asset.currency().to_string(),
                    right: new_net_book_value.currency().to_string(),
                },
            ));
        }
        if new_net_book_value.amount() < asset.salvage_value().amount() {
            error!(
                "Rejected revaluation of asset {}: target {} is below salvage {}",
                asset.code(),
                new_net_book_value,
                asset.salvage_value()
            );
            return Err(RevaluationError::InvalidRevaluation {
                new_net_book_value: new_net_book_value.amount(),
                salvage_value: asset.salvage_value().amount(),
            });
        }

        let previous_net_book_value = asset.net_book_value();
        let revaluation_amount = new_net_book_value.subtract(&previous_net_book_value)?;
        // Holding accumulated depreciation fixed, the cost value that
        // yields the target net book value:
        let new_cost_value = new_net_book_value.add(asset.accumulated_depreciation())?;

        debug!(
            "Revaluing asset {} on {}: net book value {} -> {}, cost value {} -> {}",
            asset.code(),
            as_of,
            previous_net_book_value,
            new_net_book_value,
            asset.cost_value(),
            new_cost_value
        );

        asset.apply_revaluation(
            new_cost_value.clone(),
            revaluation_amount.clone(),
            reason,
            as_of,
        )?;

        Ok(RevaluationOutcome {
            asset_id: asset.id().to_string(),
            revaluation_date: as_of,
            previous_net_book_value,
            new_net_book_value,
            revaluation_amount,
            new_cost_value,
            reason: reason.map(|r| r.to_string()),
        })
    }
}
