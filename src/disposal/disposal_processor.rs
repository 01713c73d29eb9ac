use chrono::NaiveDate;
use log::{debug, error};

use crate::assets::{AssetStatus, DepreciationMethod, FixedAsset};
use crate::depreciation::ScheduleCalculator;
use crate::money::MonetaryAmount;

use super::disposal_errors::{DisposalError, Result};
use super::disposal_model::{DisposalOutcome, DisposalType};

/// Processes the terminal transition of an asset.
///
/// All flows converge on a single finalize step: validate, catch up the
/// disposal period's depreciation when proration is enabled, compute the
/// realized gain or loss against net book value, then mark the asset
/// disposed exactly once.
#[derive(Default, Debug, Clone)]
pub struct DisposalProcessor {}

impl DisposalProcessor {
    pub fn new() -> Self {
        DisposalProcessor {}
    }

    /// Sale to a buyer. Requires a positive sale amount;
    /// `gain_loss = sale_amount - net_book_value`.
    pub fn sell(
        &self,
        asset: &mut FixedAsset,
        disposal_date: NaiveDate,
        sale_amount: MonetaryAmount,
        buyer: Option<String>,
        invoice_reference: Option<String>,
    ) -> Result<DisposalOutcome> {
        if !sale_amount.is_positive() {
            error!(
                "Rejected sale of asset {}: non-positive sale amount {}",
                asset.code(),
                sale_amount
            );
            return Err(DisposalError::InvalidSaleAmount(format!(
                "{} must be positive",
                sale_amount
            )));
        }
        self.finalize(
            asset,
            DisposalType::Sale,
            disposal_date,
            Some(sale_amount),
            buyer,
            invoice_reference,
            None,
        )
    }

    /// Write-off with no proceeds: the full net book value is realized as
    /// a loss.
    pub fn scrap(
        &self,
        asset: &mut FixedAsset,
        disposal_date: NaiveDate,
        reason: &str,
    ) -> Result<DisposalOutcome> {
        self.finalize(
            asset,
            DisposalType::Scrap,
            disposal_date,
            None,
            None,
            None,
            Some(reason.to_string()),
        )
    }

    /// Custody change to another entity. No gain or loss is recognized.
    pub fn transfer(
        &self,
        asset: &mut FixedAsset,
        disposal_date: NaiveDate,
        target: &str,
        reason: Option<String>,
    ) -> Result<DisposalOutcome> {
        self.finalize(
            asset,
            DisposalType::Transfer,
            disposal_date,
            None,
            Some(target.to_string()),
            None,
            reason,
        )
    }

    /// Generic disposal for the remaining types (donation, loss or theft,
    /// insurance claim). With a sale amount the gain/loss follows the sale
    /// formula, otherwise the net book value is written off.
    pub fn dispose(
        &self,
        asset: &mut FixedAsset,
        disposal_type: DisposalType,
        disposal_date: NaiveDate,
        sale_amount: Option<MonetaryAmount>,
        reason: Option<String>,
    ) -> Result<DisposalOutcome> {
        match disposal_type {
            DisposalType::Sale => {
                let sale_amount = sale_amount.ok_or(DisposalError::SaleAmountRequired)?;
                self.sell(asset, disposal_date, sale_amount, None, None)
            }
            DisposalType::Transfer => {
                self.finalize(asset, disposal_type, disposal_date, None, None, None, reason)
            }
            _ => self.finalize(
                asset,
                disposal_type,
                disposal_date,
                sale_amount,
                None,
                None,
                reason,
            ),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn finalize(
        &self,
        asset: &mut FixedAsset,
        disposal_type: DisposalType,
        disposal_date: NaiveDate,
        sale_amount: Option<MonetaryAmount>,
        counterparty: Option<String>,
        invoice_reference: Option<String>,
        reason: Option<String>,
    ) -> Result<DisposalOutcome> {
        if asset.status() == AssetStatus::Disposed {
            return Err(DisposalError::AlreadyDisposed {
                code: asset.code().to_string(),
            });
        }
        if disposal_date < asset.acquisition_date() {
            return Err(DisposalError::DisposalDateBeforeAcquisition {
                disposal_date,
                acquisition_date: asset.acquisition_date(),
            });
        }
        if let Some(sale) = &sale_amount {
            if sale.currency() != asset.currency() {
                error!(
                    "Rejected disposal of asset {}: sale currency {} differs from asset currency {}",
                    asset.code(),
                    sale.currency(),
                    asset.currency()
                );
                return Err(DisposalError::Money(
                    crate::money::MoneyError::CurrencyMismatch {
                        left: asset.currency().to_string(),
                        right: sale.currency().to_string(),
                    },
                ));
            }
        }

        // Catch up the disposal period, prorated through the disposal date.
        if asset.partial_year_proration() && asset.method() != DepreciationMethod::None {
            if let Some(record) =
                ScheduleCalculator::new().apply_partial_period(asset, disposal_date)?
            {
                debug!(
                    "Posted final partial period {} of {} for asset {} before disposal",
                    record.period,
                    record.depreciation_amount,
                    asset.code()
                );
            }
        }

        let net_book_value = asset.net_book_value();
        let gain_loss = match (&disposal_type, &sale_amount) {
            (DisposalType::Transfer, _) => MonetaryAmount::zero(asset.currency())?,
            (_, Some(sale)) => sale.subtract(&net_book_value)?,
            (_, None) => net_book_value.negate(),
        };

        debug!(
            "Disposing asset {} as {:?} on {}: net book value {}, gain/loss {}",
            asset.code(),
            disposal_type,
            disposal_date,
            net_book_value,
            gain_loss
        );

        let outcome = DisposalOutcome {
            disposal_type,
            disposal_date,
            sale_amount,
            net_book_value_at_disposal: net_book_value,
            gain_loss,
            counterparty,
            invoice_reference,
            reason,
        };
        asset.apply_disposal(outcome.clone())?;
        Ok(outcome)
    }
}
