use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use uuid::Uuid;

use crate::depreciation::DepreciationRecord;
use crate::disposal::DisposalOutcome;
use crate::money::MonetaryAmount;
use crate::utils::decimal_serde::decimal_serde_option;

use super::assets_constants::*;
use super::assets_errors::{AssetError, Result};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum AssetType {
    Tangible,
    Intangible,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum AssetCategory {
    Land,
    LandImprovements,
    Buildings,
    MachineryEquipment,
    Vehicles,
    Fixtures,
    OtherTangible,
    Leasehold,
    IntangibleRights,
    Patents,
    Goodwill,
    OrganizationCosts,
    ResearchDevelopment,
    Software,
    OtherIntangible,
}

impl AssetCategory {
    pub fn asset_type(&self) -> AssetType {
        match self {
            AssetCategory::Land
            | AssetCategory::LandImprovements
            | AssetCategory::Buildings
            | AssetCategory::MachineryEquipment
            | AssetCategory::Vehicles
            | AssetCategory::Fixtures
            | AssetCategory::OtherTangible
            | AssetCategory::Leasehold => AssetType::Tangible,
            _ => AssetType::Intangible,
        }
    }

    /// Chart-of-accounts group code for the category.
    pub fn account_group(&self) -> &'static str {
        match self {
            AssetCategory::Land => "250",
            AssetCategory::LandImprovements => "251",
            AssetCategory::Buildings => "252",
            AssetCategory::MachineryEquipment => "253",
            AssetCategory::Vehicles => "254",
            AssetCategory::Fixtures => "255",
            AssetCategory::OtherTangible => "256",
            AssetCategory::Leasehold => "264",
            AssetCategory::IntangibleRights => "260",
            AssetCategory::Patents => "261",
            AssetCategory::Goodwill => "262",
            AssetCategory::OrganizationCosts | AssetCategory::ResearchDevelopment => "263",
            AssetCategory::Software => "267",
            AssetCategory::OtherIntangible => DEFAULT_ACCOUNT_GROUP,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DepreciationMethod {
    StraightLine,
    DecliningBalance,
    DoubleDecliningBalance,
    SumOfYearsDigits,
    UnitsOfProduction,
    None,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PeriodGranularity {
    Monthly,
    Quarterly,
    Annually,
}

impl PeriodGranularity {
    pub fn periods_per_year(&self) -> u32 {
        match self {
            PeriodGranularity::Monthly => crate::constants::MONTHS_PER_YEAR,
            PeriodGranularity::Quarterly => crate::constants::QUARTERS_PER_YEAR,
            PeriodGranularity::Annually => 1,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum AssetStatus {
    Acquired,
    InService,
    UnderMaintenance,
    OutOfService,
    Disposed,
    Lost,
}

/// The fixed-asset aggregate: cost basis, depreciation state and lifecycle
/// status for one capital asset.
///
/// Every mutating operation validates first and only then applies its full
/// effect, so the aggregate invariants hold after each call:
/// net book value is always `cost_value - accumulated_depreciation` (it is
/// derived, never stored), accumulated depreciation stays within
/// `[0, cost_value - salvage_value]`, period keys are unique, and a
/// `Disposed` asset is read-only. All monetary fields share one currency
/// fixed at construction.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FixedAsset {
    id: String,
    code: String,
    name: String,
    description: Option<String>,
    asset_type: AssetType,
    category: AssetCategory,
    sub_category: Option<String>,
    account_group: String,
    acquisition_date: NaiveDate,
    in_service_date: Option<NaiveDate>,
    warranty_end_date: Option<NaiveDate>,
    acquisition_cost: MonetaryAmount,
    cost_value: MonetaryAmount,
    salvage_value: MonetaryAmount,
    accumulated_depreciation: MonetaryAmount,
    currency: String,
    method: DepreciationMethod,
    useful_life_years: u32,
    useful_life_months: u32,
    #[serde(default, with = "decimal_serde_option")]
    custom_rate: Option<Decimal>,
    period_granularity: PeriodGranularity,
    partial_year_proration: bool,
    #[serde(default, with = "decimal_serde_option")]
    total_expected_units: Option<Decimal>,
    depreciation_start_date: Option<NaiveDate>,
    last_depreciation_date: Option<NaiveDate>,
    depreciation_records: Vec<DepreciationRecord>,
    status: AssetStatus,
    disposal: Option<DisposalOutcome>,
    revaluation_amount: Option<MonetaryAmount>,
    last_revaluation_date: Option<NaiveDate>,
    notes: Option<String>,
}

impl FixedAsset {
    pub fn new(
        code: &str,
        name: &str,
        category: AssetCategory,
        acquisition_date: NaiveDate,
        acquisition_cost: MonetaryAmount,
        useful_life_years: u32,
        method: DepreciationMethod,
    ) -> Result<Self> {
        if code.trim().is_empty() {
            return Err(AssetError::InvalidConfiguration(
                "asset code is empty".to_string(),
            ));
        }
        if acquisition_cost.is_negative() {
            return Err(AssetError::InvalidAmount(format!(
                "acquisition cost {} is negative",
                acquisition_cost
            )));
        }
        if useful_life_years == 0 && method != DepreciationMethod::None {
            return Err(AssetError::InvalidConfiguration(
                "useful life must be at least one year".to_string(),
            ));
        }

        let currency = acquisition_cost.currency().to_string();
        let zero = MonetaryAmount::zero(&currency)?;

        Ok(FixedAsset {
            id: Uuid::new_v4().to_string(),
            code: code.trim().to_string(),
            name: name.trim().to_string(),
            description: None,
            asset_type: category.asset_type(),
            category,
            sub_category: None,
            account_group: category.account_group().to_string(),
            acquisition_date,
            in_service_date: None,
            warranty_end_date: None,
            cost_value: acquisition_cost.clone(),
            salvage_value: zero.clone(),
            accumulated_depreciation: zero,
            acquisition_cost,
            currency,
            method,
            useful_life_years,
            useful_life_months: useful_life_years * crate::constants::MONTHS_PER_YEAR,
            custom_rate: None,
            period_granularity: PeriodGranularity::Monthly,
            partial_year_proration: true,
            total_expected_units: None,
            depreciation_start_date: None,
            last_depreciation_date: None,
            depreciation_records: Vec::new(),
            status: AssetStatus::Acquired,
            disposal: None,
            revaluation_amount: None,
            last_revaluation_date: None,
            notes: None,
        })
    }

    // --- Factory constructors with customary useful lives ---

    pub fn machinery_equipment(
        code: &str,
        name: &str,
        acquisition_date: NaiveDate,
        acquisition_cost: MonetaryAmount,
    ) -> Result<Self> {
        Self::new(
            code,
            name,
            AssetCategory::MachineryEquipment,
            acquisition_date,
            acquisition_cost,
            DEFAULT_USEFUL_LIFE_MACHINERY_YEARS,
            DepreciationMethod::StraightLine,
        )
    }

    pub fn vehicle(
        code: &str,
        name: &str,
        acquisition_date: NaiveDate,
        acquisition_cost: MonetaryAmount,
    ) -> Result<Self> {
        Self::new(
            code,
            name,
            AssetCategory::Vehicles,
            acquisition_date,
            acquisition_cost,
            DEFAULT_USEFUL_LIFE_VEHICLE_YEARS,
            DepreciationMethod::StraightLine,
        )
    }

    pub fn fixture(
        code: &str,
        name: &str,
        acquisition_date: NaiveDate,
        acquisition_cost: MonetaryAmount,
    ) -> Result<Self> {
        Self::new(
            code,
            name,
            AssetCategory::Fixtures,
            acquisition_date,
            acquisition_cost,
            DEFAULT_USEFUL_LIFE_FIXTURE_YEARS,
            DepreciationMethod::StraightLine,
        )
    }

    pub fn building(
        code: &str,
        name: &str,
        acquisition_date: NaiveDate,
        acquisition_cost: MonetaryAmount,
    ) -> Result<Self> {
        Self::new(
            code,
            name,
            AssetCategory::Buildings,
            acquisition_date,
            acquisition_cost,
            DEFAULT_USEFUL_LIFE_BUILDING_YEARS,
            DepreciationMethod::StraightLine,
        )
    }

    pub fn software(
        code: &str,
        name: &str,
        acquisition_date: NaiveDate,
        acquisition_cost: MonetaryAmount,
    ) -> Result<Self> {
        Self::new(
            code,
            name,
            AssetCategory::Software,
            acquisition_date,
            acquisition_cost,
            DEFAULT_USEFUL_LIFE_SOFTWARE_YEARS,
            DepreciationMethod::StraightLine,
        )
    }

    // --- Accessors ---

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn asset_type(&self) -> AssetType {
        self.asset_type
    }

    pub fn category(&self) -> AssetCategory {
        self.category
    }

    pub fn sub_category(&self) -> Option<&str> {
        self.sub_category.as_deref()
    }

    pub fn account_group(&self) -> &str {
        &self.account_group
    }

    pub fn status(&self) -> AssetStatus {
        self.status
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn acquisition_date(&self) -> NaiveDate {
        self.acquisition_date
    }

    pub fn in_service_date(&self) -> Option<NaiveDate> {
        self.in_service_date
    }

    pub fn warranty_end_date(&self) -> Option<NaiveDate> {
        self.warranty_end_date
    }

    pub fn acquisition_cost(&self) -> &MonetaryAmount {
        &self.acquisition_cost
    }

    pub fn cost_value(&self) -> &MonetaryAmount {
        &self.cost_value
    }

    pub fn salvage_value(&self) -> &MonetaryAmount {
        &self.salvage_value
    }

    pub fn accumulated_depreciation(&self) -> &MonetaryAmount {
        &self.accumulated_depreciation
    }

    pub fn method(&self) -> DepreciationMethod {
        self.method
    }

    pub fn useful_life_years(&self) -> u32 {
        self.useful_life_years
    }

    pub fn useful_life_months(&self) -> u32 {
        self.useful_life_months
    }

    pub fn custom_rate(&self) -> Option<Decimal> {
        self.custom_rate
    }

    pub fn period_granularity(&self) -> PeriodGranularity {
        self.period_granularity
    }

    pub fn partial_year_proration(&self) -> bool {
        self.partial_year_proration
    }

    pub fn total_expected_units(&self) -> Option<Decimal> {
        self.total_expected_units
    }

    pub fn depreciation_start_date(&self) -> Option<NaiveDate> {
        self.depreciation_start_date
    }

    pub fn last_depreciation_date(&self) -> Option<NaiveDate> {
        self.last_depreciation_date
    }

    pub fn depreciation_records(&self) -> &[DepreciationRecord] {
        &self.depreciation_records
    }

    pub fn disposal(&self) -> Option<&DisposalOutcome> {
        self.disposal.as_ref()
    }

    pub fn revaluation_amount(&self) -> Option<&MonetaryAmount> {
        self.revaluation_amount.as_ref()
    }

    pub fn last_revaluation_date(&self) -> Option<NaiveDate> {
        self.last_revaluation_date
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    // --- Derived values ---

    /// Cost value minus accumulated depreciation. Derived on every call so
    /// the identity invariant cannot drift.
    pub fn net_book_value(&self) -> MonetaryAmount {
        MonetaryAmount::from_raw(
            self.cost_value.amount() - self.accumulated_depreciation.amount(),
            self.currency.clone(),
        )
    }

    /// Cost value minus salvage value, the ceiling for accumulated
    /// depreciation.
    pub fn depreciable_amount(&self) -> MonetaryAmount {
        MonetaryAmount::from_raw(
            self.cost_value.amount() - self.salvage_value.amount(),
            self.currency.clone(),
        )
    }

    pub fn is_fully_depreciated(&self) -> bool {
        self.accumulated_depreciation.amount() >= self.depreciable_amount().amount()
    }

    pub fn has_period(&self, period: &str) -> bool {
        self.depreciation_records.iter().any(|r| r.period == period)
    }

    // --- Metadata setters ---

    pub fn set_description(&mut self, description: Option<String>) -> Result<()> {
        self.ensure_not_disposed()?;
        self.description = description;
        Ok(())
    }

    pub fn set_sub_category(&mut self, sub_category: Option<String>) -> Result<()> {
        self.ensure_not_disposed()?;
        self.sub_category = sub_category;
        Ok(())
    }

    pub fn set_warranty_end_date(&mut self, warranty_end_date: Option<NaiveDate>) -> Result<()> {
        self.ensure_not_disposed()?;
        self.warranty_end_date = warranty_end_date;
        Ok(())
    }

    // --- Lifecycle transitions ---

    /// Places an acquired asset into service, which also anchors the
    /// depreciation start date.
    pub fn place_in_service(&mut self, date: NaiveDate) -> Result<()> {
        self.ensure_not_disposed()?;
        if self.status != AssetStatus::Acquired {
            return Err(AssetError::InvalidTransition {
                from: self.status,
                to: AssetStatus::InService,
            });
        }
        self.in_service_date = Some(date);
        self.depreciation_start_date = Some(date);
        self.status = AssetStatus::InService;
        Ok(())
    }

    pub fn mark_under_maintenance(&mut self) -> Result<()> {
        self.ensure_not_disposed()?;
        if self.status != AssetStatus::InService {
            return Err(AssetError::InvalidTransition {
                from: self.status,
                to: AssetStatus::UnderMaintenance,
            });
        }
        self.status = AssetStatus::UnderMaintenance;
        Ok(())
    }

    pub fn return_from_maintenance(&mut self) -> Result<()> {
        self.ensure_not_disposed()?;
        if self.status != AssetStatus::UnderMaintenance {
            return Err(AssetError::InvalidTransition {
                from: self.status,
                to: AssetStatus::InService,
            });
        }
        self.status = AssetStatus::InService;
        Ok(())
    }

    pub fn mark_out_of_service(&mut self) -> Result<()> {
        self.ensure_not_disposed()?;
        self.status = AssetStatus::OutOfService;
        Ok(())
    }

    pub fn mark_lost(&mut self) -> Result<()> {
        self.ensure_not_disposed()?;
        self.status = AssetStatus::Lost;
        Ok(())
    }

    /// Returns an out-of-service or lost asset to service. Requires that
    /// the asset was placed in service at some point.
    pub fn restore_to_service(&mut self) -> Result<()> {
        self.ensure_not_disposed()?;
        let allowed = matches!(
            self.status,
            AssetStatus::OutOfService | AssetStatus::Lost
        ) && self.in_service_date.is_some();
        if !allowed {
            return Err(AssetError::InvalidTransition {
                from: self.status,
                to: AssetStatus::InService,
            });
        }
        self.status = AssetStatus::InService;
        Ok(())
    }

    // --- Cost operations ---

    /// Capitalizes an addition (improvement, attachment) into the cost
    /// value. The amount must be strictly positive and in the asset
    /// currency.
    pub fn add_to_cost(&mut self, amount: &MonetaryAmount, description: &str) -> Result<()> {
        self.ensure_not_disposed()?;
        if !amount.is_positive() {
            return Err(AssetError::InvalidAmount(format!(
                "cost addition {} must be positive",
                amount
            )));
        }
        self.cost_value = self.cost_value.add(amount)?;
        self.append_note(&format!("Cost addition: {} - {}", amount, description));
        Ok(())
    }

    // --- Depreciation configuration ---

    pub fn set_salvage_value(&mut self, salvage_value: MonetaryAmount) -> Result<()> {
        self.ensure_not_disposed()?;
        self.ensure_asset_currency(&salvage_value)?;
        if salvage_value.is_negative() {
            return Err(AssetError::InvalidAmount(format!(
                "salvage value {} is negative",
                salvage_value
            )));
        }
        if salvage_value.amount() > self.cost_value.amount() {
            return Err(AssetError::InvalidConfiguration(format!(
                "salvage value {} exceeds cost value {}",
                salvage_value, self.cost_value
            )));
        }
        let new_depreciable = self.cost_value.amount() - salvage_value.amount();
        if !self.depreciation_records.is_empty()
            && self.accumulated_depreciation.amount() > new_depreciable
        {
            return Err(AssetError::ConfigurationLocked(format!(
                "accumulated depreciation {} already exceeds the depreciable amount \
                 implied by salvage value {}",
                self.accumulated_depreciation, salvage_value
            )));
        }
        self.salvage_value = salvage_value;
        Ok(())
    }

    pub fn set_depreciation_method(
        &mut self,
        method: DepreciationMethod,
        useful_life_years: u32,
        custom_rate: Option<Decimal>,
    ) -> Result<()> {
        self.ensure_not_disposed()?;
        if useful_life_years == 0 && method != DepreciationMethod::None {
            return Err(AssetError::InvalidConfiguration(
                "useful life must be at least one year".to_string(),
            ));
        }
        if let Some(rate) = custom_rate {
            if rate <= Decimal::ZERO || rate > Decimal::ONE {
                return Err(AssetError::InvalidConfiguration(format!(
                    "custom depreciation rate {} must be within (0, 1]",
                    rate
                )));
            }
        }
        self.method = method;
        self.useful_life_years = useful_life_years;
        self.useful_life_months = useful_life_years * crate::constants::MONTHS_PER_YEAR;
        self.custom_rate = custom_rate;
        Ok(())
    }

    pub fn set_depreciation_period(&mut self, granularity: PeriodGranularity) -> Result<()> {
        self.ensure_not_disposed()?;
        self.period_granularity = granularity;
        Ok(())
    }

    pub fn set_partial_year_proration(&mut self, enabled: bool) -> Result<()> {
        self.ensure_not_disposed()?;
        self.partial_year_proration = enabled;
        Ok(())
    }

    pub fn set_total_expected_units(&mut self, units: Decimal) -> Result<()> {
        self.ensure_not_disposed()?;
        if units <= Decimal::ZERO {
            return Err(AssetError::InvalidConfiguration(format!(
                "total expected units {} must be positive",
                units
            )));
        }
        self.total_expected_units = Some(units);
        Ok(())
    }

    // --- Depreciation state (crate-internal mutation points) ---

    /// Appends a calculated record and rolls accumulated depreciation
    /// forward in one step. Validation happens before any field is touched,
    /// so a partially applied posting is impossible.
    pub(crate) fn post_depreciation(&mut self, record: DepreciationRecord) -> Result<()> {
        self.ensure_not_disposed()?;
        if self.has_period(&record.period) {
            return Err(AssetError::DuplicatePeriod {
                period: record.period.clone(),
            });
        }
        self.ensure_asset_currency(&record.depreciation_amount)?;
        if !record.depreciation_amount.is_positive() {
            return Err(AssetError::InvalidAmount(format!(
                "depreciation amount {} must be positive",
                record.depreciation_amount
            )));
        }
        let new_accumulated = self.accumulated_depreciation.add(&record.depreciation_amount)?;
        let depreciable = self.depreciable_amount();
        if new_accumulated.amount() > depreciable.amount() {
            return Err(AssetError::BelowSalvageFloor {
                accumulated: new_accumulated.amount(),
                depreciable: depreciable.amount(),
            });
        }

        self.accumulated_depreciation = new_accumulated;
        self.last_depreciation_date = Some(record.period_end);
        self.depreciation_records.push(record);
        Ok(())
    }

    /// Hand-off point for the external journal-posting step: flips
    /// `is_posted` on the record for `period`. Permitted on disposed assets
    /// since the final catch-up record may be posted after disposal.
    pub fn mark_posted(&mut self, period: &str) -> Result<()> {
        let record = self
            .depreciation_records
            .iter_mut()
            .find(|r| r.period == period)
            .ok_or_else(|| AssetError::PeriodNotFound {
                period: period.to_string(),
            })?;
        record.is_posted = true;
        Ok(())
    }

    // --- Revaluation / disposal (crate-internal mutation points) ---

    pub(crate) fn apply_revaluation(
        &mut self,
        new_cost_value: MonetaryAmount,
        revaluation_amount: MonetaryAmount,
        reason: Option<&str>,
        as_of: NaiveDate,
    ) -> Result<()> {
        self.ensure_not_disposed()?;
        self.ensure_asset_currency(&new_cost_value)?;
        let new_depreciable = new_cost_value.amount() - self.salvage_value.amount();
        if self.accumulated_depreciation.amount() > new_depreciable {
            return Err(AssetError::BelowSalvageFloor {
                accumulated: self.accumulated_depreciation.amount(),
                depreciable: new_depreciable,
            });
        }
        self.cost_value = new_cost_value;
        self.revaluation_amount = Some(revaluation_amount);
        self.last_revaluation_date = Some(as_of);
        if let Some(reason) = reason {
            self.append_note(&format!("Revaluation: {}", reason));
        }
        Ok(())
    }

    pub(crate) fn apply_disposal(&mut self, outcome: DisposalOutcome) -> Result<()> {
        self.ensure_not_disposed()?;
        self.status = AssetStatus::Disposed;
        self.disposal = Some(outcome);
        Ok(())
    }

    // --- Internal helpers ---

    fn ensure_not_disposed(&self) -> Result<()> {
        if self.status == AssetStatus::Disposed {
            return Err(AssetError::AssetDisposed {
                code: self.code.clone(),
            });
        }
        Ok(())
    }

    fn ensure_asset_currency(&self, amount: &MonetaryAmount) -> Result<()> {
        if amount.currency() != self.currency {
            return Err(AssetError::Money(crate::money::MoneyError::CurrencyMismatch {
                left: self.currency.clone(),
                right: amount.currency().to_string(),
            }));
        }
        Ok(())
    }

    fn append_note(&mut self, note: &str) {
        match &mut self.notes {
            Some(existing) => {
                existing.push('\n');
                existing.push_str(note);
            }
            None => self.notes = Some(note.to_string()),
        }
    }
}
