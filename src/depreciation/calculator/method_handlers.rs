// Per-method periodic amount functions. Each returns the raw amount for
// one full period at the asset's configured granularity; proration and the
// salvage-floor clamp are applied by the schedule calculator.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::assets::{DepreciationMethod, FixedAsset};
use crate::depreciation::depreciation_errors::{DepreciationError, Result};
use crate::depreciation::depreciation_model::PeriodUsage;

pub(super) fn periodic_amount(
    asset: &FixedAsset,
    as_of: NaiveDate,
    usage: Option<&PeriodUsage>,
) -> Result<Decimal> {
    let periods_per_year = Decimal::from(asset.period_granularity().periods_per_year());
    match asset.method() {
        DepreciationMethod::StraightLine => straight_line(asset, periods_per_year),
        DepreciationMethod::DecliningBalance => {
            declining_balance(asset, Decimal::ONE, periods_per_year)
        }
        DepreciationMethod::DoubleDecliningBalance => {
            declining_balance(asset, Decimal::TWO, periods_per_year)
        }
        DepreciationMethod::SumOfYearsDigits => {
            sum_of_years_digits(asset, as_of, periods_per_year)
        }
        DepreciationMethod::UnitsOfProduction => units_of_production(asset, usage),
        // Callers reject DepreciationMethod::None before dispatching here.
        DepreciationMethod::None => Ok(Decimal::ZERO),
    }
}

fn useful_life_years(asset: &FixedAsset) -> Result<Decimal> {
    if asset.useful_life_years() == 0 {
        return Err(DepreciationError::InvalidConfiguration(format!(
            "asset '{}' has no useful life configured",
            asset.code()
        )));
    }
    Ok(Decimal::from(asset.useful_life_years()))
}

/// Constant periodic amount: depreciable amount spread evenly over the
/// useful life at the configured granularity.
fn straight_line(asset: &FixedAsset, periods_per_year: Decimal) -> Result<Decimal> {
    let years = useful_life_years(asset)?;
    let depreciable = asset.depreciable_amount().amount();
    Ok(depreciable / (years * periods_per_year))
}

/// Rate applied to the opening net book value. The annual rate is
/// `factor / useful_life_years` unless a custom rate overrides it.
fn declining_balance(
    asset: &FixedAsset,
    factor: Decimal,
    periods_per_year: Decimal,
) -> Result<Decimal> {
    let annual_rate = match asset.custom_rate() {
        Some(rate) => rate,
        None => factor / useful_life_years(asset)?,
    };
    let opening_net_book_value = asset.net_book_value().amount();
    Ok(opening_net_book_value * annual_rate / periods_per_year)
}

/// Weight for the asset's current year of life is
/// `remaining_years / (n * (n + 1) / 2)`, applied to the depreciable
/// amount and spread over the sub-year periods of that year.
fn sum_of_years_digits(
    asset: &FixedAsset,
    as_of: NaiveDate,
    periods_per_year: Decimal,
) -> Result<Decimal> {
    let in_service = asset
        .in_service_date()
        .ok_or_else(|| DepreciationError::MissingInServiceDate {
            code: asset.code().to_string(),
        })?;
    let years = useful_life_years(asset)?;
    let elapsed = Decimal::from(elapsed_whole_years(in_service, as_of));
    let remaining = years - elapsed;
    if remaining <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }
    let sum_of_years = years * (years + Decimal::ONE) / Decimal::TWO;
    let depreciable = asset.depreciable_amount().amount();
    Ok(depreciable * remaining / sum_of_years / periods_per_year)
}

/// Per-unit amount times the caller-reported consumption for the period.
fn units_of_production(asset: &FixedAsset, usage: Option<&PeriodUsage>) -> Result<Decimal> {
    let total_units = asset.total_expected_units().ok_or_else(|| {
        DepreciationError::InvalidConfiguration(format!(
            "asset '{}' has no total expected units configured",
            asset.code()
        ))
    })?;
    if total_units <= Decimal::ZERO {
        return Err(DepreciationError::InvalidConfiguration(format!(
            "asset '{}' total expected units must be positive",
            asset.code()
        )));
    }
    let usage = usage.ok_or(DepreciationError::MissingUsageInput)?;
    let depreciable = asset.depreciable_amount().amount();
    Ok(depreciable / total_units * usage.units_consumed)
}

/// Whole anniversary years elapsed between two dates.
fn elapsed_whole_years(from: NaiveDate, to: NaiveDate) -> i32 {
    if to <= from {
        return 0;
    }
    let mut years = to.year() - from.year();
    if (to.month(), to.day()) < (from.month(), from.day()) {
        years -= 1;
    }
    years.max(0)
}
