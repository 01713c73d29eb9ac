// Tests for the ScheduleCalculator: method formulas, proration, clamping
// and period idempotence.

use crate::assets::{
    AssetCategory, DepreciationMethod, FixedAsset, PeriodGranularity,
};
use crate::depreciation::{DepreciationError, PeriodUsage, ScheduleCalculator};
use crate::disposal::DisposalProcessor;
use crate::money::MonetaryAmount;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn usd(amount: Decimal) -> MonetaryAmount {
    MonetaryAmount::new(amount, "USD").unwrap()
}

/// 120,000 cost, 20,000 salvage, five-year monthly straight line, in
/// service on the first day of 2024 so the opening period is a full one.
fn straight_line_machine() -> FixedAsset {
    let mut asset = FixedAsset::new(
        "MACH-100",
        "Injection molder",
        AssetCategory::MachineryEquipment,
        date("2023-12-20"),
        usd(dec!(120000)),
        5,
        DepreciationMethod::StraightLine,
    )
    .unwrap();
    asset.set_salvage_value(usd(dec!(20000))).unwrap();
    asset.place_in_service(date("2024-01-01")).unwrap();
    asset
}

/// 10,000 cost, 1,000 salvage, five-year annual schedule.
fn annual_asset(method: DepreciationMethod) -> FixedAsset {
    let mut asset = FixedAsset::new(
        "VEH-100",
        "Delivery truck",
        AssetCategory::Vehicles,
        date("2019-12-01"),
        usd(dec!(10000)),
        5,
        method,
    )
    .unwrap();
    asset.set_salvage_value(usd(dec!(1000))).unwrap();
    asset
        .set_depreciation_period(PeriodGranularity::Annually)
        .unwrap();
    asset.place_in_service(date("2020-01-01")).unwrap();
    asset
}

#[test]
fn test_straight_line_monthly_amount() {
    let asset = straight_line_machine();
    let calculator = ScheduleCalculator::new();

    let record = calculator
        .preview_period(&asset, date("2024-01-31"), None)
        .unwrap();
    assert_eq!(record.period, "2024-01");
    assert_eq!(record.period_start, date("2024-01-01"));
    assert_eq!(record.period_end, date("2024-01-31"));
    // (120,000 - 20,000) / (5 * 12)
    assert_eq!(record.depreciation_amount.amount(), dec!(1666.67));
    assert_eq!(record.accumulated_depreciation_after.amount(), dec!(1666.67));
    assert_eq!(record.net_book_value_after.amount(), dec!(118333.33));
    assert!(!record.is_posted);
    assert_eq!(record.calculation_date, date("2024-01-31"));
}

#[test]
fn test_preview_is_pure() {
    let asset = straight_line_machine();
    let calculator = ScheduleCalculator::new();

    calculator
        .preview_period(&asset, date("2024-01-31"), None)
        .unwrap();
    calculator
        .preview_period(&asset, date("2024-01-31"), None)
        .unwrap();

    assert_eq!(asset.accumulated_depreciation().amount(), dec!(0));
    assert!(asset.depreciation_records().is_empty());
    assert!(asset.last_depreciation_date().is_none());
}

#[test]
fn test_apply_period_is_idempotent_per_period_key() {
    let mut asset = straight_line_machine();
    let calculator = ScheduleCalculator::new();

    calculator
        .apply_period(&mut asset, date("2024-01-31"), None)
        .unwrap();
    let second = calculator.apply_period(&mut asset, date("2024-01-15"), None);

    match second {
        Err(DepreciationError::DuplicatePeriod { period }) => assert_eq!(period, "2024-01"),
        other => panic!("expected duplicate period, got {:?}", other),
    }
    // State reflects the first application only.
    assert_eq!(asset.depreciation_records().len(), 1);
    assert_eq!(asset.accumulated_depreciation().amount(), dec!(1666.67));
}

#[test]
fn test_straight_line_terminates_at_salvage_floor() {
    let mut asset = straight_line_machine();
    let calculator = ScheduleCalculator::new();

    for month_index in 0..60u32 {
        let year = 2024 + (month_index / 12) as i32;
        let month = month_index % 12 + 1;
        let as_of = NaiveDate::from_ymd_opt(year, month, 28).unwrap();
        calculator.apply_period(&mut asset, as_of, None).unwrap();
    }

    assert_eq!(asset.accumulated_depreciation().amount(), dec!(100000.00));
    assert_eq!(asset.net_book_value().amount(), dec!(20000.00));
    assert!(asset.is_fully_depreciated());

    // The final period absorbs the rounding drift of the previous 59.
    let last = asset.depreciation_records().last().unwrap();
    assert_eq!(last.depreciation_amount.amount(), dec!(1666.47));

    let next = calculator.apply_period(&mut asset, date("2029-01-31"), None);
    assert!(matches!(
        next,
        Err(DepreciationError::AlreadyFullyDepreciated { .. })
    ));
}

#[test]
fn test_missing_in_service_date() {
    let asset = FixedAsset::new(
        "MACH-101",
        "Unplaced asset",
        AssetCategory::MachineryEquipment,
        date("2024-01-01"),
        usd(dec!(50000)),
        5,
        DepreciationMethod::StraightLine,
    )
    .unwrap();
    let calculator = ScheduleCalculator::new();

    let result = calculator.preview_period(&asset, date("2024-06-30"), None);
    assert!(matches!(
        result,
        Err(DepreciationError::MissingInServiceDate { .. })
    ));
}

#[test]
fn test_disposed_asset_rejects_depreciation() {
    let mut asset = straight_line_machine();
    DisposalProcessor::new()
        .scrap(&mut asset, date("2024-06-15"), "storm damage")
        .unwrap();

    let calculator = ScheduleCalculator::new();
    let result = calculator.preview_period(&asset, date("2024-07-31"), None);
    assert!(matches!(result, Err(DepreciationError::AssetDisposed { .. })));
}

#[test]
fn test_method_none_reports_fully_depreciated() {
    let mut asset = FixedAsset::new(
        "LAND-100",
        "Plot 12",
        AssetCategory::Land,
        date("2024-01-01"),
        usd(dec!(500000)),
        0,
        DepreciationMethod::None,
    )
    .unwrap();
    asset.place_in_service(date("2024-01-01")).unwrap();

    let calculator = ScheduleCalculator::new();
    let result = calculator.preview_period(&asset, date("2024-12-31"), None);
    assert!(matches!(
        result,
        Err(DepreciationError::AlreadyFullyDepreciated { .. })
    ));
}

#[test]
fn test_double_declining_balance_with_salvage_clamp() {
    let mut asset = annual_asset(DepreciationMethod::DoubleDecliningBalance);
    let calculator = ScheduleCalculator::new();

    // Rate = 2/5 = 0.4 on the opening net book value each year.
    let expected = [
        dec!(4000.00), // 10,000 * 0.4
        dec!(2400.00), // 6,000 * 0.4
        dec!(1440.00), // 3,600 * 0.4
        dec!(864.00),  // 2,160 * 0.4
        dec!(296.00),  // clamped: raw 518.40 would cross the salvage floor
    ];
    for (i, expected_amount) in expected.iter().enumerate() {
        let as_of = NaiveDate::from_ymd_opt(2020 + i as i32, 12, 31).unwrap();
        let record = calculator.apply_period(&mut asset, as_of, None).unwrap();
        assert_eq!(record.depreciation_amount.amount(), *expected_amount);
    }

    assert_eq!(asset.accumulated_depreciation().amount(), dec!(9000.00));
    assert_eq!(asset.net_book_value().amount(), dec!(1000.00));
    assert!(asset.is_fully_depreciated());
}

#[test]
fn test_declining_balance_custom_rate_overrides() {
    let mut asset = annual_asset(DepreciationMethod::DecliningBalance);
    asset
        .set_depreciation_method(DepreciationMethod::DecliningBalance, 5, Some(dec!(0.3)))
        .unwrap();
    let calculator = ScheduleCalculator::new();

    let record = calculator
        .preview_period(&asset, date("2020-12-31"), None)
        .unwrap();
    assert_eq!(record.depreciation_amount.amount(), dec!(3000.00));
}

#[test]
fn test_sum_of_years_digits_weights() {
    let mut asset = annual_asset(DepreciationMethod::SumOfYearsDigits);
    let calculator = ScheduleCalculator::new();

    // Year 1: 5/15 of 9,000; year 2: 4/15.
    let first = calculator
        .apply_period(&mut asset, date("2020-12-31"), None)
        .unwrap();
    assert_eq!(first.depreciation_amount.amount(), dec!(3000.00));

    let second = calculator
        .apply_period(&mut asset, date("2021-12-31"), None)
        .unwrap();
    assert_eq!(second.depreciation_amount.amount(), dec!(2400.00));
}

#[test]
fn test_units_of_production_uses_caller_usage() {
    let mut asset = annual_asset(DepreciationMethod::UnitsOfProduction);
    asset.set_total_expected_units(dec!(90000)).unwrap();
    let calculator = ScheduleCalculator::new();

    // 9,000 / 90,000 = 0.10 per unit.
    let record = calculator
        .preview_period(
            &asset,
            date("2020-12-31"),
            Some(&PeriodUsage::new(dec!(1234))),
        )
        .unwrap();
    assert_eq!(record.depreciation_amount.amount(), dec!(123.40));
}

#[test]
fn test_units_of_production_requires_usage() {
    let mut asset = annual_asset(DepreciationMethod::UnitsOfProduction);
    asset.set_total_expected_units(dec!(90000)).unwrap();
    let calculator = ScheduleCalculator::new();

    let result = calculator.preview_period(&asset, date("2020-12-31"), None);
    assert!(matches!(result, Err(DepreciationError::MissingUsageInput)));
}

#[test]
fn test_units_of_production_zero_usage_is_flagged() {
    let mut asset = annual_asset(DepreciationMethod::UnitsOfProduction);
    asset.set_total_expected_units(dec!(90000)).unwrap();
    let calculator = ScheduleCalculator::new();

    let result = calculator.preview_period(
        &asset,
        date("2020-12-31"),
        Some(&PeriodUsage::new(dec!(0))),
    );
    assert!(matches!(
        result,
        Err(DepreciationError::ZeroOrNegativeResult { .. })
    ));
}

#[test]
fn test_units_of_production_requires_expected_units_config() {
    let asset = annual_asset(DepreciationMethod::UnitsOfProduction);
    let calculator = ScheduleCalculator::new();

    let result = calculator.preview_period(
        &asset,
        date("2020-12-31"),
        Some(&PeriodUsage::new(dec!(100))),
    );
    assert!(matches!(
        result,
        Err(DepreciationError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_first_period_is_prorated_from_in_service_date() {
    let mut asset = FixedAsset::new(
        "MACH-102",
        "Mid-month machine",
        AssetCategory::MachineryEquipment,
        date("2024-03-01"),
        usd(dec!(120000)),
        5,
        DepreciationMethod::StraightLine,
    )
    .unwrap();
    asset.set_salvage_value(usd(dec!(20000))).unwrap();
    asset.place_in_service(date("2024-03-16")).unwrap();
    let calculator = ScheduleCalculator::new();

    // 16 of 31 days in service: 1,666.67 * 16/31.
    let record = calculator
        .preview_period(&asset, date("2024-03-31"), None)
        .unwrap();
    assert_eq!(record.depreciation_amount.amount(), dec!(860.22));

    // The following period is whole again.
    calculator
        .apply_period(&mut asset, date("2024-03-31"), None)
        .unwrap();
    let april = calculator
        .preview_period(&asset, date("2024-04-30"), None)
        .unwrap();
    assert_eq!(april.depreciation_amount.amount(), dec!(1666.67));
}

#[test]
fn test_proration_disabled_takes_full_period() {
    let mut asset = FixedAsset::new(
        "MACH-103",
        "No-proration machine",
        AssetCategory::MachineryEquipment,
        date("2024-03-01"),
        usd(dec!(120000)),
        5,
        DepreciationMethod::StraightLine,
    )
    .unwrap();
    asset.set_salvage_value(usd(dec!(20000))).unwrap();
    asset.set_partial_year_proration(false).unwrap();
    asset.place_in_service(date("2024-03-16")).unwrap();
    let calculator = ScheduleCalculator::new();

    let record = calculator
        .preview_period(&asset, date("2024-03-31"), None)
        .unwrap();
    assert_eq!(record.depreciation_amount.amount(), dec!(1666.67));
}

#[test]
fn test_quarterly_granularity() {
    let mut asset = straight_line_machine();
    asset
        .set_depreciation_period(PeriodGranularity::Quarterly)
        .unwrap();
    let calculator = ScheduleCalculator::new();

    let record = calculator
        .preview_period(&asset, date("2024-05-15"), None)
        .unwrap();
    assert_eq!(record.period, "2024-Q2");
    // (120,000 - 20,000) / (5 * 4)
    assert_eq!(record.depreciation_amount.amount(), dec!(5000.00));
}
