use chrono::{Datelike, NaiveDate};

use crate::assets::PeriodGranularity;

/// One calendar depreciation period: canonical key plus inclusive date
/// bounds. Keys are unique per asset and granularity, which is what makes
/// period application idempotent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    pub key: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    /// Derives the period containing `as_of` for the given granularity.
    pub fn containing(as_of: NaiveDate, granularity: PeriodGranularity) -> Period {
        let year = as_of.year();
        match granularity {
            PeriodGranularity::Monthly => {
                let month = as_of.month();
                Period {
                    key: format!("{:04}-{:02}", year, month),
                    start: ymd(year, month, 1),
                    end: month_end(year, month),
                }
            }
            PeriodGranularity::Quarterly => {
                let quarter = (as_of.month() - 1) / 3 + 1;
                let start_month = (quarter - 1) * 3 + 1;
                Period {
                    key: format!("{:04}-Q{}", year, quarter),
                    start: ymd(year, start_month, 1),
                    end: month_end(year, start_month + 2),
                }
            }
            PeriodGranularity::Annually => Period {
                key: format!("{:04}", year),
                start: ymd(year, 1, 1),
                end: ymd(year, 12, 31),
            },
        }
    }

    pub fn total_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Inclusive day count from `date` through the period end.
    pub fn days_from(&self, date: NaiveDate) -> i64 {
        if !self.contains(date) {
            return 0;
        }
        (self.end - date).num_days() + 1
    }

    /// Inclusive day count from the period start through `date`.
    pub fn days_through(&self, date: NaiveDate) -> i64 {
        if !self.contains(date) {
            return 0;
        }
        (date - self.start).num_days() + 1
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

fn month_end(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    ymd(next_year, next_month, 1)
        .pred_opt()
        .expect("valid calendar date")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::PeriodGranularity;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_monthly_period_key_and_bounds() {
        let period = Period::containing(date("2024-03-15"), PeriodGranularity::Monthly);
        assert_eq!(period.key, "2024-03");
        assert_eq!(period.start, date("2024-03-01"));
        assert_eq!(period.end, date("2024-03-31"));
        assert_eq!(period.total_days(), 31);
    }

    #[test]
    fn test_february_leap_year() {
        let period = Period::containing(date("2024-02-10"), PeriodGranularity::Monthly);
        assert_eq!(period.end, date("2024-02-29"));
        assert_eq!(period.total_days(), 29);
    }

    #[test]
    fn test_quarterly_period_keys() {
        let q1 = Period::containing(date("2024-01-05"), PeriodGranularity::Quarterly);
        assert_eq!(q1.key, "2024-Q1");
        assert_eq!(q1.start, date("2024-01-01"));
        assert_eq!(q1.end, date("2024-03-31"));

        let q4 = Period::containing(date("2024-11-30"), PeriodGranularity::Quarterly);
        assert_eq!(q4.key, "2024-Q4");
        assert_eq!(q4.start, date("2024-10-01"));
        assert_eq!(q4.end, date("2024-12-31"));
    }

    #[test]
    fn test_annual_period() {
        let period = Period::containing(date("2024-06-01"), PeriodGranularity::Annually);
        assert_eq!(period.key, "2024");
        assert_eq!(period.total_days(), 366);
    }

    #[test]
    fn test_day_counts_are_inclusive() {
        let period = Period::containing(date("2024-03-01"), PeriodGranularity::Monthly);
        assert_eq!(period.days_from(date("2024-03-16")), 16);
        assert_eq!(period.days_through(date("2024-03-16")), 16);
        assert_eq!(period.days_from(date("2024-04-01")), 0);
    }
}
