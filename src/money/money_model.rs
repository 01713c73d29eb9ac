use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::MONETARY_DECIMAL_PRECISION;
use crate::utils::decimal_serde::decimal_serde;

use super::money_errors::{MoneyError, Result};

/// A currency-tagged exact decimal amount.
///
/// Arithmetic between two amounts requires identical currencies and uses
/// checked decimal operations. The stored amount is rounded to accounting
/// precision (two fractional digits, midpoint away from zero); callers doing
/// intermediate math keep full `Decimal` precision and build a
/// `MonetaryAmount` once at the boundary.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MonetaryAmount {
    #[serde(with = "decimal_serde")]
    amount: Decimal,
    currency: String,
}

impl MonetaryAmount {
    pub fn new(amount: Decimal, currency: &str) -> Result<Self> {
        let currency = currency.trim();
        if currency.is_empty() {
            return Err(MoneyError::InvalidAmount(
                "currency code is empty".to_string(),
            ));
        }
        Ok(MonetaryAmount {
            amount: round_monetary(amount),
            currency: currency.to_uppercase(),
        })
    }

    pub fn zero(currency: &str) -> Result<Self> {
        Self::new(Decimal::ZERO, currency)
    }

    /// Parses a decimal string into a monetary amount.
    pub fn parse(amount: &str, currency: &str) -> Result<Self> {
        let parsed = Decimal::from_str(amount)
            .map_err(|e| MoneyError::InvalidAmount(format!("'{}': {}", amount, e)))?;
        Self::new(parsed, currency)
    }

    /// Internal constructor for values whose currency and precision are
    /// already guaranteed by an aggregate invariant.
    pub(crate) fn from_raw(amount: Decimal, currency: String) -> Self {
        MonetaryAmount { amount, currency }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn add(&self, other: &MonetaryAmount) -> Result<Self> {
        self.ensure_same_currency(other)?;
        let sum = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| MoneyError::InvalidAmount("addition overflow".to_string()))?;
        Ok(MonetaryAmount {
            amount: round_monetary(sum),
            currency: self.currency.clone(),
        })
    }

    pub fn subtract(&self, other: &MonetaryAmount) -> Result<Self> {
        self.ensure_same_currency(other)?;
        let diff = self
            .amount
            .checked_sub(other.amount)
            .ok_or_else(|| MoneyError::InvalidAmount("subtraction overflow".to_string()))?;
        Ok(MonetaryAmount {
            amount: round_monetary(diff),
            currency: self.currency.clone(),
        })
    }

    /// Scales the amount by a plain ratio. There is no second currency
    /// involved, so this never mismatches.
    pub fn scale_by_ratio(&self, ratio: Decimal) -> Result<Self> {
        let scaled = self
            .amount
            .checked_mul(ratio)
            .ok_or_else(|| MoneyError::InvalidAmount("multiplication overflow".to_string()))?;
        Ok(MonetaryAmount {
            amount: round_monetary(scaled),
            currency: self.currency.clone(),
        })
    }

    pub fn negate(&self) -> Self {
        MonetaryAmount {
            amount: -self.amount,
            currency: self.currency.clone(),
        }
    }

    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    fn ensure_same_currency(&self, other: &MonetaryAmount) -> Result<()> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch {
                left: self.currency.clone(),
                right: other.currency.clone(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.amount.round_dp(MONETARY_DECIMAL_PRECISION),
            self.currency
        )
    }
}

/// Rounds to accounting precision, half away from zero, normalized to a
/// fixed two-digit scale.
pub(crate) fn round_monetary(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(
        MONETARY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    );
    rounded.rescale(MONETARY_DECIMAL_PRECISION);
    rounded
}
