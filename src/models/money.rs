//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (centimes) as i64 so that the
//! monthly aggregations never accumulate floating-point drift.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::error::MoneyError;

/// The single currency the ledger is kept in
pub const CURRENCY: &str = "MAD";

/// Represents a monetary amount stored as minor units (hundredths)
///
/// User-facing construction goes through [`Money::new`], which rejects zero
/// and negative amounts. Arithmetic is total: subtracting can produce a
/// negative value, which is how balances and overpayments are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "StoredMoney", try_from = "StoredMoney")]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from a user-supplied decimal amount
    ///
    /// The amount is rounded to the nearest minor unit.
    ///
    /// # Examples
    /// ```
    /// use moka::models::Money;
    /// let amount = Money::new(12.34).unwrap();
    /// assert_eq!(amount.cents(), 1234);
    /// assert!(Money::new(0.0).is_err());
    /// ```
    pub fn new(amount: f64) -> Result<Self, MoneyError> {
        if !amount.is_finite() {
            return Err(MoneyError::InvalidAmount);
        }
        if amount < 0.0 {
            return Err(MoneyError::NegativeAmount);
        }

        let cents = (amount * 100.0).round();
        if cents == 0.0 {
            return Err(MoneyError::ZeroAmount);
        }
        if cents > i64::MAX as f64 {
            return Err(MoneyError::InvalidAmount);
        }

        Ok(Self(cents as i64))
    }

    /// Rebuild a Money amount from persisted minor units
    ///
    /// Performs no validation; only for data that was validated before it
    /// was stored.
    pub const fn from_stored_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Decimal view of the amount
    pub fn amount(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Currency code of the amount
    pub fn currency(&self) -> &'static str {
        CURRENCY
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the minor units portion (0-99)
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(
                f,
                "-{}.{:02} {}",
                self.units().abs(),
                self.minor_part(),
                CURRENCY
            )
        } else {
            write!(f, "{}.{:02} {}", self.units(), self.minor_part(), CURRENCY)
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// On-disk shape: integer minor units plus a currency tag
#[derive(Serialize, Deserialize)]
struct StoredMoney {
    cents: i64,
    currency: String,
}

impl From<Money> for StoredMoney {
    fn from(money: Money) -> Self {
        Self {
            cents: money.0,
            currency: CURRENCY.to_string(),
        }
    }
}

impl TryFrom<StoredMoney> for Money {
    type Error = String;

    fn try_from(stored: StoredMoney) -> Result<Self, Self::Error> {
        if stored.currency != CURRENCY {
            return Err(format!(
                "unsupported currency '{}', expected '{}'",
                stored.currency, CURRENCY
            ));
        }
        Ok(Money::from_stored_cents(stored.cents))
    }
}
