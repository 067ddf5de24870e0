//! Money type for plan fees and member balances
//!
//! Internally stores amounts in cents (i64) so that period counting is exact
//! integer arithmetic. Whole amounts are displayed without decimals, the way
//! household plan fees are usually quoted ("$100"), fractional ones with two.
//!
//! Arithmetic on user-supplied amounts is checked: results stay within
//! ±`i64::MAX` cents, so negating or taking the magnitude never overflows.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use planshare::models::Money;
    /// let fee = Money::from_cents(10050); // $100.50
    /// assert_eq!(fee.to_string(), "$100.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole currency units
    ///
    /// # Examples
    /// ```
    /// use planshare::models::Money;
    /// assert_eq!(Money::from_units(100).cents(), 10000);
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Keep a raw result only when it lies inside the symmetric range
    fn in_range(cents: Option<i64>) -> Option<Self> {
        cents.filter(|c| *c != i64::MIN).map(Self)
    }

    /// Add two amounts, or `None` if the sum leaves the supported range
    pub fn checked_add(self, other: Money) -> Option<Self> {
        Self::in_range(self.0.checked_add(other.0))
    }

    /// Multiply by a whole number of periods, or `None` on overflow
    pub fn checked_times(self, periods: i64) -> Option<Self> {
        Self::in_range(self.0.checked_mul(periods))
    }

    /// Number of whole `unit` amounts contained in this amount, rounded toward
    /// negative infinity. Returns `None` when `unit` is not positive.
    pub fn floor_div(&self, unit: Money) -> Option<i64> {
        if unit.0 <= 0 {
            return None;
        }
        Some(self.0.div_euclid(unit.0))
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "100", "-50", "+200", "$100", "-$50", "100.5", "100.50"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();

        let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (true, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (false, stripped)
        } else {
            (false, trimmed)
        };

        let rest = rest.strip_prefix('$').unwrap_or(rest).replace(',', "");
        if rest.is_empty() || rest.starts_with(['-', '+']) {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let cents = match rest.split_once('.') {
            Some((whole, frac)) => {
                let whole: i64 = if whole.is_empty() {
                    0
                } else if whole.chars().all(|c| c.is_ascii_digit()) {
                    whole.parse().map_err(|_| invalid())?
                } else {
                    return Err(invalid());
                };
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                let frac_cents: i64 = match frac.len() {
                    0 => 0,
                    1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                    _ => frac[..2].parse().map_err(|_| invalid())?,
                };
                whole
                    .checked_mul(100)
                    .and_then(|c| c.checked_add(frac_cents))
                    .ok_or_else(invalid)?
            }
            None => {
                if !rest.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                rest.parse::<i64>()
                    .ok()
                    .and_then(|units| units.checked_mul(100))
                    .ok_or_else(invalid)?
            }
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let units = self.units().abs();
        if self.cents_part() == 0 {
            format!("{}{}{}", sign, symbol, units)
        } else {
            format!("{}{}{}.{:02}", sign, symbol, units, self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
