//! # Money Module
//!
//! Provides the `Money` type for handling receipt amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.10 + 0.20 = 0.30000000000000004 ❌                                 │
//! │    so a sum of prices can land a hair off the declared total, and      │
//! │    every comparison needs an epsilon.                                  │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "0.10" + "0.20" → 10 + 20 = 30 cents, exactly ✅                      │
//! │    "9.00"  → 900 cents;  900 % 25 == 0 ✅                               │
//! │    "6.49"  → 649 cents;  649 / 500 rounded up = 2 ✅                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use points_core::money::Money;
//!
//! let price: Money = "6.49".parse().unwrap();
//! assert_eq!(price.cents(), 649);
//! assert_eq!(price.to_string(), "6.49");
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use crate::error::MoneyParseError;

// =============================================================================
// Money Type
// =============================================================================

/// A non-negative amount in cents.
///
/// Receipts carry amounts as text; everything numeric in validation and
/// scoring goes through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use points_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// True when there are no cents: `"35.00"` yes, `"35.35"` no.
    #[inline]
    pub const fn is_round_dollar(&self) -> bool {
        self.0 % 100 == 0
    }

    /// True when the amount is an exact multiple of `step`.
    ///
    /// ## Example
    /// ```rust
    /// use points_core::money::Money;
    ///
    /// let quarter = Money::from_cents(25);
    /// assert!(Money::from_cents(900).is_multiple_of(quarter));
    /// assert!(!Money::from_cents(3535).is_multiple_of(quarter));
    /// ```
    #[inline]
    pub const fn is_multiple_of(&self, step: Money) -> bool {
        step.0 != 0 && self.0 % step.0 == 0
    }

    /// Absolute difference between two amounts.
    #[inline]
    pub const fn abs_diff(&self, other: Money) -> Money {
        Money((self.0 - other.0).abs())
    }

    /// Scales by `numerator / denominator` and rounds up to a whole dollar
    /// count.
    ///
    /// `price.ceil_dollars_scaled(1, 5)` is `ceil(price * 0.2)`.
    ///
    /// ## Example
    /// ```rust
    /// use points_core::money::Money;
    ///
    /// // 6.49 * 0.2 = 1.298 → 2
    /// assert_eq!(Money::from_cents(649).ceil_dollars_scaled(1, 5), 2);
    /// // 35.00 * 0.2 = 7 → 7
    /// assert_eq!(Money::from_cents(3500).ceil_dollars_scaled(1, 5), 7);
    /// ```
    pub fn ceil_dollars_scaled(&self, numerator: i64, denominator: i64) -> i64 {
        // value = cents * num / (den * 100); amounts are non-negative
        let scaled = self.0 as i128 * numerator as i128;
        let divisor = denominator as i128 * 100;
        ((scaled + divisor - 1).div_euclid(divisor)) as i64
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses plain decimal amounts: digits, optionally followed by a point and
/// one or two fraction digits. No sign, separators or exponent.
///
/// This is deliberately looser than the receipt currency pattern (which
/// requires exactly two fraction digits); that rule lives in validation.
impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (s, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) {
            return Err(MoneyParseError::Malformed(s.to_string()));
        }
        if s.ends_with('.') {
            return Err(MoneyParseError::Malformed(s.to_string()));
        }
        if fraction.len() > 2 {
            return Err(MoneyParseError::TooPrecise(s.to_string()));
        }

        let overflow = || MoneyParseError::Overflow(s.to_string());
        let dollars: i64 = whole.parse().map_err(|_| overflow())?;
        let cents = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| overflow())? * 10,
            _ => fraction.parse::<i64>().map_err(|_| overflow())?,
        };

        dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .map(Money)
            .ok_or_else(overflow)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders in the receipt wire format: `"6.49"`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
