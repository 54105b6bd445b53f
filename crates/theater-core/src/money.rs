//! # Money Module
//!
//! Provides the `Money` type for statement amounts.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Pricing works in cents from start to finish:                           │
//! │                                                                         │
//! │    amount(tragedy, 55) = 40000 + 25 × 1000 = 65000 cents                │
//! │                                                                         │
//! │  The only conversion to dollars happens when the renderer prints it:   │
//! │                                                                         │
//! │    65000 cents ──► Display ──► "$650.00"                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use theater_core::money::Money;
//!
//! let hamlet = Money::from_cents(65000);
//! let othello = Money::from_cents(50000);
//! assert_eq!((hamlet + othello).to_string(), "$1,150.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Minor units per major unit; the renderer's scale factor.
pub const CENTS_PER_DOLLAR: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Pricing and totals go through `checked_add` /
///   `checked_mul`, so an overflow is an error rather than a wrap
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serde transparent**: Serializes as a bare integer of cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use theater_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion, truncated toward zero.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / CENTS_PER_DOLLAR
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    ///
    /// ## Example
    /// ```rust
    /// use theater_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).cents_part(), 99);
    /// assert_eq!(Money::from_cents(-550).cents_part(), 50);
    /// ```
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % CENTS_PER_DOLLAR).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Addition that returns `None` instead of overflowing.
    ///
    /// ## Example
    /// ```rust
    /// use theater_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1).checked_add(Money::from_cents(2)), Some(Money::from_cents(3)));
    /// assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
    /// ```
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Multiplication by a head count that returns `None` instead of overflowing.
    #[inline]
    pub const fn checked_mul(self, count: u32) -> Option<Money> {
        match self.0.checked_mul(count as i64) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Formats as US-locale currency: `$`, comma thousands separators and
/// exactly two decimals (`$1,234.56`, `-$5.50`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let dollars = self.dollars().unsigned_abs().to_string();

        let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
        for (i, digit) in dollars.chars().enumerate() {
            if i > 0 && (dollars.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        write!(f, "{}${}.{:02}", sign, grouped, self.cents_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(7)), "$0.07");
    }

    #[test]
    fn test_display_thousands_separators() {
        assert_eq!(Money::from_cents(99_999).to_string(), "$999.99");
        assert_eq!(Money::from_cents(100_000).to_string(), "$1,000.00");
        assert_eq!(Money::from_cents(123_456).to_string(), "$1,234.56");
        assert_eq!(Money::from_cents(173_000).to_string(), "$1,730.00");
        assert_eq!(Money::from_cents(123_456_789_00).to_string(), "$123,456,789.00");
        assert_eq!(Money::from_cents(-1_000_000_00).to_string(), "-$1,000,000.00");
    }

    #[test]
    fn test_addition() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);
        assert_eq!((a + b).cents(), 1500);
    }

    #[test]
    fn test_checked_arithmetic() {
        let rate = Money::from_cents(1_000);
        assert_eq!(rate.checked_mul(35), Some(Money::from_cents(35_000)));
        assert_eq!(Money::from_cents(i64::MAX).checked_mul(35), None);
        assert_eq!(Money::from_cents(i64::MAX).checked_mul(1), Some(Money::from_cents(i64::MAX)));
        assert_eq!(Money::from_cents(i64::MAX).checked_add(rate), None);
    }

    #[test]
    fn test_serializes_as_cents() {
        let json = serde_json::to_string(&Money::from_cents(45000)).unwrap();
        assert_eq!(json, "45000");
    }
}
