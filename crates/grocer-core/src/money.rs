//! # Money Module
//!
//! Provides the `Money` type for handling rupee amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floats:                                                           │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │    2835.0000000000005 PKR on a receipt                                 │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paisa (1 PKR = 100 paisa)                       │
//! │    Prices are parsed from text straight into paisa.                    │
//! │    Percentages round once, to the nearest paisa.                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use grocer_core::money::Money;
//!
//! let price = Money::from_major_minor(150, 0); // 150.00 PKR
//! let line = price.checked_multiply_quantity(20).unwrap();
//! assert_eq!(line.to_string(), "3000.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::types::Rate;

/// Number of minor units (paisa) in one rupee.
pub const MINOR_PER_MAJOR: i64 = 100;

/// Number of fractional digits a rupee amount can carry.
pub const MINOR_DIGITS: usize = 2;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in paisa.
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction (subtotal − discount) stays in the type
/// - **Single field tuple struct**: serializes as a plain integer
///
/// ## Where Money is Used
/// ```text
/// parse_price("150") ──► LineItem.unit_price ──► ReceiptLine.line_total
///                                                        │
///                      Receipt.subtotal ◄────────────────┘
///                              │
///                              ├──► discount (apply_rate)
///                              └──► tax (calculate_tax) ──► Receipt.total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paisa.
    ///
    /// ```rust
    /// use grocer_core::money::Money;
    ///
    /// let price = Money::from_minor(5050);
    /// assert_eq!(price.to_string(), "50.50");
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Creates a Money value from rupees and paisa.
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -5.50, not -4.50.
    ///
    /// ```rust
    /// use grocer_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(10, 99).minor(), 1099);
    /// assert_eq!(Money::from_major_minor(-5, 50).minor(), -550);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * MINOR_PER_MAJOR - minor)
        } else {
            Money(major * MINOR_PER_MAJOR + minor)
        }
    }

    /// Returns the value in paisa.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the paisa portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Multiplies a unit price by a quantity, or `None` on overflow.
    ///
    /// ```rust
    /// use grocer_core::money::Money;
    ///
    /// let unit_price = Money::from_minor(299);
    /// assert_eq!(unit_price.checked_multiply_quantity(3), Some(Money::from_minor(897)));
    /// assert_eq!(Money::from_minor(i64::MAX).checked_multiply_quantity(2), None);
    /// ```
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(v) => Some(Money(v)),
            None => None,
        }
    }

    /// Adds two amounts, or `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Money(v)),
            None => None,
        }
    }

    /// Returns `rate` of this amount, rounded half away from zero to the paisa.
    ///
    /// ## Implementation
    /// Integer math in i128: `(amount * bps ± 5000) / 10000`.
    /// The ±5000 is half of one basis-point denominator.
    ///
    /// ```rust
    /// use grocer_core::money::Money;
    /// use grocer_core::types::Rate;
    ///
    /// let subtotal = Money::from_major_minor(3000, 0);
    /// assert_eq!(subtotal.apply_rate(Rate::from_bps(1000)).to_string(), "300.00");
    ///
    /// // 0.15 at 10% is 0.015 → 0.02
    /// assert_eq!(Money::from_minor(15).apply_rate(Rate::from_bps(1000)).minor(), 2);
    /// ```
    pub fn apply_rate(&self, rate: Rate) -> Money {
        let product = self.0 as i128 * rate.bps() as i128;
        let half = if product < 0 { -5000 } else { 5000 };
        // |amount * rate| <= |amount| for rates up to 100%, so the result fits
        Money::from_minor(((product + half) / 10_000) as i64)
    }

    /// Calculates sales tax on this amount.
    ///
    /// ## User Workflow
    /// ```text
    /// Subtotal 3000.00 − Discount 300.00 = 2700.00
    ///      │
    ///      ▼
    /// calculate_tax(5%) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Tax: 135.00
    /// ```
    #[inline]
    pub fn calculate_tax(&self, rate: Rate) -> Money {
        self.apply_rate(rate)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders `major.minor` with exactly two fractional digits, no symbol.
/// The currency code is appended by the receipt printer.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02}",
            sign,
            self.major().abs(),
            self.minor_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let money = Money::from_minor(1099);
        assert_eq!(money.minor(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(10, 99).minor(), 1099);
        assert_eq!(Money::from_major_minor(-5, 50).minor(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_minor(105000).to_string(), "1050.00");
        assert_eq!(Money::from_minor(500).to_string(), "5.00");
        assert_eq!(Money::from_minor(5).to_string(), "0.05");
        assert_eq!(Money::from_minor(-550).to_string(), "-5.50");
        assert_eq!(Money::from_minor(-5).to_string(), "-0.05");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(500);

        assert_eq!((a + b).minor(), 1500);
        assert_eq!((a - b).minor(), 500);

        let mut c = a;
        c += b;
        c -= Money::from_minor(100);
        assert_eq!(c.minor(), 1400);

        let total: Money = [a, b, b].into_iter().sum();
        assert_eq!(total.minor(), 2000);
    }

    #[test]
    fn test_apply_rate_exact() {
        let subtotal = Money::from_major_minor(1000, 0);
        assert_eq!(subtotal.calculate_tax(Rate::from_bps(500)), Money::from_major_minor(50, 0));
        assert_eq!(subtotal.apply_rate(Rate::from_bps(1000)), Money::from_major_minor(100, 0));
    }

    #[test]
    fn test_apply_rate_rounds_half_away_from_zero() {
        // 0.05 at 10% = 0.005 → 0.01
        assert_eq!(Money::from_minor(5).apply_rate(Rate::from_bps(1000)).minor(), 1);
        // 0.04 at 10% = 0.004 → 0.00
        assert_eq!(Money::from_minor(4).apply_rate(Rate::from_bps(1000)).minor(), 0);
        // -0.05 at 10% = -0.005 → -0.01
        assert_eq!(Money::from_minor(-5).apply_rate(Rate::from_bps(1000)).minor(), -1);
    }

    #[test]
    fn test_apply_rate_large_amount() {
        let big = Money::from_minor(i64::MAX);
        let tax = big.apply_rate(Rate::from_bps(500));
        assert!(tax > Money::zero());
        assert!(tax < big);
    }

    #[test]
    fn test_checked_operations() {
        assert_eq!(
            Money::from_minor(5000).checked_multiply_quantity(10),
            Some(Money::from_minor(50000))
        );
        assert_eq!(Money::from_minor(5000).checked_multiply_quantity(0), Some(Money::zero()));
        assert_eq!(Money::from_minor(i64::MAX).checked_add(Money::from_minor(1)), None);
    }

    #[test]
    fn test_serializes_as_plain_integer() {
        let json = serde_json::to_string(&Money::from_minor(13500)).unwrap();
        assert_eq!(json, "13500");
    }
}
