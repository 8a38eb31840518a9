//! # Domain Types
//!
//! Core domain types used throughout Grocer POS.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    LineItem     │   │  PricingPolicy  │   │      Rate       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  threshold      │   │  bps (u32)      │       │
//! │  │  quantity       │   │  discount_rate  │   │  1000 = 10%     │       │
//! │  │  unit_price     │   │  tax_rate       │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! One ordered `Vec<LineItem>` holds everything the till collected. There are
//! no parallel name/quantity/price lists to keep aligned.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::{DISCOUNT_RATE_BPS, DISCOUNT_THRESHOLD, SALES_TAX_RATE_BPS};

// =============================================================================
// Rate
// =============================================================================

/// A percentage represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 500 bps = 5% sales tax, 1000 bps = 10% discount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate(u32);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One purchased product as entered at the till.
///
/// Immutable once collected; lives only for the current run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Name as typed by the cashier (trimmed).
    pub name: String,

    /// Units bought. Never negative after validation.
    pub quantity: i64,

    /// Price of one unit.
    pub unit_price: Money,
}

impl LineItem {
    pub fn new(name: impl Into<String>, quantity: i64, unit_price: Money) -> Self {
        LineItem {
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    /// Line cost: unit price × quantity.
    pub fn line_total(&self) -> CoreResult<Money> {
        self.unit_price
            .checked_multiply_quantity(self.quantity)
            .ok_or_else(|| CoreError::AmountOverflow {
                name: self.name.clone(),
            })
    }
}

// =============================================================================
// Pricing Policy
// =============================================================================

/// Discount and tax rules applied to a receipt.
///
/// `PricingPolicy::default()` is the store's fixed policy:
/// 10% off when the subtotal exceeds 2000.00 PKR, then 5% tax on the
/// discounted amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// Subtotal must be strictly greater than this for the discount to apply.
    pub discount_threshold: Money,

    /// Share of the subtotal taken off once over the threshold.
    pub discount_rate: Rate,

    /// Tax charged on subtotal − discount.
    pub tax_rate: Rate,
}

impl PricingPolicy {
    /// Discount owed on `subtotal`.
    pub fn discount_for(&self, subtotal: Money) -> Money {
        if subtotal > self.discount_threshold {
            subtotal.apply_rate(self.discount_rate)
        } else {
            Money::zero()
        }
    }

    /// Tax owed on the post-discount amount.
    pub fn tax_for(&self, discounted: Money) -> Money {
        discounted.calculate_tax(self.tax_rate)
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        PricingPolicy {
            discount_threshold: DISCOUNT_THRESHOLD,
            discount_rate: Rate::from_bps(DISCOUNT_RATE_BPS),
            tax_rate: Rate::from_bps(SALES_TAX_RATE_BPS),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
