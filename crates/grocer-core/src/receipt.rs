//! # Receipt Calculation
//!
//! Prices a finished basket in one pass.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Receipt::calculate                                   │
//! │                                                                         │
//! │  items (input order)                                                    │
//! │     │                                                                   │
//! │     ├──► line_total = unit_price × quantity ──► ReceiptLine            │
//! │     │                                                                   │
//! │     └──► subtotal += line_total                                        │
//! │                                                                         │
//! │  discount = subtotal > 2000.00 ? 10% × subtotal : 0                    │
//! │  tax      = 5% × (subtotal − discount)                                 │
//! │  total    = subtotal − discount + tax                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{LineItem, PricingPolicy};

/// One priced line of a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptLine {
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,
    /// unit_price × quantity
    pub line_total: Money,
}

/// A fully priced basket.
///
/// ## Invariants
/// - `subtotal` is the sum of every `line_total`
/// - `total == subtotal - discount + tax` with no further rounding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub lines: Vec<ReceiptLine>,
    pub subtotal: Money,
    pub discount: Money,
    pub tax: Money,
    pub total: Money,
    pub issued_at: DateTime<Utc>,
}

impl Receipt {
    /// Prices `items` under `policy`.
    ///
    /// Fails only when an amount overflows the money representation.
    ///
    /// ```rust
    /// use chrono::Utc;
    /// use grocer_core::{LineItem, Money, PricingPolicy, Receipt};
    ///
    /// let items = vec![LineItem::new("Rice", 20, Money::from_major_minor(150, 0))];
    /// let receipt = Receipt::calculate(&items, &PricingPolicy::default(), Utc::now()).unwrap();
    ///
    /// assert_eq!(receipt.subtotal.to_string(), "3000.00");
    /// assert_eq!(receipt.discount.to_string(), "300.00");
    /// assert_eq!(receipt.tax.to_string(), "135.00");
    /// assert_eq!(receipt.total.to_string(), "2835.00");
    /// ```
    pub fn calculate(
        items: &[LineItem],
        policy: &PricingPolicy,
        issued_at: DateTime<Utc>,
    ) -> CoreResult<Receipt> {
        let mut lines = Vec::with_capacity(items.len());
        let mut subtotal = Money::zero();

        for item in items {
            let line_total = item.line_total()?;
            subtotal = subtotal
                .checked_add(line_total)
                .ok_or_else(|| CoreError::AmountOverflow {
                    name: item.name.clone(),
                })?;

            lines.push(ReceiptLine {
                name: item.name.clone(),
                quantity: item.quantity,
                unit_price: item.unit_price,
                line_total,
            });
        }

        let discount = policy.discount_for(subtotal);
        let tax = policy.tax_for(subtotal - discount);
        let total = subtotal - discount + tax;

        Ok(Receipt {
            lines,
            subtotal,
            discount,
            tax,
            total,
            issued_at,
        })
    }

    /// Number of lines on the receipt.
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap()
    }

    fn rupees(major: i64) -> Money {
        Money::from_major_minor(major, 0)
    }

    fn price(items: &[LineItem]) -> Receipt {
        Receipt::calculate(items, &PricingPolicy::default(), at()).unwrap()
    }

    #[test]
    fn test_empty_basket_is_all_zero() {
        let receipt = price(&[]);

        assert_eq!(receipt.item_count(), 0);
        assert_eq!(receipt.subtotal, Money::zero());
        assert_eq!(receipt.discount, Money::zero());
        assert_eq!(receipt.tax, Money::zero());
        assert_eq!(receipt.total, Money::zero());
    }

    #[test]
    fn test_below_threshold_no_discount() {
        let receipt = price(&[
            LineItem::new("Apple", 10, rupees(50)),
            LineItem::new("Bread", 5, rupees(100)),
        ]);

        assert_eq!(receipt.lines[0].line_total, rupees(500));
        assert_eq!(receipt.lines[1].line_total, rupees(500));
        assert_eq!(receipt.subtotal, rupees(1000));
        assert_eq!(receipt.discount, Money::zero());
        assert_eq!(receipt.tax, rupees(50));
        assert_eq!(receipt.total, rupees(1050));
    }

    #[test]
    fn test_above_threshold_discount_then_tax() {
        let receipt = price(&[LineItem::new("Rice", 20, rupees(150))]);

        assert_eq!(receipt.subtotal, rupees(3000));
        assert_eq!(receipt.discount, rupees(300));
        assert_eq!(receipt.tax, rupees(135));
        assert_eq!(receipt.total, rupees(2835));
    }

    #[test]
    fn test_exactly_threshold_gets_no_discount() {
        let receipt = price(&[LineItem::new("Oil", 4, rupees(500))]);

        assert_eq!(receipt.subtotal, rupees(2000));
        assert_eq!(receipt.discount, Money::zero());
        assert_eq!(receipt.tax, rupees(100));
        assert_eq!(receipt.total, rupees(2100));
    }

    #[test]
    fn test_lines_keep_input_order() {
        let receipt = price(&[
            LineItem::new("Milk", 2, rupees(220)),
            LineItem::new("Eggs", 12, rupees(30)),
            LineItem::new("Tea", 1, Money::from_major_minor(899, 50)),
        ]);

        let names: Vec<&str> = receipt.lines.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Milk", "Eggs", "Tea"]);
        assert_eq!(receipt.item_count(), 3);
        let quantities: Vec<i64> = receipt.lines.iter().map(|l| l.quantity).collect();
        assert_eq!(quantities, [2, 12, 1]);
    }

    #[test]
    fn test_totals_hold_for_fractional_prices() {
        let items = [
            LineItem::new("Chips", 3, Money::from_major_minor(45, 75)),
            LineItem::new("Soap", 7, Money::from_major_minor(333, 33)),
            LineItem::new("Salt", 0, rupees(60)),
        ];
        let receipt = price(&items);

        let expected_subtotal: Money = items.iter().map(|i| i.line_total().unwrap()).sum();
        assert_eq!(receipt.subtotal, expected_subtotal);
        // 137.25 + 2333.31 = 2470.56 > 2000
        assert_eq!(receipt.subtotal, Money::from_minor(247056));
        // 10% of 2470.56 = 247.056 → 247.06
        assert_eq!(receipt.discount, Money::from_minor(24706));
        // 5% of 2223.50 = 111.175 → 111.18
        assert_eq!(receipt.tax, Money::from_minor(11118));
        assert_eq!(receipt.total, receipt.subtotal - receipt.discount + receipt.tax);
    }

    #[test]
    fn test_subtotal_overflow_is_an_error() {
        let items = [
            LineItem::new("A", 1, Money::from_minor(i64::MAX)),
            LineItem::new("B", 1, Money::from_minor(1)),
        ];
        let err = Receipt::calculate(&items, &PricingPolicy::default(), at()).unwrap_err();
        assert!(matches!(err, CoreError::AmountOverflow { ref name } if name == "B"));
    }

    #[test]
    fn test_huge_free_quantities_still_price() {
        let receipt = price(&[
            LineItem::new("Free", i64::MAX, Money::zero()),
            LineItem::new("Free2", 1, Money::zero()),
        ]);

        assert_eq!(receipt.item_count(), 2);
        assert_eq!(receipt.lines[0].quantity, i64::MAX);
        assert_eq!(receipt.total, Money::zero());
    }

    #[test]
    fn test_serializes_amounts_in_paisa() {
        let receipt = price(&[LineItem::new("Apple", 10, rupees(50))]);
        let json = serde_json::to_value(&receipt).unwrap();

        assert_eq!(json["subtotal"], 50000);
        assert_eq!(json["tax"], 2500);
        assert_eq!(json["lines"][0]["name"], "Apple");
        assert_eq!(json["issued_at"], "2026-10-18T09:30:00Z");
    }
}
