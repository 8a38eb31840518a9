//! # Validation Module
//!
//! Turns raw lines typed at the till into checked values.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Input Pipeline                                     │
//! │                                                                         │
//! │  stdin line ──► grocer-cli collector                                   │
//! │                      │                                                  │
//! │                      ▼                                                  │
//! │  THIS MODULE: is_done_sentinel / validate_item_name /                  │
//! │               parse_quantity / parse_price                             │
//! │                      │                                                  │
//! │          ┌───────────┴───────────┐                                     │
//! │          ▼                       ▼                                      │
//! │   Ok(value) → LineItem    Err(ValidationError) → re-prompt or abort    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The parsers never panic and never decide what happens on failure; the
//! collector applies its `InvalidInputPolicy` to the returned error.
//!
//! ## Usage
//! ```rust
//! use grocer_core::validation::{parse_price, parse_quantity};
//!
//! assert_eq!(parse_quantity("10").unwrap(), 10);
//! assert_eq!(parse_price("49.99").unwrap().minor(), 4999);
//! assert!(parse_price("abc").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::{Money, MINOR_DIGITS};
use crate::MAX_ITEM_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Word that ends item collection.
pub const DONE_SENTINEL: &str = "done";

// =============================================================================
// Text Input
// =============================================================================

/// Checks whether the cashier typed the end-of-items word.
///
/// Case-insensitive. Surrounding whitespace is ignored on purpose, which is
/// wider than a plain case-insensitive compare: `" done "` also finishes the
/// basket, so an item can never be named `done` with padding.
///
/// ```rust
/// use grocer_core::validation::is_done_sentinel;
///
/// assert!(is_done_sentinel("done"));
/// assert!(is_done_sentinel("DONE"));
/// assert!(is_done_sentinel(" Done\n"));
/// assert!(!is_done_sentinel("donut"));
/// ```
pub fn is_done_sentinel(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(DONE_SENTINEL)
}

/// Validates an item name and returns it trimmed.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
pub fn validate_item_name(input: &str) -> ValidationResult<String> {
    let name = input.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Input
// =============================================================================

/// Parses a quantity.
///
/// ## Rules
/// - Must be a whole number (`10`, `+10`)
/// - Must not be negative
/// - Zero is allowed
///
/// ## User Workflow
/// ```text
/// Enter quantity of Apple: ten
///      │
///      ▼
/// parse_quantity("ten") ← THIS FUNCTION
///      │
///      ├── not an integer? → NotANumber
///      ├── below zero?     → NegativeQuantity
///      └── OK              → ask for the price
/// ```
pub fn parse_quantity(input: &str) -> ValidationResult<i64> {
    let raw = input.trim();

    let qty: i64 = raw.parse().map_err(|_| ValidationError::NotANumber {
        field: "quantity".to_string(),
        input: raw.to_string(),
    })?;

    if qty < 0 {
        return Err(ValidationError::NegativeQuantity { value: qty });
    }

    Ok(qty)
}

/// Parses a unit price in rupees straight into paisa.
///
/// ## Rules
/// - Decimal notation: `150`, `150.5`, `.5`, `5.`
/// - Exponent notation: `1e3`, `1.5E2`, `25e-1`
/// - Digits past the paisa round half away from zero (`12.345` → `12.35`)
/// - Must not be negative; zero is allowed
/// - No separators, `inf` or `nan`
///
/// The digits are scaled with integer arithmetic only, so `0.1` is exactly
/// ten paisa.
///
/// ```rust
/// use grocer_core::validation::parse_price;
/// use grocer_core::ValidationError;
///
/// assert_eq!(parse_price("150").unwrap().minor(), 15000);
/// assert_eq!(parse_price(".5").unwrap().minor(), 50);
/// assert_eq!(parse_price("1e3").unwrap().minor(), 100000);
/// assert_eq!(parse_price("1.005").unwrap().minor(), 101);
/// assert!(matches!(parse_price("-1"), Err(ValidationError::NegativePrice { .. })));
/// ```
pub fn parse_price(input: &str) -> ValidationResult<Money> {
    let raw = input.trim();
    let not_a_number = || ValidationError::NotANumber {
        field: "price".to_string(),
        input: raw.to_string(),
    };

    let (negative, unsigned) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((mantissa, exp)) => {
            // i64 parsing takes its own sign but must see at least one digit
            let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(not_a_number());
            }
            (mantissa, exp.parse::<i64>().map_err(|_| not_a_number())?)
        }
        None => (unsigned, 0),
    };

    let (whole, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    if whole.is_empty() && frac.is_empty() {
        return Err(not_a_number());
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_a_number());
    }

    // value = digits × 10^(exponent - frac.len()), so paisa = digits × 10^shift
    let digits = format!("{whole}{frac}");
    let digits = digits.trim_start_matches('0');
    let shift = exponent
        .saturating_add(MINOR_DIGITS as i64)
        .saturating_sub(frac.len() as i64);

    if negative && !digits.is_empty() {
        return Err(ValidationError::NegativePrice {
            value: raw.to_string(),
        });
    }

    let paisa = if digits.is_empty() {
        0
    } else if shift >= 0 {
        let scale = u32::try_from(shift)
            .ok()
            .and_then(|s| 10i64.checked_pow(s))
            .ok_or_else(not_a_number)?;
        let base: i64 = digits.parse().map_err(|_| not_a_number())?;
        base.checked_mul(scale).ok_or_else(not_a_number)?
    } else {
        round_dropped_digits(digits, shift.unsigned_abs()).ok_or_else(not_a_number)?
    };

    Ok(Money::from_minor(paisa))
}

/// Drops the last `drop` digits of a non-negative decimal string, rounding
/// half away from zero. `None` if what remains overflows `i64`.
fn round_dropped_digits(digits: &str, drop: u64) -> Option<i64> {
    let keep = match usize::try_from(drop) {
        Ok(drop) if drop <= digits.len() => digits.len() - drop,
        // Every digit sits below half a paisa
        _ => return Some(0),
    };

    let (kept, dropped) = digits.split_at(keep);
    let base: i64 = if kept.is_empty() { 0 } else { kept.parse().ok()? };

    if dropped.as_bytes().first().is_some_and(|&b| b >= b'5') {
        base.checked_add(1)
    } else {
        Some(base)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_done_sentinel_case_insensitive() {
        assert!(is_done_sentinel("done"));
        assert!(is_done_sentinel("DONE"));
        assert!(is_done_sentinel("Done"));
        assert!(is_done_sentinel("dOnE"));
        assert!(is_done_sentinel("  done  "));

        assert!(!is_done_sentinel(""));
        assert!(!is_done_sentinel("done!"));
        assert!(!is_done_sentinel("Doughnut"));
    }

    #[test]
    fn test_validate_item_name() {
        assert_eq!(validate_item_name("  Apple ").unwrap(), "Apple");
        assert_eq!(validate_item_name("Basmati Rice 5kg").unwrap(), "Basmati Rice 5kg");

        assert!(matches!(
            validate_item_name("   "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_item_name(&"A".repeat(201)),
            Err(ValidationError::TooLong { max: 200, .. })
        ));
        assert!(validate_item_name(&"ب".repeat(200)).is_ok());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("10").unwrap(), 10);
        assert_eq!(parse_quantity(" 5\n").unwrap(), 5);
        assert_eq!(parse_quantity("+3").unwrap(), 3);
        assert_eq!(parse_quantity("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_quantity_rejects() {
        assert_eq!(
            parse_quantity("ten"),
            Err(ValidationError::NotANumber {
                field: "quantity".to_string(),
                input: "ten".to_string(),
            })
        );
        assert!(matches!(parse_quantity("2.5"), Err(ValidationError::NotANumber { .. })));
        assert!(matches!(parse_quantity(""), Err(ValidationError::NotANumber { .. })));
        assert_eq!(
            parse_quantity("-4"),
            Err(ValidationError::NegativeQuantity { value: -4 })
        );
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("50").unwrap(), Money::from_minor(5000));
        assert_eq!(parse_price("50.0").unwrap(), Money::from_minor(5000));
        assert_eq!(parse_price("49.99").unwrap(), Money::from_minor(4999));
        assert_eq!(parse_price("0.5").unwrap(), Money::from_minor(50));
        assert_eq!(parse_price(".05").unwrap(), Money::from_minor(5));
        assert_eq!(parse_price("7.").unwrap(), Money::from_minor(700));
        assert_eq!(parse_price("+1.25").unwrap(), Money::from_minor(125));
        assert_eq!(parse_price("1.500").unwrap(), Money::from_minor(150));
        assert_eq!(parse_price("0").unwrap(), Money::zero());
        assert_eq!(parse_price("-0").unwrap(), Money::zero());
    }

    #[test]
    fn test_parse_price_not_a_number() {
        for input in [
            "", ".", "-", "abc", "inf", "nan", "1,000", "1.2.3", "--1", "1 000", "e3", "1e",
            "1e+", "1e1.5", ".e2", "1e2e3", "0x10",
        ] {
            assert!(
                matches!(parse_price(input), Err(ValidationError::NotANumber { .. })),
                "expected NotANumber for {input:?}"
            );
        }
        for input in ["99999999999999999999", "1e30", "9e99999999999999999999"] {
            assert!(
                matches!(parse_price(input), Err(ValidationError::NotANumber { .. })),
                "expected NotANumber for {input:?}"
            );
        }
    }

    #[test]
    fn test_parse_price_negative() {
        assert_eq!(
            parse_price("-12.50"),
            Err(ValidationError::NegativePrice {
                value: "-12.50".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_price_rounds_extra_digits() {
        assert_eq!(parse_price("12.345").unwrap(), Money::from_minor(1235));
        assert_eq!(parse_price("33.333").unwrap(), Money::from_minor(3333));
        assert_eq!(parse_price("1.005").unwrap(), Money::from_minor(101));
        assert_eq!(parse_price("1.0049999").unwrap(), Money::from_minor(100));
        assert_eq!(parse_price("0.004").unwrap(), Money::zero());
        assert_eq!(parse_price("0.005").unwrap(), Money::from_minor(1));
        assert_eq!(parse_price("0.0000001").unwrap(), Money::zero());
    }

    #[test]
    fn test_parse_price_exponent_notation() {
        assert_eq!(parse_price("1e3").unwrap(), Money::from_minor(100000));
        assert_eq!(parse_price("1.5E2").unwrap(), Money::from_minor(15000));
        assert_eq!(parse_price("25e-1").unwrap(), Money::from_minor(250));
        assert_eq!(parse_price("1e+2").unwrap(), Money::from_minor(10000));
        assert_eq!(parse_price("2.5e-3").unwrap(), Money::zero());
        assert_eq!(parse_price("5e-3").unwrap(), Money::from_minor(1));
        assert_eq!(parse_price("0e999").unwrap(), Money::zero());
        assert_eq!(parse_price("1e-999999999999").unwrap(), Money::zero());
    }

    #[test]
    fn test_parse_price_negative_with_extra_digits() {
        assert!(matches!(parse_price("-0.001"), Err(ValidationError::NegativePrice { .. })));
        assert!(matches!(parse_price("-1e2"), Err(ValidationError::NegativePrice { .. })));
        assert_eq!(parse_price("-0.000").unwrap(), Money::zero());
    }
}
