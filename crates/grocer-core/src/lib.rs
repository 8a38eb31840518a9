//! # grocer-core: Pure Business Logic for Grocer POS
//!
//! This crate holds every rule of the till as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Grocer POS Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    grocer-cli (console)                         │   │
//! │  │    prompts ──► collector ──► printer ──► stdout                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ grocer-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  receipt  │  │ validation│  │   │
//! │  │   │ LineItem  │  │   Money   │  │  Receipt  │  │  parsers  │  │   │
//! │  │   │  Policy   │  │   Rate    │  │   Line    │  │  sentinel │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STDIN • NO ENV • PURE FUNCTIONS                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (LineItem, PricingPolicy, Rate)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`receipt`] - Subtotal, discount, tax and total
//! - [`validation`] - Parsing of cashier input
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::Utc;
//! use grocer_core::{LineItem, PricingPolicy, Receipt};
//! use grocer_core::validation::{parse_price, parse_quantity};
//!
//! let apple = LineItem::new("Apple", parse_quantity("10")?, parse_price("50.0")?);
//! let bread = LineItem::new("Bread", parse_quantity("5")?, parse_price("100")?);
//!
//! let receipt = Receipt::calculate(&[apple, bread], &PricingPolicy::default(), Utc::now())?;
//! assert_eq!(receipt.total.to_string(), "1050.00");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use receipt::{Receipt, ReceiptLine};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency every amount is denominated in.
pub const CURRENCY_CODE: &str = "PKR";

/// Subtotal above which the discount applies (2000.00 PKR).
pub const DISCOUNT_THRESHOLD: Money = Money::from_major_minor(2000, 0);

/// Discount taken off the subtotal once over the threshold (10%).
pub const DISCOUNT_RATE_BPS: u32 = 1000;

/// Sales tax on the discounted amount (5%).
pub const SALES_TAX_RATE_BPS: u32 = 500;

/// Longest item name the till accepts.
pub const MAX_ITEM_NAME_LEN: usize = 200;
