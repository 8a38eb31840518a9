//! # Error Types
//!
//! Domain-specific error types for grocer-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  grocer-core errors (this file)                                        │
//! │  ├── CoreError        - Receipt calculation failures                   │
//! │  └── ValidationError  - Rejected keyboard input                        │
//! │                                                                         │
//! │  grocer-cli errors (app crate)                                         │
//! │  └── CliError         - What the cashier sees + exit code              │
//! │                                                                         │
//! │  Flow: ValidationError ─┬─► CliError → stderr                          │
//! │        CoreError ───────┘                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending input in error messages
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a message the cashier can act on

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A monetary amount does not fit in the money representation.
    ///
    /// ## When This Occurs
    /// - quantity × unit price of one line exceeds `i64` paisa
    /// - the running subtotal exceeds `i64` paisa
    #[error("Amount too large while pricing {name}")]
    AmountOverflow { name: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Produced by the parsers in [`crate::validation`] when a line typed at the
/// till cannot become part of a [`crate::LineItem`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Input is not a number of the expected kind.
    #[error("{field} must be a number, got '{input}'")]
    NotANumber { field: String, input: String },

    /// Quantity below zero.
    #[error("quantity cannot be negative (got {value})")]
    NegativeQuantity { value: i64 },

    /// Unit price below zero. `value` is the price as typed.
    #[error("price cannot be negative (got {value})")]
    NegativePrice { value: String },
}

impl ValidationError {
    /// Name of the input field that was rejected.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::NotANumber { field, .. } => field,
            ValidationError::NegativeQuantity { .. } => "quantity",
            ValidationError::NegativePrice { .. } => "price",
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
