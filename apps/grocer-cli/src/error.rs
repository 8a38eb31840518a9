//! # CLI Error Type
//!
//! Unified error type for a till session.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Grocer POS                             │
//! │                                                                         │
//! │  Collector ── ValidationError (policy = abort) ──┐                     │
//! │  Receipt   ── CoreError (overflow) ──────────────┤                     │
//! │  stdin/out ── io::Error / unexpected EOF ────────┼──► CliError          │
//! │  Config    ── ConfigError ───────────────────────┘        │             │
//! │                                                           ▼             │
//! │                                  "Error: ..." on stderr + exit code    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is printed to stdout once a session fails, so a failed run never
//! leaves a partial receipt behind.

use std::io;

use grocer_core::{CoreError, ValidationError};
use thiserror::Error;

use crate::config::ConfigError;

/// Everything that can end a till session early.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading stdin or writing stdout/stderr failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Receipt could not be priced.
    #[error("{0}")]
    Core(#[from] CoreError),

    /// Input rejected while the policy is `abort`.
    #[error("Invalid {}: {}", .0.field(), .0)]
    Validation(#[from] ValidationError),

    /// Input closed in the middle of an item.
    #[error("Input ended while waiting for {field}")]
    UnexpectedEof { field: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Could not encode receipt: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Machine-readable code, used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Io(_) => "IO_ERROR",
            CliError::Core(_) => "CALCULATION_ERROR",
            CliError::Validation(_) => "VALIDATION_ERROR",
            CliError::UnexpectedEof { .. } => "UNEXPECTED_EOF",
            CliError::Config(_) => "CONFIG_ERROR",
            CliError::Json(_) => "ENCODING_ERROR",
        }
    }

    /// Process exit status for this failure.
    ///
    /// ## Exit Codes
    /// - `1`: rejected input under `--on-invalid abort`, or a pricing failure
    /// - `2`: bad configuration
    /// - `74`: I/O failure or input closed mid-item (sysexits `EX_IOERR`)
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Validation(_) | CliError::Core(_) | CliError::Json(_) => 1,
            CliError::Config(_) => 2,
            CliError::Io(_) | CliError::UnexpectedEof { .. } => 74,
        }
    }
}

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_message() {
        let err: CliError = ValidationError::NotANumber {
            field: "quantity".to_string(),
            input: "ten".to_string(),
        }
        .into();

        assert_eq!(err.to_string(), "Invalid quantity: quantity must be a number, got 'ten'");
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_eof_maps_to_io_exit_code() {
        let err = CliError::UnexpectedEof {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "Input ended while waiting for price");
        assert_eq!(err.exit_code(), 74);
    }

    #[test]
    fn test_config_error_exit_code() {
        let err: CliError = ConfigError::InvalidValue {
            name: "GROCER_FORMAT".to_string(),
            value: "xml".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.code(), "CONFIG_ERROR");
    }
}
