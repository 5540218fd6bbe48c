//! # Error Types
//!
//! Domain-specific error types for letras-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  letras-core errors (this file)                                        │
//! │  ├── ConversionError  - Everything a formatting call can fail with     │
//! │  │   ├── OutOfRange       (RangeError: value < 0 or > 999,999,999)     │
//! │  │   ├── InvalidDecimals  (ConfigurationError: decimals > 10)          │
//! │  │   └── InvalidAmount    (text that is not a decimal number)          │
//! │                                                                         │
//! │  config errors                                                          │
//! │  └── ConfigError      - Environment variables that don't parse         │
//! │                                                                         │
//! │  Flow: ConversionError → CLI "error: ..." message                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending value in the message
//! 3. No partial results: a call either returns the full text or an error
//! 4. Retrying with the same input always fails the same way

use thiserror::Error;

use crate::{MAX_DECIMALS, MAX_NUMBER, MIN_NUMBER};

// =============================================================================
// Conversion Error
// =============================================================================

/// Errors raised by the formatting operations.
///
/// All of them are deterministic input-validation failures. The only
/// recovery is for the caller to supply a corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The integer part is negative or exceeds [`MAX_NUMBER`].
    ///
    /// ## When This Occurs
    /// - `to_words(-1)`
    /// - `to_words(1_000_000_000)`
    /// - 10-decimal fractions whose digits exceed 999,999,999
    #[error("Number must be between {min} and {max}, got {value}", min = MIN_NUMBER, max = MAX_NUMBER)]
    OutOfRange { value: String },

    /// Decimal precision outside `0..=MAX_DECIMALS`.
    ///
    /// Raised before any computation begins.
    #[error("Decimals must be between 0 and {max}, got {decimals}", max = MAX_DECIMALS)]
    InvalidDecimals { decimals: u32 },

    /// Text could not be parsed as a decimal amount.
    #[error("Invalid amount '{input}': {reason}")]
    InvalidAmount { input: String, reason: String },
}

impl ConversionError {
    /// True for the RangeError family (value outside supported bounds).
    pub fn is_range_error(&self) -> bool {
        matches!(self, ConversionError::OutOfRange { .. })
    }

    /// True for the ConfigurationError family (bad options, not a bad value).
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, ConversionError::InvalidDecimals { .. })
    }
}

// =============================================================================
// Config Error
// =============================================================================

/// Configuration loading errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ConversionError.
pub type ConversionResult<T> = Result<T, ConversionError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConversionError::OutOfRange {
            value: "1000000000".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Number must be between 0 and 999999999, got 1000000000"
        );

        let err = ConversionError::InvalidDecimals { decimals: 11 };
        assert_eq!(err.to_string(), "Decimals must be between 0 and 10, got 11");
    }

    #[test]
    fn test_error_classification() {
        let range = ConversionError::OutOfRange {
            value: "-1".to_string(),
        };
        assert!(range.is_range_error());
        assert!(!range.is_configuration_error());

        let config = ConversionError::InvalidDecimals { decimals: 11 };
        assert!(config.is_configuration_error());
        assert!(!config.is_range_error());

        let parse = ConversionError::InvalidAmount {
            input: "abc".to_string(),
            reason: "not a number".to_string(),
        };
        assert!(!parse.is_range_error());
        assert!(!parse.is_configuration_error());
    }
}
