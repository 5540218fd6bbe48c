//! # Validation Module
//!
//! Input validation for conversion calls.
//!
//! ## Validation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  to_words / to_money / to_invoice                                       │
//! │       │                                                                 │
//! │       ├── validate_decimals()      → InvalidDecimals   (before anything)│
//! │       │                                                                 │
//! │       ├── rounded value < 0?       → OutOfRange                         │
//! │       │                                                                 │
//! │       ├── validate_integer_part()  → OutOfRange                         │
//! │       │                                                                 │
//! │       └── OK → compose words                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ConversionError, ConversionResult};
use crate::{MAX_DECIMALS, MAX_NUMBER};

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a decimal precision.
///
/// ## Example
/// ```rust
/// use letras_core::validation::validate_decimals;
///
/// assert!(validate_decimals(2).is_ok());
/// assert!(validate_decimals(10).is_ok());
/// assert!(validate_decimals(11).is_err());
/// ```
pub fn validate_decimals(decimals: u32) -> ConversionResult<()> {
    if decimals > MAX_DECIMALS {
        return Err(ConversionError::InvalidDecimals { decimals });
    }
    Ok(())
}

/// Validates an integer to be spelled out.
///
/// The lower bound is enforced by the unsigned type; negative amounts are
/// rejected earlier, when the decimal value is split.
pub fn validate_integer_part(n: u64) -> ConversionResult<()> {
    if n > MAX_NUMBER {
        return Err(ConversionError::OutOfRange {
            value: n.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_decimals() {
        for d in 0..=MAX_DECIMALS {
            assert!(validate_decimals(d).is_ok());
        }
        assert_eq!(
            validate_decimals(11),
            Err(ConversionError::InvalidDecimals { decimals: 11 })
        );
    }

    #[test]
    fn test_validate_integer_part() {
        assert!(validate_integer_part(0).is_ok());
        assert!(validate_integer_part(MAX_NUMBER).is_ok());
        assert!(validate_integer_part(MAX_NUMBER + 1).unwrap_err().is_range_error());
    }
}
