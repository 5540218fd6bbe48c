//! # Amount Module
//!
//! Splits a decimal value into an integer part and a fractional digit
//! string using fixed-point arithmetic.
//!
//! ## Why Decimal?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  f64 1.005 is really 1.00499999999999989...                             │
//! │    format "{:.2}" → "1.00"   ❌ one cent lost in the words               │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal                                             │
//! │    dec!(1.005) rounded half-up to 2 places → 1.01  ✅                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Rule
//! Round half-up (`MidpointAwayFromZero`), then check the sign. A negative
//! value that rounds to zero (`-0.001` at 2 places) is read as zero; any
//! other negative result is out of range.
//!
//! ## Usage
//! ```rust
//! use letras_core::amount::SplitAmount;
//! use rust_decimal::Decimal;
//! use std::str::FromStr;
//!
//! let split = SplitAmount::split(Decimal::from_str("1000.05").unwrap(), 2).unwrap();
//! assert_eq!(split.integer(), 1000);
//! assert_eq!(split.fraction_digits(), "05");
//! assert_eq!(split.fraction_value(), 5);
//! ```

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{ConversionError, ConversionResult};
use crate::validation::{validate_decimals, validate_integer_part};

// =============================================================================
// Split Amount
// =============================================================================

/// A value rounded to a fixed number of decimals, split at the point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitAmount {
    integer: u64,
    fraction: String,
}

impl SplitAmount {
    /// Rounds `value` to `decimals` places and splits it.
    ///
    /// ## Errors
    /// - `InvalidDecimals` when `decimals > 10` (checked first)
    /// - `OutOfRange` when the rounded value is negative or its integer
    ///   part exceeds 999,999,999
    pub fn split(value: Decimal, decimals: u32) -> ConversionResult<Self> {
        validate_decimals(decimals)?;

        let rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            return Err(ConversionError::OutOfRange {
                value: value.to_string(),
            });
        }
        // -0.001 at 2 places rounds to -0.00
        let rounded = if rounded.is_zero() { Decimal::ZERO } else { rounded };
        let whole = rounded.trunc();

        let integer = whole.to_u64().ok_or_else(|| ConversionError::OutOfRange {
            value: value.to_string(),
        })?;
        validate_integer_part(integer)?;

        let fraction = if decimals == 0 {
            String::new()
        } else {
            let scale = Decimal::from(10u64.pow(decimals));
            let digits = ((rounded - whole) * scale)
                .trunc()
                .to_u64()
                .ok_or_else(|| ConversionError::OutOfRange {
                    value: value.to_string(),
                })?;
            format!("{:0width$}", digits, width = decimals as usize)
        };

        Ok(SplitAmount { integer, fraction })
    }

    /// Integer part, already range-checked.
    #[inline]
    pub fn integer(&self) -> u64 {
        self.integer
    }

    /// Fractional digits, zero-padded to the requested precision.
    /// Empty when the precision is zero.
    #[inline]
    pub fn fraction_digits(&self) -> &str {
        &self.fraction
    }

    /// Fractional digits read as an integer ("05" → 5).
    pub fn fraction_value(&self) -> u64 {
        self.fraction
            .bytes()
            .fold(0u64, |acc, b| acc * 10 + u64::from(b - b'0'))
    }

    /// True when there is a non-zero fractional part.
    #[inline]
    pub fn has_fraction(&self) -> bool {
        self.fraction_value() > 0
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses user-supplied text into a decimal amount.
///
/// Accepts plain (`1234.56`) and scientific (`1.5e3`) notation, with
/// surrounding whitespace ignored.
///
/// ## Example
/// ```rust
/// use letras_core::amount::parse_amount;
///
/// assert_eq!(parse_amount(" 121.34 ").unwrap().to_string(), "121.34");
/// assert!(parse_amount("doce").is_err());
/// ```
pub fn parse_amount(input: &str) -> ConversionResult<Decimal> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(ConversionError::InvalidAmount {
            input: input.to_string(),
            reason: "empty input".to_string(),
        });
    }

    let parsed = if trimmed.contains(['e', 'E']) {
        Decimal::from_scientific(trimmed)
    } else {
        Decimal::from_str(trimmed)
    };

    parsed.map_err(|e| ConversionError::InvalidAmount {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
