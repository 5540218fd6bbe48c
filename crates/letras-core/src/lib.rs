//! # letras-core: Spanish Number-to-Words Conversion
//!
//! Converts non-negative amounts up to 999,999,999 into Spanish words,
//! following RAE accentuation, in three phrasings: plain words, money and
//! invoice.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Numero a Letras Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            Callers (letras-cli, web demo via JSON)              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ value, decimals, labels               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ letras-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   formatter ──► amount (fixed-point split)                      │   │
//! │  │       │                                                         │   │
//! │  │       ▼                                                         │   │
//! │  │     scale ──► cache ──► segment ──► lexicon                     │   │
//! │  │       │                                                         │   │
//! │  │       └────► apocope (UNO → UN rewrite)                         │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FLOATS • PURE FUNCTIONS                           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`lexicon`] - Word tables (units, veintena, decena, centena)
//! - [`segment`] - 0–999 to words
//! - [`apocope`] - UNO → UN rewrite
//! - [`cache`] - Shared precomputed segments
//! - [`scale`] - Thousands and millions composition
//! - [`amount`] - Decimal rounding and splitting
//! - [`formatter`] - Words, money and invoice modes
//! - [`validation`] - Input checks
//! - [`config`] - Formatter settings
//! - [`types`] - Request/response DTOs
//! - [`error`] - Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use letras_core::NumberFormatter;
//! use rust_decimal::Decimal;
//! use std::str::FromStr;
//!
//! let formatter = NumberFormatter::new();
//!
//! let amount = Decimal::from_str("121.34").unwrap();
//! assert_eq!(
//!     formatter.to_invoice(amount, 2, "SOLES").unwrap(),
//!     "CIENTO VEINTIUNO Y 34/100 SOLES"
//! );
//!
//! let amount = Decimal::from_str("10.50").unwrap();
//! assert_eq!(
//!     formatter.to_money(amount, 2, "SOLES", "CENTIMOS").unwrap(),
//!     "DIEZ SOLES CON CINCUENTA CENTIMOS"
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod amount;
pub mod apocope;
pub mod cache;
pub mod config;
pub mod error;
pub mod formatter;
pub mod lexicon;
pub mod scale;
pub mod segment;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use amount::{parse_amount, SplitAmount};
pub use config::FormatterConfig;
pub use error::{ConfigError, ConversionError, ConversionResult};
pub use formatter::NumberFormatter;
pub use types::{ConversionRequest, ConversionResponse, OutputMode};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest supported value.
pub const MIN_NUMBER: u64 = 0;

/// Largest supported integer part.
pub const MAX_NUMBER: u64 = 999_999_999;

/// Largest supported decimal precision.
pub const MAX_DECIMALS: u32 = 10;

/// Precision used when the caller doesn't pick one.
pub const DEFAULT_DECIMALS: u32 = 2;

/// Word joining integer and fractional phrases.
pub const DEFAULT_CONNECTOR: &str = "CON";
