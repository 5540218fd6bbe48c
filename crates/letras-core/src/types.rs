//! # Domain Types
//!
//! Data transfer objects for callers that drive the formatter from
//! outside Rust (the web demo, the CLI's `--json` mode).
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ConversionRequest                          ConversionResponse          │
//! │  ─────────────────                          ──────────────────          │
//! │  value: "121.34"     ──► NumberFormatter ──► text: "CIENTO VEINTIUNO   │
//! │  decimals: 2              ::convert()              Y 34/100 SOLES"     │
//! │  mode: Invoice                                mode: Invoice             │
//! │  currency: "SOLES"                                                      │
//! │  cents: ""                                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Decimal values travel as strings so no precision is lost in JSON.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::DEFAULT_DECIMALS;

// =============================================================================
// Output Mode
// =============================================================================

/// Which of the three phrasings to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// "MIL DOSCIENTOS TREINTA Y CUATRO CON CINCUENTA Y SEIS"
    Words,
    /// "DIEZ SOLES CON CINCUENTA CENTIMOS"
    Money,
    /// "CIEN Y 00/100 SOLES" (never apocopated)
    Invoice,
}

impl OutputMode {
    /// Returns the mode as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Words => "words",
            OutputMode::Money => "money",
            OutputMode::Invoice => "invoice",
        }
    }
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Request / Response
// =============================================================================

/// One conversion call, as supplied by an external caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConversionRequest {
    /// Amount to convert, e.g. "1234.56"
    #[ts(type = "string")]
    pub value: Decimal,

    /// Fractional digits to keep (0-10)
    #[serde(default = "default_decimals")]
    pub decimals: u32,

    pub mode: OutputMode,

    /// Currency name (money and invoice modes)
    #[serde(default)]
    pub currency: String,

    /// Cents unit name (money mode)
    #[serde(default)]
    pub cents: String,
}

fn default_decimals() -> u32 {
    DEFAULT_DECIMALS
}

impl ConversionRequest {
    /// Request with default precision and no unit names.
    pub fn new(value: Decimal, mode: OutputMode) -> Self {
        ConversionRequest {
            value,
            decimals: DEFAULT_DECIMALS,
            mode,
            currency: String::new(),
            cents: String::new(),
        }
    }

    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_cents(mut self, cents: impl Into<String>) -> Self {
        self.cents = cents.into();
        self
    }
}

/// Result of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConversionResponse {
    pub text: String,
    pub mode: OutputMode,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_mode_serialization() {
        let json = serde_json::to_string(&OutputMode::Invoice).unwrap();
        assert_eq!(json, "\"invoice\"");
        assert_eq!(OutputMode::Money.to_string(), "money");
    }

    #[test]
    fn test_request_from_json_defaults() {
        let request: ConversionRequest =
            serde_json::from_str(r#"{"value":"121.34","mode":"words"}"#).unwrap();
        assert_eq!(request.value, dec!(121.34));
        assert_eq!(request.decimals, 2);
        assert_eq!(request.mode, OutputMode::Words);
        assert!(request.currency.is_empty());
        assert!(request.cents.is_empty());
    }

    #[test]
    fn test_request_value_serializes_as_string() {
        let request = ConversionRequest::new(dec!(10.50), OutputMode::Money)
            .with_currency("SOLES")
            .with_cents("CENTIMOS");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["value"], "10.50");
        assert_eq!(json["currency"], "SOLES");
    }
}
