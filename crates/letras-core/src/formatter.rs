//! # Formatter
//!
//! Public entry point: the three output modes built on the scale composer.
//!
//! ## Output Modes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Mode      Input              Output                                    │
//! │  ───────   ────────────────   ───────────────────────────────────────   │
//! │  words     1234.56            MIL DOSCIENTOS TREINTA Y CUATRO           │
//! │                               CON CINCUENTA Y SEIS                      │
//! │  money     10.50 SOLES/CTS    DIEZ SOLES CON CINCUENTA CENTIMOS         │
//! │  money     1000.00            MIL SOLES             (no zero cents)     │
//! │  invoice   121.34 SOLES       CIENTO VEINTIUNO Y 34/100 SOLES           │
//! │                               (never apocopated, always NN/100)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## User Workflow
//! ```text
//! value, decimals
//!      │
//!      ▼
//! SplitAmount::split  ── InvalidDecimals / OutOfRange ──► error, no text
//!      │
//!      ├── integer  ──► ScaleComposer ──► "CERO" when zero
//!      │
//!      └── fraction ──► ScaleComposer (words, money) | "NN/100" (invoice)
//!      │
//!      ▼
//! join with " CON " (configurable) or " Y " (invoice)
//! ```
//!
//! Instances are cheap: they hold two settings and share the global
//! segment cache. Use separate instances for different settings on
//! different threads.

use rust_decimal::Decimal;
use tracing::debug;

use crate::amount::SplitAmount;
use crate::config::FormatterConfig;
use crate::error::ConversionResult;
use crate::scale::ScaleComposer;
use crate::types::{ConversionRequest, ConversionResponse, OutputMode};
use crate::validation::validate_decimals;
use crate::DEFAULT_CONNECTOR;

/// Word for an integer part of zero.
pub const ZERO_WORD: &str = "CERO";

/// Joins invoice integer words and the numeral fraction.
const INVOICE_JOINER: &str = "Y";

/// Fraction digits shown on invoices ("NN/100").
const INVOICE_DECIMALS: u32 = 2;

// =============================================================================
// Number Formatter
// =============================================================================

/// Converts amounts to Spanish words.
///
/// ## Example
/// ```rust
/// use letras_core::NumberFormatter;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let formatter = NumberFormatter::new();
/// let value = Decimal::from_str("1234.56").unwrap();
/// assert_eq!(
///     formatter.to_words(value, 2).unwrap(),
///     "MIL DOSCIENTOS TREINTA Y CUATRO CON CINCUENTA Y SEIS"
/// );
///
/// let formatter = NumberFormatter::new().with_apocope(true);
/// assert_eq!(formatter.to_words(Decimal::from(21), 2).unwrap(), "VEINTIÚN");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormatter {
    connector: String,
    apocope: bool,
}

impl Default for NumberFormatter {
    fn default() -> Self {
        NumberFormatter::with_config(FormatterConfig::default())
    }
}

impl NumberFormatter {
    /// Formatter with connector "CON" and apocope off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Formatter with the given settings.
    pub fn with_config(config: FormatterConfig) -> Self {
        NumberFormatter {
            connector: config.connector,
            apocope: config.apocope,
        }
    }

    /// Builder-style connector override.
    pub fn with_connector(mut self, connector: impl Into<String>) -> Self {
        self.connector = connector.into();
        self
    }

    /// Builder-style apocope override.
    pub fn with_apocope(mut self, apocope: bool) -> Self {
        self.apocope = apocope;
        self
    }

    pub fn set_connector(&mut self, connector: impl Into<String>) {
        self.connector = connector.into();
    }

    pub fn set_apocope(&mut self, apocope: bool) {
        self.apocope = apocope;
    }

    pub fn connector(&self) -> &str {
        &self.connector
    }

    pub fn apocope(&self) -> bool {
        self.apocope
    }

    /// Current settings as a serializable config.
    pub fn config(&self) -> FormatterConfig {
        FormatterConfig {
            connector: self.connector.clone(),
            apocope: self.apocope,
        }
    }

    // =========================================================================
    // Output Modes
    // =========================================================================

    /// Spells out `value` rounded to `decimals` places.
    ///
    /// A zero fraction is omitted; a non-zero one is read as an integer
    /// ("05" → "CINCO") and joined with the connector.
    ///
    /// ## Errors
    /// - `InvalidDecimals` when `decimals > 10`
    /// - `OutOfRange` when the rounded value is negative or its integer
    ///   part exceeds 999,999,999
    pub fn to_words(&self, value: Decimal, decimals: u32) -> ConversionResult<String> {
        debug!(mode = "words", %value, decimals, "Converting amount");
        validate_decimals(decimals)?;

        let split = SplitAmount::split(value, decimals)?;
        let composer = self.composer();

        let whole = whole_number(&composer, split.integer())?;
        let fraction = if split.has_fraction() {
            composer.compose(split.fraction_value())?
        } else {
            String::new()
        };

        Ok(self.concat(&[whole, fraction]))
    }

    /// Spells out `value` as an amount of money.
    ///
    /// The currency name follows the integer words; the cents name follows
    /// the fraction words, and only when the fraction is non-zero. Both
    /// names are uppercased.
    ///
    /// ## Example
    /// ```rust
    /// use letras_core::NumberFormatter;
    /// use rust_decimal::Decimal;
    ///
    /// let formatter = NumberFormatter::new();
    /// let text = formatter
    ///     .to_money(Decimal::from(1000), 2, "soles", "céntimos")
    ///     .unwrap();
    /// assert_eq!(text, "MIL SOLES");
    /// ```
    pub fn to_money(
        &self,
        value: Decimal,
        decimals: u32,
        currency: &str,
        cents: &str,
    ) -> ConversionResult<String> {
        debug!(mode = "money", %value, decimals, currency, cents, "Converting amount");
        validate_decimals(decimals)?;

        let split = SplitAmount::split(value, decimals)?;
        let composer = self.composer();

        let whole = with_unit(whole_number(&composer, split.integer())?, currency);
        let fraction = if split.has_fraction() {
            with_unit(composer.compose(split.fraction_value())?, cents)
        } else {
            String::new()
        };

        Ok(self.concat(&[whole, fraction]))
    }

    /// Invoice phrasing: integer words, " Y ", the cents as "NN/100", then
    /// the currency name.
    ///
    /// Never apocopated, whatever the instance setting. The fraction is
    /// rounded to at most two places and right-padded to two digits.
    /// With `decimals > 2` the value is rounded to two places first, so
    /// `10.345` at 3 decimals reads "DIEZ Y 35/100".
    ///
    /// ## Example
    /// ```rust
    /// use letras_core::NumberFormatter;
    /// use rust_decimal::Decimal;
    ///
    /// let formatter = NumberFormatter::new().with_apocope(true);
    /// let text = formatter.to_invoice(Decimal::from(100), 2, "SOLES").unwrap();
    /// assert_eq!(text, "CIEN Y 00/100 SOLES");
    /// ```
    pub fn to_invoice(
        &self,
        value: Decimal,
        decimals: u32,
        currency: &str,
    ) -> ConversionResult<String> {
        debug!(mode = "invoice", %value, decimals, currency, "Converting amount");
        validate_decimals(decimals)?;

        let split = SplitAmount::split(value, decimals.min(INVOICE_DECIMALS))?;
        let composer = ScaleComposer::new(false);

        let whole = whole_number(&composer, split.integer())?;
        let fraction = format!("{:0<2}/100", split.fraction_digits());

        Ok(with_unit(
            format!("{whole} {INVOICE_JOINER} {fraction}"),
            currency,
        ))
    }

    /// Compatibility alias for [`to_money`](Self::to_money).
    pub fn to_legacy_string(
        &self,
        value: Decimal,
        decimals: u32,
        whole_label: &str,
        decimal_label: &str,
    ) -> ConversionResult<String> {
        self.to_money(value, decimals, whole_label, decimal_label)
    }

    /// Words for a bare integer, honoring the apocope setting.
    /// Zero yields the empty string.
    pub fn convert_integer(&self, n: u64) -> ConversionResult<String> {
        self.composer().compose(n)
    }

    /// Runs a request from an external caller.
    pub fn convert(&self, request: &ConversionRequest) -> ConversionResult<ConversionResponse> {
        let text = match request.mode {
            OutputMode::Words => self.to_words(request.value, request.decimals)?,
            OutputMode::Money => self.to_money(
                request.value,
                request.decimals,
                &request.currency,
                &request.cents,
            )?,
            OutputMode::Invoice => {
                self.to_invoice(request.value, request.decimals, &request.currency)?
            }
        };

        Ok(ConversionResponse {
            text,
            mode: request.mode,
        })
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn composer(&self) -> ScaleComposer {
        ScaleComposer::new(self.apocope)
    }

    /// Joins non-empty parts with the uppercased connector.
    /// A blank connector falls back to "CON".
    fn concat(&self, parts: &[String]) -> String {
        let parts: Vec<&str> = parts
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .collect();

        let connector = match self.connector.trim() {
            "" => DEFAULT_CONNECTOR,
            c => c,
        };
        let glue = format!(" {} ", connector.to_uppercase());
        parts.join(&glue)
    }
}

/// Integer words, with "CERO" for a zero integer part.
fn whole_number(composer: &ScaleComposer, n: u64) -> ConversionResult<String> {
    if n == 0 {
        return Ok(ZERO_WORD.to_string());
    }
    composer.compose(n)
}

/// Appends an uppercased unit name when there is one.
fn with_unit(words: String, unit: &str) -> String {
    let unit = unit.trim();
    if unit.is_empty() {
        words
    } else {
        format!("{words} {}", unit.to_uppercase())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
