//! # Scale Composer
//!
//! Combines segment words across the thousand and million scales.
//!
//! ## Decomposition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   123 456 789                                                           │
//! │   ─┬─ ─┬─ ─┬─                                                           │
//! │    │   │   └── remainder   → segment words (apocope if enabled)         │
//! │    │   └────── thousands   → "MIL" | segment + " MIL" (never apocope)   │
//! │    └────────── millions    → "UN MILLÓN" | segment + " MILLONES"        │
//! │                              (apocope if enabled)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Apocope Asymmetry
//! With apocope on, 21,000,000 is "VEINTIÚN MILLONES" but 21,000 stays
//! "VEINTIUNO MIL". The millions count and the final segment are
//! apocopated; the thousands multiplier never is.

use crate::apocope::apply_apocope;
use crate::cache::SegmentCache;
use crate::error::ConversionResult;
use crate::validation::validate_integer_part;

const THOUSAND: u64 = 1_000;
const MILLION: u64 = 1_000_000;

/// Composes words for integers in `0..=999_999_999`.
#[derive(Debug, Clone, Copy)]
pub struct ScaleComposer {
    cache: &'static SegmentCache,
    apocope: bool,
}

impl ScaleComposer {
    /// Creates a composer backed by the shared segment cache.
    pub fn new(apocope: bool) -> Self {
        ScaleComposer {
            cache: SegmentCache::global(),
            apocope,
        }
    }

    /// Whether this composer applies apocope.
    #[inline]
    pub fn apocope(&self) -> bool {
        self.apocope
    }

    /// Converts `n` to words. Zero yields the empty string.
    ///
    /// ## Errors
    /// [`ConversionError::OutOfRange`](crate::ConversionError::OutOfRange)
    /// when `n > 999_999_999`.
    ///
    /// ## Example
    /// ```rust
    /// use letras_core::scale::ScaleComposer;
    ///
    /// let composer = ScaleComposer::new(false);
    /// assert_eq!(composer.compose(1_000).unwrap(), "MIL");
    /// assert_eq!(composer.compose(1_000_000).unwrap(), "UN MILLÓN");
    /// assert_eq!(composer.compose(2_000_000).unwrap(), "DOS MILLONES");
    /// ```
    pub fn compose(&self, n: u64) -> ConversionResult<String> {
        validate_integer_part(n)?;

        let words = if n == 0 {
            String::new()
        } else if n < THOUSAND {
            self.final_segment(n)
        } else if n < MILLION {
            self.thousands(n)
        } else {
            self.millions(n)
        };

        Ok(words)
    }

    /// `1_000..=999_999`
    fn thousands(&self, n: u64) -> String {
        let count = n / THOUSAND;
        let rem = n % THOUSAND;

        let mut words = if count == 1 {
            "MIL".to_string()
        } else {
            format!("{} MIL", self.segment(count))
        };

        if rem > 0 {
            words.push(' ');
            words.push_str(&self.final_segment(rem));
        }

        words
    }

    /// `1_000_000..=999_999_999`
    fn millions(&self, n: u64) -> String {
        let count = n / MILLION;
        let rem = n % MILLION;

        let mut words = if count == 1 {
            "UN MILLÓN".to_string()
        } else {
            format!("{} MILLONES", self.final_segment(count))
        };

        if rem >= THOUSAND {
            words.push(' ');
            words.push_str(&self.thousands(rem));
        } else if rem > 0 {
            words.push(' ');
            words.push_str(&self.final_segment(rem));
        }

        words
    }

    /// Raw cached words, never apocopated.
    #[inline]
    fn segment(&self, n: u64) -> &str {
        self.cache.get(n as u16)
    }

    /// Cached words with apocope applied when enabled.
    fn final_segment(&self, n: u64) -> String {
        let words = self.segment(n);
        if self.apocope {
            apply_apocope(words)
        } else {
            words.to_string()
        }
    }
}

impl Default for ScaleComposer {
    fn default() -> Self {
        ScaleComposer::new(false)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_NUMBER;

    fn plain(n: u64) -> String {
        ScaleComposer::new(false).compose(n).unwrap()
    }

    fn apocopated(n: u64) -> String {
        ScaleComposer::new(true).compose(n).unwrap()
    }

    #[test]
    fn test_zero_contributes_nothing() {
        assert_eq!(plain(0), "");
        assert_eq!(apocopated(0), "");
    }

    #[test]
    fn test_thousands() {
        let cases = [
            (1000, "MIL"),
            (1001, "MIL UNO"),
            (1010, "MIL DIEZ"),
            (1100, "MIL CIEN"),
            (1101, "MIL CIENTO UNO"),
            (1234, "MIL DOSCIENTOS TREINTA Y CUATRO"),
            (1999, "MIL NOVECIENTOS NOVENTA Y NUEVE"),
            (2000, "DOS MIL"),
            (2222, "DOS MIL DOSCIENTOS VEINTIDÓS"),
            (5678, "CINCO MIL SEISCIENTOS SETENTA Y OCHO"),
            (10001, "DIEZ MIL UNO"),
            (12345, "DOCE MIL TRESCIENTOS CUARENTA Y CINCO"),
            (100000, "CIEN MIL"),
            (100001, "CIEN MIL UNO"),
            (123456, "CIENTO VEINTITRÉS MIL CUATROCIENTOS CINCUENTA Y SEIS"),
            (999999, "NOVECIENTOS NOVENTA Y NUEVE MIL NOVECIENTOS NOVENTA Y NUEVE"),
        ];
        for (n, expected) in cases {
            assert_eq!(plain(n), expected, "n = {n}");
        }
    }

    #[test]
    fn test_millions() {
        let cases = [
            (1000000, "UN MILLÓN"),
            (1000001, "UN MILLÓN UNO"),
            (1000010, "UN MILLÓN DIEZ"),
            (1001000, "UN MILLÓN MIL"),
            (
                1234567,
                "UN MILLÓN DOSCIENTOS TREINTA Y CUATRO MIL QUINIENTOS SESENTA Y SIETE",
            ),
            (2000000, "DOS MILLONES"),
            (2000001, "DOS MILLONES UNO"),
            (2500000, "DOS MILLONES QUINIENTOS MIL"),
            (10000000, "DIEZ MILLONES"),
            (100000000, "CIEN MILLONES"),
            (100100100, "CIEN MILLONES CIEN MIL CIEN"),
            (999000999, "NOVECIENTOS NOVENTA Y NUEVE MILLONES NOVECIENTOS NOVENTA Y NUEVE"),
            (
                999999999,
                "NOVECIENTOS NOVENTA Y NUEVE MILLONES NOVECIENTOS NOVENTA Y NUEVE MIL \
                 NOVECIENTOS NOVENTA Y NUEVE",
            ),
        ];
        for (n, expected) in cases {
            assert_eq!(plain(n), expected, "n = {n}");
        }
    }

    #[test]
    fn test_apocope_asymmetry() {
        // Thousands multiplier keeps UNO, final segment is truncated
        assert_eq!(apocopated(21000), "VEINTIUNO MIL");
        assert_eq!(apocopated(21021), "VEINTIUNO MIL VEINTIÚN");
        assert_eq!(apocopated(1001), "MIL UN");

        // Millions count is truncated
        assert_eq!(apocopated(21000000), "VEINTIÚN MILLONES");
        assert_eq!(apocopated(31000000), "TREINTA Y UN MILLONES");
        assert_eq!(apocopated(101000000), "CIENTO UN MILLONES");
        assert_eq!(
            apocopated(21021021),
            "VEINTIÚN MILLONES VEINTIUNO MIL VEINTIÚN"
        );
        assert_eq!(apocopated(1000001), "UN MILLÓN UN");

        // Without apocope every form keeps UNO
        assert_eq!(plain(21000000), "VEINTIUNO MILLONES");
        assert_eq!(plain(21021021), "VEINTIUNO MILLONES VEINTIUNO MIL VEINTIUNO");
    }

    #[test]
    fn test_out_of_range() {
        let composer = ScaleComposer::default();
        assert!(composer.compose(MAX_NUMBER).is_ok());

        let err = composer.compose(MAX_NUMBER + 1).unwrap_err();
        assert!(err.is_range_error());
    }

    #[test]
    fn test_non_empty_and_deterministic_across_range() {
        let composer = ScaleComposer::default();
        // Stride sweep over the whole domain
        let mut n = 1u64;
        while n <= MAX_NUMBER {
            let first = composer.compose(n).unwrap();
            assert!(!first.is_empty(), "n = {n}");
            assert_eq!(composer.compose(n).unwrap(), first);
            if n >= 1_000_000 {
                assert!(first.contains("MILL"), "n = {n}: {first}");
            } else if n >= 1_000 {
                assert!(first.contains("MIL"), "n = {n}: {first}");
            }
            n += 7_919_993;
        }
    }

    #[test]
    fn test_accents_survive_every_scale() {
        let composer = ScaleComposer::default();
        let expected = [
            (16, "DIECISÉIS"),
            (22, "VEINTIDÓS"),
            (23, "VEINTITRÉS"),
            (26, "VEINTISÉIS"),
        ];
        for (tail, word) in expected {
            for scale in [0u64, 100, 300, 1_000, 10_000, 100_000, 1_000_000, 45_000_000] {
                let n = scale + tail;
                let words = composer.compose(n).unwrap();
                assert!(words.contains(word), "n = {n}: {words}");
            }
        }
    }
}
