//! # Segment Converter
//!
//! Converts a segment (an integer in `0..=999`) to words. Every larger
//! range reduces to this case.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  n = 0          → ""                                                    │
//! │  n = 100        → "CIEN"                      (terminal)                │
//! │  n ≥ 100        → "CIENTO" | centena[h*100],  n %= 100                  │
//! │  n = 0 now      → hundreds only                                         │
//! │  n ≤ 20         → units[n]                    (teens are table words)   │
//! │  n ≤ 29         → veintena[n]                 (fused, never VEINTE Y)   │
//! │  30..=99        → decena[t] [+ " Y " + units[u]]                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This function never applies apocope; see [`crate::apocope`].

use crate::lexicon;

/// Largest value a segment can hold.
pub const MAX_SEGMENT: u16 = 999;

/// Converts `n` (`0..=999`) to its apocope-free word form.
///
/// ## Example
/// ```rust
/// use letras_core::segment::convert_segment;
///
/// assert_eq!(convert_segment(100), "CIEN");
/// assert_eq!(convert_segment(101), "CIENTO UNO");
/// assert_eq!(convert_segment(222), "DOSCIENTOS VEINTIDÓS");
/// ```
pub fn convert_segment(n: u16) -> String {
    debug_assert!(n <= MAX_SEGMENT, "segment out of range: {n}");

    if n == 0 {
        return String::new();
    }
    if n == 100 {
        return lexicon::CIEN.to_string();
    }

    let mut words: Vec<&'static str> = Vec::with_capacity(4);
    let mut rest = n;

    if rest >= 100 {
        let hundreds = rest / 100;
        words.push(if hundreds == 1 {
            lexicon::CIENTO
        } else {
            lexicon::centena(hundreds * 100)
        });
        rest %= 100;
    }

    if rest > 0 {
        if rest <= 20 {
            words.push(lexicon::unit(rest));
        } else if rest <= 29 {
            words.push(lexicon::veintena(rest));
        } else {
            let tens = rest / 10 * 10;
            let units = rest % 10;
            words.push(lexicon::decena(tens));
            if units > 0 {
                words.push("Y");
                words.push(lexicon::unit(units));
            }
        }
    }

    words.join(" ")
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_empty() {
        assert_eq!(convert_segment(0), "");
    }

    #[test]
    fn test_basic_numbers() {
        let cases = [
            (1, "UNO"),
            (2, "DOS"),
            (9, "NUEVE"),
            (10, "DIEZ"),
            (11, "ONCE"),
            (15, "QUINCE"),
            (16, "DIECISÉIS"),
            (17, "DIECISIETE"),
            (19, "DIECINUEVE"),
            (20, "VEINTE"),
        ];
        for (n, expected) in cases {
            assert_eq!(convert_segment(n), expected, "n = {n}");
        }
    }

    #[test]
    fn test_twenties() {
        let cases = [
            (21, "VEINTIUNO"),
            (22, "VEINTIDÓS"),
            (23, "VEINTITRÉS"),
            (24, "VEINTICUATRO"),
            (25, "VEINTICINCO"),
            (26, "VEINTISÉIS"),
            (27, "VEINTISIETE"),
            (28, "VEINTIOCHO"),
            (29, "VEINTINUEVE"),
        ];
        for (n, expected) in cases {
            assert_eq!(convert_segment(n), expected, "n = {n}");
        }
    }

    #[test]
    fn test_tens() {
        let cases = [
            (30, "TREINTA"),
            (31, "TREINTA Y UNO"),
            (45, "CUARENTA Y CINCO"),
            (59, "CINCUENTA Y NUEVE"),
            (61, "SESENTA Y UNO"),
            (70, "SETENTA"),
            (84, "OCHENTA Y CUATRO"),
            (99, "NOVENTA Y NUEVE"),
        ];
        for (n, expected) in cases {
            assert_eq!(convert_segment(n), expected, "n = {n}");
        }
    }

    #[test]
    fn test_hundreds() {
        let cases = [
            (100, "CIEN"),
            (101, "CIENTO UNO"),
            (110, "CIENTO DIEZ"),
            (121, "CIENTO VEINTIUNO"),
            (150, "CIENTO CINCUENTA"),
            (200, "DOSCIENTOS"),
            (201, "DOSCIENTOS UNO"),
            (333, "TRESCIENTOS TREINTA Y TRES"),
            (444, "CUATROCIENTOS CUARENTA Y CUATRO"),
            (500, "QUINIENTOS"),
            (666, "SEISCIENTOS SESENTA Y SEIS"),
            (777, "SETECIENTOS SETENTA Y SIETE"),
            (888, "OCHOCIENTOS OCHENTA Y OCHO"),
            (901, "NOVECIENTOS UNO"),
            (999, "NOVECIENTOS NOVENTA Y NUEVE"),
        ];
        for (n, expected) in cases {
            assert_eq!(convert_segment(n), expected, "n = {n}");
        }
    }

    #[test]
    fn test_round_hundreds_use_centena_word() {
        for h in 2..=9u16 {
            let words = convert_segment(h * 100);
            assert_eq!(words, lexicon::centena(h * 100));
            assert!(words.ends_with("IENTOS"), "{} → {words}", h * 100);
        }
    }

    #[test]
    fn test_no_stray_whitespace() {
        for n in 1..=MAX_SEGMENT {
            let words = convert_segment(n);
            assert_eq!(words.trim(), words, "n = {n}");
            assert!(!words.contains("  "), "n = {n}");
        }
    }
}
