//! # Lexicon
//!
//! Static word tables for Spanish numerals, with the accents the RAE
//! requires (DIECISÉIS, VEINTIDÓS, VEINTITRÉS, VEINTISÉIS).
//!
//! ## Table Domains
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Table      Domain                 Example                              │
//! │  ─────────  ─────────────────────  ───────────────────────────────      │
//! │  units      0..=20                 16 → DIECISÉIS  (0 → "")             │
//! │  veintena   21..=29                22 → VEINTIDÓS  (single fused word)  │
//! │  decena     30, 40, ..., 90        70 → SETENTA                         │
//! │  centena    200, 300, ..., 900     500 → QUINIENTOS                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lookups are total for their domain. Callers guarantee membership; a
//! value outside the domain is a programming error and panics on the
//! slice index, it is never reachable from user input.

/// Units 0–20. Index 0 is the empty string, used only internally.
const UNITS: [&str; 21] = [
    "",
    "UNO",
    "DOS",
    "TRES",
    "CUATRO",
    "CINCO",
    "SEIS",
    "SIETE",
    "OCHO",
    "NUEVE",
    "DIEZ",
    "ONCE",
    "DOCE",
    "TRECE",
    "CATORCE",
    "QUINCE",
    "DIECISÉIS",
    "DIECISIETE",
    "DIECIOCHO",
    "DIECINUEVE",
    "VEINTE",
];

/// 21–29, indexed by `n - 21`.
const VEINTENA: [&str; 9] = [
    "VEINTIUNO",
    "VEINTIDÓS",
    "VEINTITRÉS",
    "VEINTICUATRO",
    "VEINTICINCO",
    "VEINTISÉIS",
    "VEINTISIETE",
    "VEINTIOCHO",
    "VEINTINUEVE",
];

/// 30–90, indexed by `n / 10 - 3`.
const DECENA: [&str; 7] = [
    "TREINTA",
    "CUARENTA",
    "CINCUENTA",
    "SESENTA",
    "SETENTA",
    "OCHENTA",
    "NOVENTA",
];

/// 200–900, indexed by `n / 100 - 2`.
const CENTENA: [&str; 8] = [
    "DOSCIENTOS",
    "TRESCIENTOS",
    "CUATROCIENTOS",
    "QUINIENTOS",
    "SEISCIENTOS",
    "SETECIENTOS",
    "OCHOCIENTOS",
    "NOVECIENTOS",
];

/// Exactly one hundred.
pub const CIEN: &str = "CIEN";

/// Hundred prefix for 101–199.
pub const CIENTO: &str = "CIENTO";

/// Word for `n` in `0..=20`.
#[inline]
pub fn unit(n: u16) -> &'static str {
    debug_assert!(n <= 20, "unit() called with {n}");
    UNITS[n as usize]
}

/// Fused word for `n` in `21..=29`.
#[inline]
pub fn veintena(n: u16) -> &'static str {
    debug_assert!((21..=29).contains(&n), "veintena() called with {n}");
    VEINTENA[(n - 21) as usize]
}

/// Word for a multiple of ten in `30..=90`.
#[inline]
pub fn decena(n: u16) -> &'static str {
    debug_assert!(n % 10 == 0 && (30..=90).contains(&n), "decena() called with {n}");
    DECENA[(n / 10 - 3) as usize]
}

/// Word for a multiple of one hundred in `200..=900`.
#[inline]
pub fn centena(n: u16) -> &'static str {
    debug_assert!(n % 100 == 0 && (200..=900).contains(&n), "centena() called with {n}");
    CENTENA[(n / 100 - 2) as usize]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_table() {
        assert_eq!(unit(0), "");
        assert_eq!(unit(1), "UNO");
        assert_eq!(unit(15), "QUINCE");
        assert_eq!(unit(16), "DIECISÉIS");
        assert_eq!(unit(20), "VEINTE");
    }

    #[test]
    fn test_veintena_accents() {
        // Mandatory tildes
        assert_eq!(veintena(22), "VEINTIDÓS");
        assert_eq!(veintena(23), "VEINTITRÉS");
        assert_eq!(veintena(26), "VEINTISÉIS");

        // No tilde
        for n in [21, 24, 25, 27, 28, 29] {
            let word = veintena(n);
            assert!(word.is_ascii(), "{n} → {word} should carry no accent");
        }
    }

    #[test]
    fn test_decena_and_centena() {
        assert_eq!(decena(30), "TREINTA");
        assert_eq!(decena(90), "NOVENTA");
        assert_eq!(centena(200), "DOSCIENTOS");
        assert_eq!(centena(500), "QUINIENTOS");
        assert_eq!(centena(900), "NOVECIENTOS");
    }
}
