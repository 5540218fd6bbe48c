//! # Apocope Transformer
//!
//! Rewrites an already rendered phrase so a trailing "UNO" becomes "UN".
//!
//! ## Rules (in precedence order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "UNO"               → "UN"           exact phrase                      │
//! │  "...VEINTIUNO"      → "...VEINTIÚN"  accent changes, not truncation    │
//! │  "... Y UNO"         → "... Y UN"                                       │
//! │  "... UNO"           → "... UN"       e.g. CIENTO UNO → CIENTO UN        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The grammar in [`crate::segment`] stays free of an apocope flag; this
//! rewrite runs afterwards. Only whole trailing tokens are touched, so
//! interior words like "VEINTIUNO MIL" or "UNOS" are never rewritten.
//! Applying it twice gives the same result as applying it once.

/// Applies apocope to a rendered phrase.
///
/// ## Example
/// ```rust
/// use letras_core::apocope::apply_apocope;
///
/// assert_eq!(apply_apocope("UNO"), "UN");
/// assert_eq!(apply_apocope("VEINTIUNO"), "VEINTIÚN");
/// assert_eq!(apply_apocope("TREINTA Y UNO"), "TREINTA Y UN");
/// assert_eq!(apply_apocope("CIENTO UNO"), "CIENTO UN");
/// assert_eq!(apply_apocope("DOS"), "DOS");
/// ```
pub fn apply_apocope(words: &str) -> String {
    if words == "UNO" {
        return "UN".to_string();
    }

    let Some(head) = words.strip_suffix("UNO") else {
        return words.to_string();
    };

    if head.ends_with("VEINTI") && is_word_start(head, head.len() - "VEINTI".len()) {
        return format!("{head}ÚN");
    }

    // " Y UNO" and any other " UNO" tail share the same truncation
    if head.ends_with(' ') {
        return format!("{head}UN");
    }

    words.to_string()
}

/// True when `idx` is at the start of `text` or right after a space.
fn is_word_start(text: &str, idx: usize) -> bool {
    idx == 0 || text[..idx].ends_with(' ')
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::{convert_segment, MAX_SEGMENT};

    #[test]
    fn test_uno_family() {
        assert_eq!(apply_apocope("UNO"), "UN");
        assert_eq!(apply_apocope("VEINTIUNO"), "VEINTIÚN");
        assert_eq!(apply_apocope("CIENTO VEINTIUNO"), "CIENTO VEINTIÚN");
        assert_eq!(apply_apocope("TREINTA Y UNO"), "TREINTA Y UN");
        assert_eq!(apply_apocope("NOVENTA Y UNO"), "NOVENTA Y UN");
        assert_eq!(apply_apocope("CIENTO UNO"), "CIENTO UN");
        assert_eq!(apply_apocope("DOSCIENTOS UNO"), "DOSCIENTOS UN");
        assert_eq!(apply_apocope("MIL UNO"), "MIL UN");
    }

    #[test]
    fn test_leaves_other_phrases_alone() {
        assert_eq!(apply_apocope(""), "");
        assert_eq!(apply_apocope("DOS"), "DOS");
        assert_eq!(apply_apocope("ONCE"), "ONCE");
        assert_eq!(apply_apocope("VEINTIDÓS"), "VEINTIDÓS");
        assert_eq!(apply_apocope("CIENTO DIEZ"), "CIENTO DIEZ");
    }

    #[test]
    fn test_only_trailing_tokens_change() {
        // Interior "VEINTIUNO" belongs to a multiplier group
        assert_eq!(apply_apocope("VEINTIUNO MIL"), "VEINTIUNO MIL");
        assert_eq!(
            apply_apocope("VEINTIUNO MIL TREINTA Y UNO"),
            "VEINTIUNO MIL TREINTA Y UN"
        );
        // Not a standalone token
        assert_eq!(apply_apocope("ALGUNO"), "ALGUNO");
    }

    #[test]
    fn test_idempotent() {
        for n in 0..=MAX_SEGMENT {
            let once = apply_apocope(&convert_segment(n));
            assert_eq!(apply_apocope(&once), once, "n = {n}");
        }
    }

    #[test]
    fn test_only_segments_ending_in_one_change() {
        for n in 0..=MAX_SEGMENT {
            let base = convert_segment(n);
            let changed = apply_apocope(&base) != base;
            assert_eq!(changed, n % 10 == 1 && n % 100 != 11, "n = {n}: {base}");
        }
    }
}
