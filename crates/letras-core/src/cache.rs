//! # Segment Cache
//!
//! Precomputed apocope-free words for every segment `0..=999`.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  First SegmentCache::global() call (any thread)                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  OnceLock runs build() exactly once; concurrent callers block briefly  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  &'static SegmentCache  ── shared by every NumberFormatter ──►  reads  │
//! │                            (immutable, no locking after init)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entry 0 is the empty string. Zero is rendered as "CERO" by the
//! formatter only when the whole integer part is zero.

use std::sync::OnceLock;

use tracing::debug;

use crate::segment::{convert_segment, MAX_SEGMENT};

/// Number of entries: one per segment value.
pub const CACHE_SIZE: usize = MAX_SEGMENT as usize + 1;

static GLOBAL: OnceLock<SegmentCache> = OnceLock::new();

/// Immutable lookup table of segment words.
#[derive(Debug)]
pub struct SegmentCache {
    entries: Box<[String]>,
}

impl SegmentCache {
    /// Builds a fresh table. Prefer [`SegmentCache::global`].
    pub fn build() -> Self {
        let entries: Box<[String]> = (0..=MAX_SEGMENT).map(convert_segment).collect();
        debug!(entries = entries.len(), "Segment cache built");
        SegmentCache { entries }
    }

    /// Process-wide shared table, built on first use.
    pub fn global() -> &'static SegmentCache {
        GLOBAL.get_or_init(SegmentCache::build)
    }

    /// Words for `n` (`0..=999`).
    ///
    /// ## Example
    /// ```rust
    /// use letras_core::cache::SegmentCache;
    ///
    /// let cache = SegmentCache::global();
    /// assert_eq!(cache.get(121), "CIENTO VEINTIUNO");
    /// assert_eq!(cache.get(0), "");
    /// ```
    #[inline]
    pub fn get(&self, n: u16) -> &str {
        debug_assert!(n <= MAX_SEGMENT, "segment out of range: {n}");
        &self.entries[n as usize]
    }

    /// Number of entries (always [`CACHE_SIZE`]).
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
