//! sRGB gamut boundary search in Oklch
//!
//! The sRGB gamut is an irregular solid in Oklab space: the maximum
//! displayable chroma depends on both hue and lightness, and there is
//! no closed form for it. This module finds the boundary by bisection
//! on the chroma axis, probing candidate colors through the Oklab to
//! linear RGB transform and checking the channels for range.
//!
//! The search is deliberately simple: a bracketed bisection with an
//! explicit tolerance and step cap, returning the last known in-gamut
//! chroma. When the cap is hit the result is a slightly conservative
//! but always displayable chroma, never an error.

use std::collections::HashMap;

use super::linear::LinearRgb;
use super::oklab::Oklab;
use super::oklch::Oklch;

/// Slack allowed on linear RGB channels during gamut probes.
///
/// The Oklab matrices are published to 10 digits, so exact boundary
/// colors can land a hair outside `0.0..=1.0` after the round trip.
const GAMUT_EPSILON: f64 = 1e-6;

/// Upper end of the chroma bracket for the bisection.
///
/// No sRGB color exceeds chroma ~0.323 in Oklch; 0.4 covers the whole
/// gamut with margin.
const CHROMA_BRACKET_MAX: f64 = 0.4;

/// Tuning parameters for the chroma boundary bisection.
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    /// Stop once the bracket width drops below this (in chroma units).
    pub tolerance: f64,
    /// Hard cap on bisection steps, reached only with very small
    /// tolerances.
    pub max_steps: u32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            tolerance: 1e-4,
            max_steps: 20,
        }
    }
}

/// Check whether an Oklab color lies inside the sRGB gamut.
///
/// Converts to linear RGB and verifies every channel is within
/// `0.0..=1.0`, give or take [`GAMUT_EPSILON`].
pub fn in_gamut(lab: Oklab) -> bool {
    let rgb = LinearRgb::from(lab);
    let ok = |v: f64| (-GAMUT_EPSILON..=1.0 + GAMUT_EPSILON).contains(&v);
    ok(rgb.r) && ok(rgb.g) && ok(rgb.b)
}

/// Find the maximum sRGB-displayable chroma for a hue/lightness pair.
///
/// # Arguments
/// * `hue` - Oklch hue angle in degrees
/// * `lightness` - Oklab lightness
/// * `options` - Bisection tolerance and step cap
///
/// # Returns
///
/// The largest chroma known to be in gamut, within `options.tolerance`
/// of the true boundary. At or beyond the lightness extremes (black and
/// white) the gamut collapses to the grey axis and the result is `0.0`.
pub fn max_chroma(hue: f64, lightness: f64, options: &SearchOptions) -> f64 {
    if lightness <= 0.0 || lightness >= 1.0 {
        return 0.0;
    }

    let probe = |c: f64| in_gamut(Oklab::from(Oklch::new(lightness, c, hue)));

    // The bracket upper end is outside the gamut for every sRGB
    // hue/lightness; treat a passing probe as "entire bracket fits".
    if probe(CHROMA_BRACKET_MAX) {
        return CHROMA_BRACKET_MAX;
    }

    // Invariant: lo is in gamut, hi is out.
    let mut lo = 0.0;
    let mut hi = CHROMA_BRACKET_MAX;
    for _ in 0..options.max_steps {
        if hi - lo <= options.tolerance {
            break;
        }
        let mid = 0.5 * (lo + hi);
        if probe(mid) {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    lo
}

/// Memo table for [`max_chroma`] results.
///
/// The bisection runs a dozen matrix transforms per query, and palette
/// generation asks for the same hue/lightness pairs repeatedly while
/// adjusting candidates. Callers own the cache and pass it to whatever
/// conversions need one, which keeps the conversion functions pure.
///
/// Keys are exact bit patterns of the inputs: a lookup only hits for
/// byte-identical hue and lightness, never for "close enough" ones.
#[derive(Debug, Clone)]
pub struct ChromaCache {
    options: SearchOptions,
    entries: HashMap<(u64, u64), f64>,
}

impl ChromaCache {
    /// Create a cache using the default search options.
    pub fn new() -> Self {
        Self::with_options(SearchOptions::default())
    }

    /// Create a cache with explicit search options.
    pub fn with_options(options: SearchOptions) -> Self {
        Self {
            options,
            entries: HashMap::new(),
        }
    }

    /// Cached [`max_chroma`] lookup.
    pub fn max_chroma(&mut self, hue: f64, lightness: f64) -> f64 {
        let key = (hue.to_bits(), lightness.to_bits());
        *self
            .entries
            .entry(key)
            .or_insert_with(|| max_chroma(hue, lightness, &self.options))
    }

    /// Number of cached boundary results.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no boundary has been computed yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ChromaCache {
    fn default() -> Self {
        Self::new()
    }
}
