//! Palette generation: evenly spaced hues, contrast validation, and
//! bounded adjustment.
//!
//! The algorithm distributes `count` hues uniformly around the Okhsl
//! hue circle (maximal pairwise hue separation), converts each to sRGB,
//! and validates against the background with both contrast metrics.
//! Candidates that fall short get a bounded lightness search toward
//! whichever extreme contrasts better; candidates that quantize to an
//! already-used hex value get deterministic lightness nudges.
//!
//! Generation never aborts once parameters validate: every requested
//! slot produces a color, and shortfalls surface as flags rather than
//! errors.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::error::GenerateError;
use super::options::{GenerateOptions, Thresholds};
use crate::color::oklch::normalize_hue;
use crate::color::{ChromaCache, Okhsl, Srgb};
use crate::contrast::{apca_lc, wcag_ratio};

/// Bisection steps for the contrast-driven lightness search.
const ADJUST_BISECTION_STEPS: u32 = 16;

/// Lightness step unit for duplicate resolution.
const DEDUP_LIGHTNESS_STEP: f64 = 0.01;

/// Attempts before a duplicate is allowed to stand.
const DEDUP_MAX_ATTEMPTS: u32 = 32;

/// One generated color with its scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteColor {
    /// The color, quantized to 8-bit channels (what a terminal shows).
    pub color: Srgb,
    /// The Okhsl coordinates the color was built from. These are the
    /// requested (or adjusted) parameters, not a re-derivation from the
    /// quantized bytes.
    pub okhsl: Okhsl,
    /// WCAG contrast ratio against the background.
    pub wcag: f64,
    /// APCA Lc score of this color as text on the background.
    pub apca: f64,
    /// True when both contrast minimums are met.
    pub meets_thresholds: bool,
    /// True when the color deviates from the requested parameters
    /// (contrast adjustment or duplicate resolution moved it).
    pub adjusted: bool,
}

/// The result of a generation run.
///
/// Always contains exactly the requested number of colors, in hue
/// order. Colors that could not be brought up to the contrast policy
/// are still present, individually flagged, and summarized by
/// [`contrast_unmet`](Self::contrast_unmet).
#[derive(Debug, Clone)]
pub struct GeneratedPalette {
    /// The background the palette was validated against.
    pub background: Srgb,
    /// The generated colors with their scores.
    pub colors: Vec<PaletteColor>,
    /// True when at least one color misses the contrast policy.
    pub contrast_unmet: bool,
}

impl GeneratedPalette {
    /// Hex strings of the generated colors, in order.
    pub fn hex_colors(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.color.to_hex()).collect()
    }
}

/// A candidate color with its quantized form and scores.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    okhsl: Okhsl,
    color: Srgb,
    wcag: f64,
    apca: f64,
}

/// Convert, quantize to bytes, and score against the background.
///
/// Scores are computed on the quantized color, not the continuous one,
/// so reported contrast matches what the terminal actually displays.
fn evaluate(okhsl: Okhsl, background: Srgb, cache: &mut ChromaCache) -> Candidate {
    let color = Srgb::from_bytes(okhsl.to_srgb(cache).to_bytes());
    Candidate {
        okhsl,
        color,
        wcag: wcag_ratio(color, background),
        apca: apca_lc(color, background),
    }
}

/// Bounded lightness search for a failing candidate.
///
/// Picks the lightness extreme (black or white end, hue and saturation
/// fixed) that contrasts better with the background. If even that
/// extreme misses the policy, returns `None` and the caller keeps the
/// original. Otherwise bisects between the failing lightness and the
/// passing extreme for the smallest move that clears both thresholds.
fn adjust_lightness(
    failed: &Candidate,
    background: Srgb,
    thresholds: &Thresholds,
    cache: &mut ChromaCache,
) -> Option<Candidate> {
    let h = failed.okhsl.h;
    let s = failed.okhsl.s;

    let dark = evaluate(Okhsl::new(h, s, 0.0), background, cache);
    let light = evaluate(Okhsl::new(h, s, 1.0), background, cache);
    let extreme = if light.wcag >= dark.wcag { light } else { dark };
    if !thresholds.meets(extreme.wcag, extreme.apca) {
        return None;
    }

    // Invariant: fail_l fails the policy, pass meets it.
    let mut fail_l = failed.okhsl.l;
    let mut pass = extreme;
    for _ in 0..ADJUST_BISECTION_STEPS {
        let mid = 0.5 * (fail_l + pass.okhsl.l);
        let probe = evaluate(Okhsl::new(h, s, mid), background, cache);
        if thresholds.meets(probe.wcag, probe.apca) {
            pass = probe;
        } else {
            fail_l = mid;
        }
    }
    Some(pass)
}

/// Deterministic lightness nudges until the candidate's hex is unique.
///
/// Steps alternate up and down in growing hundredths (+0.01, -0.01,
/// +0.02, ...). Returns `None` when the attempt cap runs out, which
/// takes a pathological request (dozens of colors at near-zero
/// saturation); the caller then keeps the duplicate.
fn resolve_duplicate(
    taken: &HashSet<[u8; 3]>,
    duplicate: &Candidate,
    background: Srgb,
    cache: &mut ChromaCache,
) -> Option<Candidate> {
    let h = duplicate.okhsl.h;
    let s = duplicate.okhsl.s;
    let l = duplicate.okhsl.l;

    for attempt in 1..=DEDUP_MAX_ATTEMPTS {
        let magnitude = f64::from((attempt + 1) / 2) * DEDUP_LIGHTNESS_STEP;
        let delta = if attempt % 2 == 1 { magnitude } else { -magnitude };
        let nudged = evaluate(
            Okhsl::new(h, s, (l + delta).clamp(0.0, 1.0)),
            background,
            cache,
        );
        if !taken.contains(&nudged.color.to_bytes()) {
            return Some(nudged);
        }
    }
    None
}

/// Generate a contrast-validated palette against `background`.
///
/// See the module docs for the algorithm. The returned palette always
/// has exactly `options.count` colors.
///
/// # Errors
///
/// Only parameter validation fails ([`GenerateError`]); the generation
/// itself degrades gracefully instead of erroring.
pub fn generate_palette(
    background: Srgb,
    options: &GenerateOptions,
) -> Result<GeneratedPalette, GenerateError> {
    options.validate()?;

    let thresholds = options.thresholds;
    let mut cache = ChromaCache::new();
    let mut rng = options
        .randomize
        .then(|| StdRng::seed_from_u64(options.seed));

    let step = 360.0 / options.count as f64;
    let hue_band = thresholds.max_perturbation.max(0.0);
    let sl_band = hue_band / 4.0;

    let mut taken: HashSet<[u8; 3]> = HashSet::with_capacity(options.count);
    let mut colors = Vec::with_capacity(options.count);

    for k in 0..options.count {
        let mut h = normalize_hue(options.hue_offset + k as f64 * step);
        let mut s_pct = options.saturation;
        let mut l_pct = options.lightness;

        if let Some(rng) = rng.as_mut() {
            // Fixed draw order (h, s, l per color) keeps seeded runs
            // bit-reproducible.
            h = normalize_hue(h + rng.gen_range(-hue_band..=hue_band));
            s_pct = (s_pct + rng.gen_range(-sl_band..=sl_band)).clamp(0.0, 100.0);
            l_pct = (l_pct + rng.gen_range(-sl_band..=sl_band)).clamp(0.0, 100.0);
        }

        let requested = Okhsl::new(h, s_pct / 100.0, l_pct / 100.0);
        let mut candidate = evaluate(requested, background, &mut cache);
        let mut adjusted = false;

        if !thresholds.meets(candidate.wcag, candidate.apca) {
            if let Some(fixed) = adjust_lightness(&candidate, background, &thresholds, &mut cache)
            {
                candidate = fixed;
                adjusted = true;
            }
        }

        if taken.contains(&candidate.color.to_bytes()) {
            if let Some(distinct) = resolve_duplicate(&taken, &candidate, background, &mut cache)
            {
                candidate = distinct;
                adjusted = true;
            }
        }
        taken.insert(candidate.color.to_bytes());

        colors.push(PaletteColor {
            color: candidate.color,
            okhsl: candidate.okhsl,
            wcag: candidate.wcag,
            apca: candidate.apca,
            meets_thresholds: thresholds.meets(candidate.wcag, candidate.apca),
            adjusted,
        });
    }

    let contrast_unmet = colors.iter().any(|c| !c.meets_thresholds);
    Ok(GeneratedPalette {
        background,
        colors,
        contrast_unmet,
    })
}
