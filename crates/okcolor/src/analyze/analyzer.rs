//! Palette analysis: scoring an existing palette without touching it.

use super::stats;
use crate::color::{ChromaCache, Okhsl, Srgb};
use crate::contrast::{apca_lc, wcag_ratio};
use crate::generate::Thresholds;
use crate::palette::Palette;

/// Scores for one analyzed color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorReport {
    /// The analyzed color, as given.
    pub color: Srgb,
    /// Okhsl coordinates derived from the color.
    pub okhsl: Okhsl,
    /// WCAG contrast ratio against the background.
    pub wcag: f64,
    /// APCA Lc score of this color as text on the background.
    pub apca: f64,
    /// True when both contrast minimums are met.
    pub meets_thresholds: bool,
}

/// Min/median/max of one metric across the palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSummary {
    pub min: f64,
    pub median: f64,
    pub max: f64,
}

impl MetricSummary {
    fn over(values: &[f64]) -> Self {
        Self {
            min: values.iter().copied().fold(f64::INFINITY, f64::min),
            median: stats::median(values),
            max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }
}

/// The full analysis report for a palette.
///
/// Pure data: analysis never modifies or reorders the input colors.
#[derive(Debug, Clone)]
pub struct PaletteAnalysis {
    /// The background the palette was scored against.
    pub background: Srgb,
    /// Per-color reports, in palette order.
    pub colors: Vec<ColorReport>,
    /// WCAG ratio spread.
    pub wcag: MetricSummary,
    /// APCA spread, over |Lc| magnitudes (polarity stripped).
    pub apca: MetricSummary,
    /// Colors below the WCAG minimum.
    pub wcag_failures: usize,
    /// Colors below the APCA magnitude minimum.
    pub apca_failures: usize,
    /// Variance of the circular hue gaps; 0 means perfectly even
    /// spacing, elevated values mean clustered hues.
    pub hue_gap_variance: f64,
    /// Population variance of Okhsl saturation across the palette.
    pub saturation_variance: f64,
    /// Population variance of Okhsl lightness across the palette.
    pub lightness_variance: f64,
}

/// Score every palette color against the background and aggregate.
///
/// Per color: Okhsl coordinates (for the coherence statistics), WCAG
/// ratio, APCA Lc, and a pass/fail against `thresholds`. Aggregates:
/// min/median/max per metric, failure counts per metric, hue-gap
/// variance, and saturation/lightness variance.
pub fn analyze(palette: &Palette, thresholds: &Thresholds) -> PaletteAnalysis {
    let background = palette.background();
    let mut cache = ChromaCache::new();

    let colors: Vec<ColorReport> = palette
        .colors()
        .iter()
        .map(|&color| {
            let okhsl = Okhsl::from_srgb(color, &mut cache);
            let wcag = wcag_ratio(color, background);
            let apca = apca_lc(color, background);
            ColorReport {
                color,
                okhsl,
                wcag,
                apca,
                meets_thresholds: thresholds.meets(wcag, apca),
            }
        })
        .collect();

    let wcag_values: Vec<f64> = colors.iter().map(|c| c.wcag).collect();
    let apca_magnitudes: Vec<f64> = colors.iter().map(|c| c.apca.abs()).collect();
    let hues: Vec<f64> = colors.iter().map(|c| c.okhsl.h).collect();
    let saturations: Vec<f64> = colors.iter().map(|c| c.okhsl.s).collect();
    let lightnesses: Vec<f64> = colors.iter().map(|c| c.okhsl.l).collect();

    PaletteAnalysis {
        background,
        wcag: MetricSummary::over(&wcag_values),
        apca: MetricSummary::over(&apca_magnitudes),
        wcag_failures: colors
            .iter()
            .filter(|c| c.wcag < thresholds.min_wcag)
            .count(),
        apca_failures: colors
            .iter()
            .filter(|c| c.apca.abs() < thresholds.min_apca)
            .count(),
        hue_gap_variance: stats::hue_gap_variance(&hues),
        saturation_variance: stats::variance(&saturations),
        lightness_variance: stats::variance(&lightnesses),
        colors,
    }
}
