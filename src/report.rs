//! JSON report types for the `--json` output mode.
//!
//! The engine types in `okcolor` stay serde-free; these DTOs define the
//! machine-readable contract at the CLI boundary. Field names are
//! camelCase to match the usual JSON convention.

use okcolor::{ColorReport, GeneratedPalette, MetricSummary, Okhsl, PaletteAnalysis, PaletteColor};
use serde::{Deserialize, Serialize};

/// Okhsl coordinates as presented to users: hue in degrees, saturation
/// and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OkhslCoords {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl From<Okhsl> for OkhslCoords {
    fn from(okhsl: Okhsl) -> Self {
        Self {
            hue: okhsl.h,
            saturation: okhsl.s * 100.0,
            lightness: okhsl.l * 100.0,
        }
    }
}

/// One generated color with its contrast scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedColorEntry {
    pub hex: String,
    pub okhsl: OkhslCoords,
    pub wcag_ratio: f64,
    pub apca_score: f64,
    pub threshold_met: bool,
    pub adjusted: bool,
}

impl From<&PaletteColor> for GeneratedColorEntry {
    fn from(color: &PaletteColor) -> Self {
        Self {
            hex: color.color.to_hex(),
            okhsl: color.okhsl.into(),
            wcag_ratio: color.wcag,
            apca_score: color.apca,
            threshold_met: color.meets_thresholds,
            adjusted: color.adjusted,
        }
    }
}

/// Report for `huegen generate --json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReport {
    pub background: String,
    /// Only present for randomized runs, so they can be reproduced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub contrast_unmet: bool,
    pub colors: Vec<GeneratedColorEntry>,
}

impl GenerateReport {
    pub fn from_palette(palette: &GeneratedPalette, seed: Option<u64>) -> Self {
        Self {
            background: palette.background.to_hex(),
            seed,
            contrast_unmet: palette.contrast_unmet,
            colors: palette.colors.iter().map(Into::into).collect(),
        }
    }
}

/// One analyzed color with its contrast scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedColorEntry {
    pub hex: String,
    pub okhsl: OkhslCoords,
    pub wcag_ratio: f64,
    pub apca_score: f64,
    pub threshold_met: bool,
}

impl From<&ColorReport> for AnalyzedColorEntry {
    fn from(report: &ColorReport) -> Self {
        Self {
            hex: report.color.to_hex(),
            okhsl: report.okhsl.into(),
            wcag_ratio: report.wcag,
            apca_score: report.apca,
            threshold_met: report.meets_thresholds,
        }
    }
}

/// Min/median/max of one contrast metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricBand {
    pub min: f64,
    pub median: f64,
    pub max: f64,
}

impl From<MetricSummary> for MetricBand {
    fn from(summary: MetricSummary) -> Self {
        Self {
            min: summary.min,
            median: summary.median,
            max: summary.max,
        }
    }
}

/// Report for `huegen analyze --json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeReport {
    /// Bundled scheme name, when one was analyzed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    pub background: String,
    pub colors: Vec<AnalyzedColorEntry>,
    pub wcag: MetricBand,
    /// APCA band over |Lc| magnitudes.
    pub apca: MetricBand,
    pub wcag_failures: usize,
    pub apca_failures: usize,
    pub hue_gap_variance: f64,
    pub saturation_variance: f64,
    pub lightness_variance: f64,
}

impl AnalyzeReport {
    pub fn from_analysis(analysis: &PaletteAnalysis, scheme: Option<&str>) -> Self {
        Self {
            scheme: scheme.map(str::to_string),
            background: analysis.background.to_hex(),
            colors: analysis.colors.iter().map(Into::into).collect(),
            wcag: analysis.wcag.into(),
            apca: analysis.apca.into(),
            wcag_failures: analysis.wcag_failures,
            apca_failures: analysis.apca_failures,
            hue_gap_variance: analysis.hue_gap_variance,
            saturation_variance: analysis.saturation_variance,
            lightness_variance: analysis.lightness_variance,
        }
    }
}
