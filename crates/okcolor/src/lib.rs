//! okcolor: Perceptual palette generation and contrast analysis
//!
//! This library builds terminal color palettes in a perceptually uniform
//! color space and validates them against their background with two
//! contrast metrics. It also analyzes existing palettes (hand-picked
//! themes, vendor schemes) with the same scoring.
//!
//! # Quick Start
//!
//! The [`PaletteGenerator`] builder is the primary entry point:
//!
//! ```
//! use okcolor::{PaletteGenerator, Srgb};
//!
//! let palette = PaletteGenerator::new(Srgb::from_u8(0, 0, 0))
//!     .count(3)
//!     .saturation(70.0)
//!     .generate()
//!     .unwrap();
//!
//! assert_eq!(palette.colors.len(), 3);
//! for color in &palette.colors {
//!     assert!(color.wcag >= 4.5);
//! }
//! ```
//!
//! # Analyzing an Existing Palette
//!
//! [`analyze()`] scores arbitrary colors against a shared background:
//!
//! ```
//! use okcolor::{analyze, Palette, Thresholds};
//!
//! let palette = Palette::from_hex("#2E3440", &["#BF616A", "#88C0D0"]).unwrap();
//! let report = analyze(&palette, &Thresholds::MINIMUM);
//!
//! assert_eq!(report.colors.len(), 2);
//! assert!(report.wcag.min <= report.wcag.max);
//! ```
//!
//! # Color Spaces
//!
//! The library enforces type-safe color handling:
//!
//! | Color Space | Key Property | Used For |
//! |-------------|--------------|----------|
//! | [`Srgb`] | Standard encoding (IEC 61966-2-1) | Input/output: hex strings, 8-bit terminal colors |
//! | [`LinearRgb`] | Physically proportional to light intensity | WCAG relative luminance |
//! | [`Oklab`] | Perceptually uniform distances | Cartesian base for the polar spaces |
//! | [`Oklch`] | Polar chroma and hue | Hue geometry, gamut boundary search |
//! | [`Okhsl`] | Gamut-relative saturation, toe-mapped lightness | Generation parameters (h, s, l) |
//!
//! # Pipeline Overview
//!
//! ```text
//! hex string "#RRGGBB"
//!     |
//!     v
//! Srgb                 (8-bit channels as f64 in 0..1)
//!     |
//!     v
//! LinearRgb            (IEC 61966-2-1 gamma decode)
//!     |
//!     v
//! Oklab                (Ottosson 2020: M1, cube root, M2)
//!     |
//!     v
//! Oklch                (polar: chroma magnitude + hue angle)
//!     |
//!     v
//! Okhsl                (saturation relative to the sRGB gamut
//!                       boundary at this hue/lightness; lightness
//!                       remapped by the toe function)
//!
//! ╔═════════════════════════════════════════════╗
//! ║  Generation loop (per hue slot k)           ║
//! ║                                             ║
//! ║  h_k = offset + k * 360 / count             ║
//! ║      |                                      ║
//! ║  Okhsl(h_k, s, l) -> sRGB, quantized to     ║
//! ║      8-bit so scores match the terminal     ║
//! ║      |                                      ║
//! ║  score vs background: WCAG ratio + APCA Lc  ║
//! ║      |                                      ║
//! ║  below policy?  -> bounded lightness search ║
//! ║  duplicate hex? -> deterministic nudges     ║
//! ╚═════════════════════════════════════════════╝
//! ```
//!
//! # Why Okhsl
//!
//! Classic HSL is defined on the RGB cube, so `L = 0.5` yellow and
//! `L = 0.5` blue differ wildly in perceived lightness, and `S = 1.0`
//! means different visual intensity at every hue. Okhsl (Ottosson's
//! HSL-like reparameterization of OKLab) fixes both:
//!
//! - **Lightness** is OKLab `L` remapped by a "toe" function so that
//!   `l = 0.5` sits at perceptual mid-grey. Equal `l` means equal
//!   perceived lightness across hues, which is what makes contrast
//!   adjustment a one-dimensional search.
//! - **Saturation** is chroma relative to the sRGB gamut boundary at
//!   the color's hue and lightness: `s = 1.0` always means "as colorful
//!   as sRGB can display here". The boundary has no closed form, so
//!   [`max_chroma()`] locates it by bisecting between an in-gamut and
//!   an out-of-gamut chroma. Conversions take a caller-owned
//!   [`ChromaCache`] so repeated work against one background reuses
//!   boundary results.
//!
//! # Contrast Metrics
//!
//! Two metrics score every color, and the policy requires both:
//!
//! **WCAG 2.x contrast ratio** is `(Y_light + 0.05) / (Y_dark + 0.05)`
//! over relative luminance, symmetric, ranging 1:1 to 21:1. It is the
//! compliance floor (4.5:1 for normal text), but it systematically
//! underrates light-on-dark pairs, which matters for the dark terminal
//! themes this crate mostly targets.
//!
//! **APCA Lc** (Accessible Perceptual Contrast Algorithm) is
//! polarity-aware: positive for dark text on a light background,
//! negative for light text on a dark background, with magnitudes from 0
//! to roughly 106 (108 in reverse polarity). This implementation pins
//! the 0.0.98G-4g constants. Note that APCA defines its own screen
//! luminance model (a plain 2.4 power curve per channel, *not* the
//! piecewise IEC decode used for WCAG) plus a soft black-level clamp;
//! reusing [`LinearRgb`] there would be wrong.
//!
//! Passing both means a palette satisfies today's legal bar without
//! shipping pairs the perceptual model says are unreadable.

pub mod analyze;
pub mod api;
pub mod color;
pub mod contrast;
pub mod generate;
pub mod palette;

#[cfg(test)]
mod domain_tests;

pub use analyze::{analyze, ColorReport, MetricSummary, PaletteAnalysis};
pub use api::{EngineError, PaletteGenerator};
pub use color::{
    in_gamut, max_chroma, ChromaCache, LinearRgb, Okhsl, Oklab, Oklch, SearchOptions, Srgb,
};
pub use contrast::{apca_lc, relative_luminance, screen_luminance, wcag_ratio};
pub use generate::{
    generate_palette, GenerateError, GenerateOptions, GeneratedPalette, PaletteColor, Thresholds,
};
pub use palette::{Palette, PaletteError, ParseColorError};
