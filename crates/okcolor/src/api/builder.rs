//! PaletteGenerator builder -- the primary ergonomic entry point for the crate.
//!
//! [`PaletteGenerator`] wraps the generation pipeline with fluent
//! configuration and contrast policy overrides.

use std::str::FromStr;

use crate::api::error::EngineError;
use crate::color::Srgb;
use crate::generate::{generate_palette, GenerateOptions, GeneratedPalette, Thresholds};

/// High-level palette generation builder.
///
/// `PaletteGenerator` is the recommended entry point for the crate. It
/// wraps the complete pipeline (hue distribution, contrast validation,
/// adjustment, duplicate resolution) behind a fluent builder API with
/// sensible defaults.
///
/// # Design
///
/// - Constructor requires the background [`Srgb`] (no invalid states)
/// - Configuration methods consume and return `self` (standard builder pattern)
/// - [`generate()`](Self::generate) takes `&self` so the builder is
///   **reusable** across multiple runs
/// - Parameters are validated once per run, inside `generate()`
///
/// # Example
///
/// ```
/// use okcolor::{PaletteGenerator, Srgb};
///
/// let generator = PaletteGenerator::new(Srgb::from_u8(0, 0, 0))
///     .count(4)
///     .saturation(80.0)
///     .lightness(65.0);
///
/// let palette = generator.generate().unwrap();
///
/// assert_eq!(palette.colors.len(), 4);
/// ```
pub struct PaletteGenerator {
    background: Srgb,
    options: GenerateOptions,
}

impl PaletteGenerator {
    /// Create a new generator for the given background.
    ///
    /// Defaults: 6 colors, saturation 100, lightness 60, hue offset 0,
    /// no randomization, [`Thresholds::MINIMUM`] contrast policy.
    ///
    /// # Example
    ///
    /// ```
    /// use okcolor::{PaletteGenerator, Srgb};
    ///
    /// let generator = PaletteGenerator::new(Srgb::from_u8(46, 52, 64));
    /// ```
    pub fn new(background: Srgb) -> Self {
        Self {
            background,
            options: GenerateOptions::default(),
        }
    }

    /// Create a new generator from a hex background string.
    ///
    /// Accepts `#RRGGBB`, `RRGGBB`, `#RGB`, and `RGB`.
    ///
    /// # Example
    ///
    /// ```
    /// use okcolor::PaletteGenerator;
    ///
    /// let generator = PaletteGenerator::from_hex("#2E3440").unwrap();
    /// assert!(PaletteGenerator::from_hex("not a color").is_err());
    /// ```
    pub fn from_hex(background: &str) -> Result<Self, EngineError> {
        Ok(Self::new(Srgb::from_str(background)?))
    }

    /// Set the number of colors to generate.
    #[inline]
    pub fn count(mut self, count: usize) -> Self {
        self.options = self.options.count(count);
        self
    }

    /// Set the target saturation in percent (0-100).
    #[inline]
    pub fn saturation(mut self, saturation: f64) -> Self {
        self.options = self.options.saturation(saturation);
        self
    }

    /// Set the target lightness in percent (0-100).
    #[inline]
    pub fn lightness(mut self, lightness: f64) -> Self {
        self.options = self.options.lightness(lightness);
        self
    }

    /// Set the hue offset in degrees.
    #[inline]
    pub fn hue_offset(mut self, degrees: f64) -> Self {
        self.options = self.options.hue_offset(degrees);
        self
    }

    /// Enable or disable seeded perturbation of hue, saturation, and
    /// lightness.
    #[inline]
    pub fn randomize(mut self, randomize: bool) -> Self {
        self.options = self.options.randomize(randomize);
        self
    }

    /// Set the seed used when randomization is enabled.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.options = self.options.seed(seed);
        self
    }

    /// Set the contrast policy.
    #[inline]
    pub fn thresholds(mut self, thresholds: Thresholds) -> Self {
        self.options = self.options.thresholds(thresholds);
        self
    }

    /// Generate a contrast-validated palette.
    ///
    /// The builder is reusable -- `generate()` takes `&self`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Generate`] when a parameter is out of
    /// range (zero count, saturation or lightness outside 0-100, or a
    /// non-finite value). Contrast shortfalls are not errors; they
    /// surface as flags on the returned palette.
    pub fn generate(&self) -> Result<GeneratedPalette, EngineError> {
        Ok(generate_palette(self.background, &self.options)?)
    }
}
