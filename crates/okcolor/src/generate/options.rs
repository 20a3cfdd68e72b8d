//! Generation parameters and contrast policy.
//!
//! This module provides the [`GenerateOptions`] struct for configuring
//! palette generation and the [`Thresholds`] record that names the
//! contrast policy instead of burying it in literals.

use super::error::GenerateError;

/// Contrast policy for validating palette colors against a background.
///
/// Both metrics must pass: WCAG catches luminance-ratio failures, APCA
/// catches perceptual failures the ratio misses (the two models
/// disagree most around mid-tone backgrounds).
///
/// # Presets
///
/// - [`Thresholds::MINIMUM`]: the generation validity floor. Colors
///   below it get a bounded lightness adjustment.
/// - [`Thresholds::ENHANCED`]: a stricter reporting bar, roughly "body
///   text comfortable", used by callers to grade results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Minimum WCAG contrast ratio (1.0..=21.0).
    ///
    /// Default: `4.5`
    pub min_wcag: f64,

    /// Minimum APCA |Lc| magnitude (0.0..=108.0).
    ///
    /// Default: `32.0`
    pub min_apca: f64,

    /// Randomize-mode jitter band: hue moves within plus or minus this
    /// many degrees, saturation and lightness within a quarter of it in
    /// percentage points. Negative values are treated as zero.
    ///
    /// Default: `16.0`
    pub max_perturbation: f64,
}

impl Thresholds {
    /// Conservative validity floor: WCAG 4.5:1, APCA |Lc| 32.
    ///
    /// WCAG 4.5 is the AA bar for normal text; |Lc| 32 is the APCA
    /// readability floor for large/bold text, a sensible minimum for
    /// terminal colors that must at least be tellable apart from the
    /// background.
    pub const MINIMUM: Thresholds = Thresholds {
        min_wcag: 4.5,
        min_apca: 32.0,
        max_perturbation: 16.0,
    };

    /// Comfortable reading bar: WCAG 7.0:1, APCA |Lc| 50.
    pub const ENHANCED: Thresholds = Thresholds {
        min_wcag: 7.0,
        min_apca: 50.0,
        max_perturbation: 16.0,
    };

    /// True when a (WCAG ratio, APCA Lc) pair clears both minimums.
    ///
    /// APCA is checked by magnitude; polarity does not matter here.
    #[inline]
    pub fn meets(&self, wcag: f64, apca: f64) -> bool {
        wcag >= self.min_wcag && apca.abs() >= self.min_apca
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::MINIMUM
    }
}

/// Configuration for palette generation.
///
/// # Defaults
///
/// Six fully saturated colors at lightness 60 starting at hue 0, no
/// randomization, validated against [`Thresholds::MINIMUM`]. These are
/// the classic "ANSI accent set on a dark background" parameters.
///
/// # Example
///
/// ```
/// use okcolor::generate::GenerateOptions;
///
/// let options = GenerateOptions::new()
///     .count(8)
///     .saturation(70.0)
///     .hue_offset(15.0);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerateOptions {
    /// Number of colors to generate.
    ///
    /// Default: `6`
    pub count: usize,

    /// Target saturation as a percentage, `0.0..=100.0`.
    ///
    /// Default: `100.0`
    pub saturation: f64,

    /// Target lightness as a percentage, `0.0..=100.0`.
    ///
    /// Default: `60.0`
    pub lightness: f64,

    /// Hue of the first color, in degrees. Any finite angle; wrapped
    /// into `0.0..360.0`.
    ///
    /// Default: `0.0`
    pub hue_offset: f64,

    /// Jitter hue, saturation and lightness per color (seeded, see
    /// [`seed`](Self::seed)).
    ///
    /// Default: `false`
    pub randomize: bool,

    /// Seed for the randomize mode. Fixed seed, bit-identical output.
    ///
    /// Default: `0`
    pub seed: u64,

    /// Contrast policy for validation and adjustment.
    ///
    /// Default: [`Thresholds::MINIMUM`]
    pub thresholds: Thresholds,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            count: 6,
            saturation: 100.0,
            lightness: 60.0,
            hue_offset: 0.0,
            randomize: false,
            seed: 0,
            thresholds: Thresholds::MINIMUM,
        }
    }
}

impl GenerateOptions {
    /// Create new generation options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of colors to generate.
    #[inline]
    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Set the target saturation percentage (`0.0..=100.0`).
    #[inline]
    pub fn saturation(mut self, saturation: f64) -> Self {
        self.saturation = saturation;
        self
    }

    /// Set the target lightness percentage (`0.0..=100.0`).
    #[inline]
    pub fn lightness(mut self, lightness: f64) -> Self {
        self.lightness = lightness;
        self
    }

    /// Set the hue of the first color, in degrees.
    #[inline]
    pub fn hue_offset(mut self, degrees: f64) -> Self {
        self.hue_offset = degrees;
        self
    }

    /// Enable seeded per-color jitter.
    #[inline]
    pub fn randomize(mut self, enabled: bool) -> Self {
        self.randomize = enabled;
        self
    }

    /// Set the randomize-mode seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the contrast policy.
    #[inline]
    pub fn thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Check the parameters against their declared domains.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::ZeroCount`] for `count == 0`
    /// - [`GenerateError::ParameterOutOfRange`] for saturation or
    ///   lightness outside `0.0..=100.0` (or non-finite), or a
    ///   non-finite hue offset
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.count == 0 {
            return Err(GenerateError::ZeroCount);
        }
        if !self.saturation.is_finite() || !(0.0..=100.0).contains(&self.saturation) {
            return Err(GenerateError::ParameterOutOfRange {
                name: "saturation",
                value: self.saturation,
            });
        }
        if !self.lightness.is_finite() || !(0.0..=100.0).contains(&self.lightness) {
            return Err(GenerateError::ParameterOutOfRange {
                name: "lightness",
                value: self.lightness,
            });
        }
        if !self.hue_offset.is_finite() {
            return Err(GenerateError::ParameterOutOfRange {
                name: "hue offset",
                value: self.hue_offset,
            });
        }
        Ok(())
    }
}
