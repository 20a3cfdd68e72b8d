//! Linear RGB color type and the sRGB transfer functions
//!
//! Linear RGB is the color space where light addition is physically
//! accurate. Luminance math and the OKLab transform are defined over
//! linear light, never over gamma-encoded sRGB.

use super::srgb::Srgb;

/// A color in linear RGB color space.
///
/// Channel values are proportional to physical light power. Values are
/// typically in 0.0..=1.0, but intermediate results of inverse
/// color-space transforms may fall outside that range; the gamut probe
/// relies on seeing those out-of-range values unclamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    ///
    /// # Arguments
    /// * `r` - Red channel (typically 0.0..=1.0)
    /// * `g` - Green channel (typically 0.0..=1.0)
    /// * `b` - Blue channel (typically 0.0..=1.0)
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// IEC 61966-2-1 electro-optical transfer inverse: sRGB channel to linear.
#[inline]
pub(crate) fn srgb_to_linear(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// IEC 61966-2-1 forward transfer: linear channel to sRGB.
///
/// The input must already be clamped to 0.0..=1.0; `powf` on a negative
/// base would produce NaN.
#[inline]
pub(crate) fn linear_to_srgb(v: f64) -> f64 {
    if v <= 0.0031308 {
        v * 12.92
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

impl From<Srgb> for LinearRgb {
    /// Convert from sRGB to linear RGB via the exact IEC 61966-2-1
    /// formula, per channel.
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb_to_linear(srgb.r),
            g: srgb_to_linear(srgb.g),
            b: srgb_to_linear(srgb.b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Known transfer function values from the IEC 61966-2-1 formula.
    #[test]
    fn test_known_gamma_values() {
        // endpoints are fixed points
        assert!(srgb_to_linear(0.0).abs() < 1e-12);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-12);
        assert!(linear_to_srgb(0.0).abs() < 1e-12);
        assert!((linear_to_srgb(1.0) - 1.0).abs() < 1e-12);

        // sRGB 0.5 -> linear ((0.5 + 0.055) / 1.055)^2.4 = 0.214041...
        assert!(
            (srgb_to_linear(0.5) - 0.214041).abs() < 1e-5,
            "sRGB 0.5 -> linear expected ~0.214041, got {}",
            srgb_to_linear(0.5)
        );

        // linear 0.5 -> sRGB 1.055 * 0.5^(1/2.4) - 0.055 = 0.735357...
        assert!(
            (linear_to_srgb(0.5) - 0.735357).abs() < 1e-5,
            "linear 0.5 -> sRGB expected ~0.735357, got {}",
            linear_to_srgb(0.5)
        );
    }

    /// The piecewise transfer function must be continuous at its
    /// linear/power split points.
    #[test]
    fn test_transfer_continuity() {
        let below = srgb_to_linear(0.04045 - 1e-9);
        let above = srgb_to_linear(0.04045 + 1e-9);
        assert!(
            (below - above).abs() < 1e-6,
            "decode discontinuity at 0.04045: {below} vs {above}"
        );

        let below = linear_to_srgb(0.0031308 - 1e-10);
        let above = linear_to_srgb(0.0031308 + 1e-10);
        assert!(
            (below - above).abs() < 1e-6,
            "encode discontinuity at 0.0031308: {below} vs {above}"
        );
    }

    /// Decode and encode are inverses over the full channel range.
    #[test]
    fn test_transfer_inverse() {
        for i in 0..=1000 {
            let v = i as f64 / 1000.0;
            let there_and_back = linear_to_srgb(srgb_to_linear(v));
            assert!(
                (there_and_back - v).abs() < 1e-9,
                "transfer inverse failed at {v}: got {there_and_back}"
            );
        }
    }

    #[test]
    fn test_from_srgb() {
        let lin = LinearRgb::from(Srgb::from_u8(255, 0, 0));
        assert!((lin.r - 1.0).abs() < 1e-12);
        assert!(lin.g.abs() < 1e-12);
        assert!(lin.b.abs() < 1e-12);

        // gamma compression: mid sRGB maps well below mid linear
        let mid = LinearRgb::from(Srgb::from_u8(128, 128, 128));
        assert!(mid.r > 0.21 && mid.r < 0.22, "sRGB 128 -> linear {}", mid.r);
    }
}
