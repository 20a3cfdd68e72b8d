//! Oklch cylindrical color space
//!
//! Oklch is the polar form of Oklab: the same lightness axis, with the
//! (a, b) plane expressed as chroma (distance from the grey axis) and
//! hue (angle around it). Hue arithmetic — rotating a palette, spacing
//! colors evenly — is natural here and awkward in Cartesian Oklab.

use super::oklab::Oklab;

/// Normalize a hue angle in degrees to the range `0.0..360.0`.
///
/// Handles arbitrarily large positive and negative inputs; `360.0`
/// itself maps to `0.0`.
#[inline]
pub(crate) fn normalize_hue(h: f64) -> f64 {
    let h = h % 360.0;
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

/// A color in Oklch, the cylindrical form of Oklab.
///
/// # Components
///
/// - `l`: Lightness, identical to Oklab lightness
/// - `c`: Chroma (0.0 on the grey axis; roughly 0.0..=0.37 in sRGB)
/// - `h`: Hue angle in degrees, normalized to `0.0..360.0`
///
/// # Note
///
/// For achromatic colors (`c == 0.0`) the hue is numerically arbitrary;
/// conversion from Oklab reports `0.0` there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    /// Lightness: 0.0 (black) to 1.0 (white) for in-gamut colors
    pub l: f64,
    /// Chroma: distance from the grey axis, never negative
    pub c: f64,
    /// Hue angle in degrees: 0.0..360.0
    pub h: f64,
}

impl Oklch {
    /// Create a new Oklch color, normalizing the hue to `0.0..360.0`.
    #[inline]
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self {
            l,
            c,
            h: normalize_hue(h),
        }
    }
}

impl From<Oklab> for Oklch {
    fn from(lab: Oklab) -> Self {
        let c = lab.a.hypot(lab.b);
        // atan2(0, 0) is 0, so achromatic colors get hue 0
        let h = normalize_hue(lab.b.atan2(lab.a).to_degrees());
        Oklch { l: lab.l, c, h }
    }
}

impl From<Oklch> for Oklab {
    fn from(lch: Oklch) -> Self {
        let h_rad = lch.h.to_radians();
        Oklab {
            l: lch.l,
            a: lch.c * h_rad.cos(),
            b: lch.c * h_rad.sin(),
        }
    }
}
