//! Okhsl: an HSL-style parameterization of Oklab
//!
//! Okhsl wraps the Oklab gamut in designer-friendly coordinates: a hue
//! angle, a saturation that is *relative to the sRGB gamut boundary* at
//! that hue and lightness (1.0 always means "as colorful as the screen
//! can show"), and a lightness remapped through a toe function so its
//! scale matches CIE L* rather than raw Oklab lightness.
//!
//! Because saturation is defined against the gamut boundary, every
//! conversion needs the boundary chroma for the color's hue/lightness
//! pair. That lookup runs through a caller-owned [`ChromaCache`], so
//! repeated conversions during palette generation pay for each boundary
//! bisection once.

use super::gamut::ChromaCache;
use super::linear::LinearRgb;
use super::oklab::Oklab;
use super::oklch::{normalize_hue, Oklch};
use super::srgb::Srgb;

/// Toe constant k1 from the Okhsl lightness estimate.
const K1: f64 = 0.206;
/// Toe constant k2 from the Okhsl lightness estimate.
const K2: f64 = 0.03;
/// Toe constant k3, chosen so that toe(1) == 1.
const K3: f64 = (1.0 + K1) / (1.0 + K2);

/// Map Oklab lightness to the L*-like Okhsl lightness scale.
///
/// Monotone on `0.0..=1.0` with `toe(0) == 0` and `toe(1) == 1`; it
/// darkens the mid-range so equal steps read as equal lightness steps.
pub fn toe(x: f64) -> f64 {
    let t = K3 * x - K1;
    0.5 * (t + (t * t + 4.0 * K2 * K3 * x).sqrt())
}

/// Inverse of [`toe`]: map Okhsl lightness back to Oklab lightness.
pub fn toe_inv(x: f64) -> f64 {
    (x * x + K1 * x) / (K3 * (x + K2))
}

/// A color in Okhsl coordinates.
///
/// # Components
///
/// - `h`: Hue angle in degrees, normalized to `0.0..360.0`
/// - `s`: Saturation relative to the gamut boundary, `0.0..=1.0`
/// - `l`: Toe-mapped lightness, `0.0..=1.0`
///
/// Saturation 1.0 sits exactly on the sRGB gamut surface for the given
/// hue and lightness, so sweeping hue at fixed `s` and `l` never leaves
/// the displayable range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Okhsl {
    /// Hue angle in degrees: 0.0..360.0
    pub h: f64,
    /// Gamut-relative saturation: 0.0 (grey) to 1.0 (gamut boundary)
    pub s: f64,
    /// Perceptual lightness: 0.0 (black) to 1.0 (white)
    pub l: f64,
}

impl Okhsl {
    /// Create a new Okhsl color, normalizing the hue and clamping
    /// saturation and lightness to `0.0..=1.0`.
    #[inline]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: s.clamp(0.0, 1.0),
            l: l.clamp(0.0, 1.0),
        }
    }

    /// Convert to Oklch, resolving saturation against the gamut
    /// boundary chroma from `cache`.
    pub fn to_oklch(&self, cache: &mut ChromaCache) -> Oklch {
        if self.l <= 0.0 {
            return Oklch::new(0.0, 0.0, self.h);
        }
        if self.l >= 1.0 {
            return Oklch::new(1.0, 0.0, self.h);
        }
        let lab_l = toe_inv(self.l);
        let c = self.s * cache.max_chroma(self.h, lab_l);
        Oklch::new(lab_l, c, self.h)
    }

    /// Convert from Oklch, expressing chroma as a fraction of the gamut
    /// boundary chroma from `cache`.
    ///
    /// Chroma beyond the boundary (out-of-gamut input, or boundary
    /// colors landing a hair past the bisection result) clamps to
    /// saturation 1.0.
    pub fn from_oklch(lch: Oklch, cache: &mut ChromaCache) -> Self {
        if lch.l <= 0.0 {
            return Self {
                h: lch.h,
                s: 0.0,
                l: 0.0,
            };
        }
        if lch.l >= 1.0 {
            return Self {
                h: lch.h,
                s: 0.0,
                l: 1.0,
            };
        }
        let cmax = cache.max_chroma(lch.h, lch.l);
        let s = if cmax > 0.0 {
            (lch.c / cmax).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            h: lch.h,
            s,
            l: toe(lch.l),
        }
    }

    /// Convert to gamma-encoded sRGB.
    pub fn to_srgb(&self, cache: &mut ChromaCache) -> Srgb {
        Srgb::from(LinearRgb::from(Oklab::from(self.to_oklch(cache))))
    }

    /// Convert from gamma-encoded sRGB.
    pub fn from_srgb(color: Srgb, cache: &mut ChromaCache) -> Self {
        Self::from_oklch(Oklch::from(Oklab::from(LinearRgb::from(color))), cache)
    }
}

impl From<Srgb> for Okhsl {
    /// One-off conversion with a throwaway cache. Batch callers should
    /// use [`Okhsl::from_srgb`] with a shared [`ChromaCache`] instead.
    fn from(color: Srgb) -> Self {
        Self::from_srgb(color, &mut ChromaCache::new())
    }
}

impl From<Okhsl> for Srgb {
    /// One-off conversion with a throwaway cache. Batch callers should
    /// use [`Okhsl::to_srgb`] with a shared [`ChromaCache`] instead.
    fn from(hsl: Okhsl) -> Self {
        hsl.to_srgb(&mut ChromaCache::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_toe_endpoints() {
        assert!(toe(0.0).abs() < 1e-12, "toe(0): {}", toe(0.0));
        assert!(approx_eq(toe(1.0), 1.0, 1e-12), "toe(1): {}", toe(1.0));
        assert!(toe_inv(0.0).abs() < 1e-12);
        assert!(approx_eq(toe_inv(1.0), 1.0, 1e-12));
    }

    #[test]
    fn test_toe_round_trip() {
        for i in 0..=1000 {
            let x = i as f64 / 1000.0;
            let there_and_back = toe_inv(toe(x));
            assert!(
                approx_eq(x, there_and_back, 1e-9),
                "toe round trip failed at {x}: {there_and_back}"
            );
        }
    }

    #[test]
    fn test_toe_darkens_midtones() {
        // The toe pulls mid lightness down toward the L* scale.
        assert!(toe(0.5) < 0.5);
        // And it is strictly monotone.
        let mut prev = toe(0.0);
        for i in 1..=100 {
            let next = toe(i as f64 / 100.0);
            assert!(next > prev, "toe not monotone at step {i}");
            prev = next;
        }
    }

    #[test]
    fn test_grey_has_no_saturation() {
        let grey = Okhsl::from(Srgb::from_u8(128, 128, 128));
        assert!(grey.s < 1e-6, "grey saturation: {}", grey.s);
        // Toe-mapped lightness of mid grey sits near the L* midpoint.
        assert!(
            grey.l > 0.52 && grey.l < 0.55,
            "mid grey lightness: {}",
            grey.l
        );
    }

    #[test]
    fn test_primary_red_is_fully_saturated() {
        // sRGB red sits on the gamut surface, so relative saturation
        // must come out at (or clamp to) 1.0.
        let red = Okhsl::from(Srgb::from_u8(255, 0, 0));
        assert!(red.s > 0.999, "red saturation: {}", red.s);
        assert!(approx_eq(red.h, 29.23, 0.1), "red hue: {}", red.h);
    }

    #[test]
    fn test_lightness_extremes_short_circuit() {
        let mut cache = ChromaCache::new();

        let black = Okhsl::new(200.0, 0.8, 0.0).to_srgb(&mut cache);
        assert_eq!(black.to_hex(), "#000000");

        let white = Okhsl::new(200.0, 0.8, 1.0).to_srgb(&mut cache);
        assert_eq!(white.to_hex(), "#FFFFFF");

        let from_black = Okhsl::from(Srgb::from_u8(0, 0, 0));
        assert_eq!(from_black.s, 0.0);
        assert_eq!(from_black.l, 0.0);

        // White's Oklab lightness is 1.0 only to ~8 digits (matrix
        // rounding), so it misses the short circuit by a hair.
        let from_white = Okhsl::from(Srgb::from_u8(255, 255, 255));
        assert_eq!(from_white.s, 0.0);
        assert!(from_white.l > 0.999_999, "white lightness: {}", from_white.l);
    }

    #[test]
    fn test_new_clamps_and_normalizes() {
        let c = Okhsl::new(-30.0, 1.5, -0.2);
        assert_eq!(c.h, 330.0);
        assert_eq!(c.s, 1.0);
        assert_eq!(c.l, 0.0);
    }

    #[test]
    fn test_srgb_round_trip_within_one_lsb() {
        let mut cache = ChromaCache::new();
        let colors = [
            (255u8, 0u8, 0u8),
            (0, 255, 0),
            (0, 0, 255),
            (46, 52, 64),
            (191, 97, 106),
            (235, 203, 139),
            (128, 128, 128),
            (17, 34, 51),
        ];
        for (r, g, b) in colors {
            let original = Srgb::from_u8(r, g, b);
            let back = Okhsl::from_srgb(original, &mut cache).to_srgb(&mut cache);
            let [br, bg, bb] = back.to_bytes();
            assert!(
                (i16::from(br) - i16::from(r)).abs() <= 1
                    && (i16::from(bg) - i16::from(g)).abs() <= 1
                    && (i16::from(bb) - i16::from(b)).abs() <= 1,
                "round trip drifted for #{r:02X}{g:02X}{b:02X}: got {}",
                back.to_hex()
            );
        }
    }

    #[test]
    fn test_saturation_sweep_stays_in_gamut() {
        use crate::color::gamut::in_gamut;

        let mut cache = ChromaCache::new();
        for s in [0.0, 0.25, 0.5, 0.75, 1.0] {
            for hue in [0.0, 72.0, 144.0, 216.0, 288.0] {
                let lch = Okhsl::new(hue, s, 0.6).to_oklch(&mut cache);
                assert!(
                    in_gamut(Oklab::from(lch)),
                    "h={hue} s={s} escaped the gamut"
                );
            }
        }
    }
}
