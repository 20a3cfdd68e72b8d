//! APCA lightness contrast (Lc)
//!
//! The Accessible Perceptual Contrast Algorithm models perceived text
//! contrast rather than a luminance ratio. Unlike WCAG it is polarity
//! aware: dark text on a light background scores positive, light text
//! on a dark background scores negative, and the magnitudes are not
//! mirror images of each other.
//!
//! This implements revision 0.0.98G-4g of the algorithm. APCA is still
//! evolving; the revision is pinned so scores stay stable, and the
//! constants below must not be "corrected" independently of each other.
//!
//! Note that APCA deliberately uses a plain 2.4 power curve for
//! linearization, not the piecewise sRGB transfer function used by
//! WCAG, so this module does not go through [`LinearRgb`].
//!
//! [`LinearRgb`]: crate::color::LinearRgb

use crate::color::Srgb;

/// APCA red channel coefficient (SA98G).
const SA98G_RED: f64 = 0.2126729;
/// APCA green channel coefficient (SA98G).
const SA98G_GREEN: f64 = 0.7151522;
/// APCA blue channel coefficient (SA98G).
const SA98G_BLUE: f64 = 0.0721750;

/// Exponent of the simple power-curve linearization.
const MAIN_TRC: f64 = 2.4;

/// Luminance below which the black soft clamp engages.
const BLK_THRS: f64 = 0.022;
/// Exponent of the black soft clamp.
const BLK_CLMP: f64 = 1.414;

/// Background exponent, normal (dark text on light) polarity.
const NORM_BG: f64 = 0.56;
/// Text exponent, normal polarity.
const NORM_TXT: f64 = 0.57;
/// Background exponent, reverse (light text on dark) polarity.
const REV_BG: f64 = 0.65;
/// Text exponent, reverse polarity.
const REV_TXT: f64 = 0.62;

/// Output scale applied to the raw contrast difference.
const SCALE: f64 = 1.14;
/// Offset subtracted from (or added to) scaled contrast above the clip.
const LO_OFFSET: f64 = 0.027;
/// Scaled contrast magnitudes below this clip to zero.
const LO_CLIP: f64 = 0.1;
/// Minimum luminance difference considered non-zero.
const DELTA_Y_MIN: f64 = 0.0005;

/// APCA screen luminance estimate of a gamma-encoded sRGB color.
///
/// A plain 2.4 power curve per channel with the SA98G coefficients.
/// This is close to, but intentionally not the same as, WCAG relative
/// luminance.
pub fn screen_luminance(color: Srgb) -> f64 {
    SA98G_RED * color.r.powf(MAIN_TRC)
        + SA98G_GREEN * color.g.powf(MAIN_TRC)
        + SA98G_BLUE * color.b.powf(MAIN_TRC)
}

/// Soft clamp very dark luminances toward the flare floor.
fn soft_clamp(y: f64) -> f64 {
    if y > BLK_THRS {
        y
    } else {
        y + (BLK_THRS - y).powf(BLK_CLMP)
    }
}

/// APCA lightness contrast (Lc) of `text` against `background`.
///
/// # Returns
///
/// A score in roughly `-108.0..=106.0`. Positive means dark text on a
/// light background, negative means light text on a dark background.
/// Pairs with too little luminance difference to render as contrast at
/// all score exactly `0.0`.
///
/// Readability thresholds work on the magnitude: |Lc| 45 roughly
/// corresponds to WCAG 3:1, |Lc| 60 to 4.5:1, |Lc| 75 to 7:1.
pub fn apca_lc(text: Srgb, background: Srgb) -> f64 {
    let y_txt = soft_clamp(screen_luminance(text));
    let y_bg = soft_clamp(screen_luminance(background));

    if (y_bg - y_txt).abs() < DELTA_Y_MIN {
        return 0.0;
    }

    if y_bg > y_txt {
        // Normal polarity: dark text on light background
        let sapc = (y_bg.powf(NORM_BG) - y_txt.powf(NORM_TXT)) * SCALE;
        if sapc < LO_CLIP {
            0.0
        } else {
            (sapc - LO_OFFSET) * 100.0
        }
    } else {
        // Reverse polarity: light text on dark background
        let sapc = (y_bg.powf(REV_BG) - y_txt.powf(REV_TXT)) * SCALE;
        if sapc > -LO_CLIP {
            0.0
        } else {
            (sapc + LO_OFFSET) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn hex(s: &str) -> Srgb {
        Srgb::from_str(s).unwrap()
    }

    #[test]
    fn test_black_on_white_reference_score() {
        let lc = apca_lc(hex("#000000"), hex("#FFFFFF"));
        assert!((lc - 106.04).abs() < 0.1, "black on white Lc: {lc}");
    }

    #[test]
    fn test_white_on_black_reference_score() {
        let lc = apca_lc(hex("#FFFFFF"), hex("#000000"));
        assert!((lc + 107.88).abs() < 0.1, "white on black Lc: {lc}");
    }

    #[test]
    fn test_polarity_signs() {
        // Dark text on light background: positive
        assert!(apca_lc(hex("#333333"), hex("#DDDDDD")) > 0.0);
        // Light text on dark background: negative
        assert!(apca_lc(hex("#DDDDDD"), hex("#333333")) < 0.0);
    }

    #[test]
    fn test_polarities_are_not_mirrors() {
        // APCA is direction aware: swapping text and background does
        // not simply flip the sign.
        let bow = apca_lc(hex("#000000"), hex("#FFFFFF"));
        let wob = apca_lc(hex("#FFFFFF"), hex("#000000"));
        assert!((bow + wob).abs() > 1.0, "bow={bow} wob={wob}");
    }

    #[test]
    fn test_identical_colors_score_zero() {
        for c in ["#000000", "#FFFFFF", "#808080", "#BF616A"] {
            assert_eq!(apca_lc(hex(c), hex(c)), 0.0, "self contrast for {c}");
        }
    }

    #[test]
    fn test_low_contrast_clips_to_zero() {
        // Two near-identical greys: scaled contrast lands below the
        // output clip and must come back as exactly zero.
        let lc = apca_lc(hex("#777777"), hex("#7A7A7A"));
        assert_eq!(lc, 0.0, "near-identical greys: {lc}");
    }

    #[test]
    fn test_soft_clamp_lifts_only_deep_darks() {
        assert_eq!(soft_clamp(0.5), 0.5);
        assert_eq!(soft_clamp(BLK_THRS), BLK_THRS);
        let lifted = soft_clamp(0.0);
        assert!(lifted > 0.0 && lifted < BLK_THRS, "clamped black: {lifted}");
    }

    #[test]
    fn test_mid_grey_pairs_have_moderate_scores() {
        // Sanity band for a typical readable pairing
        let lc = apca_lc(hex("#FFFFFF"), hex("#2E3440"));
        assert!(lc < -90.0 && lc > -110.0, "white on nord bg: {lc}");
    }
}
