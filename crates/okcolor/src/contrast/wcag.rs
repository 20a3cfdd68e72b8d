//! WCAG 2.x contrast ratio
//!
//! The classic accessibility metric: relative luminance of both colors
//! through the piecewise sRGB transfer function, then the ratio of the
//! lighter to the darker with a 0.05 flare term on each side.
//!
//! The ratio is symmetric (it does not care which color is the text)
//! and ranges from 1.0 (identical luminance) to 21.0 (black on white).

use crate::color::{LinearRgb, Srgb};

/// Rec. 709 luma weight for the red channel.
const LUMA_R: f64 = 0.2126;
/// Rec. 709 luma weight for the green channel.
const LUMA_G: f64 = 0.7152;
/// Rec. 709 luma weight for the blue channel.
const LUMA_B: f64 = 0.0722;

/// Ambient flare term added to both luminances.
const FLARE: f64 = 0.05;

/// WCAG relative luminance of a gamma-encoded sRGB color.
///
/// Linearizes through the standard piecewise transfer function, then
/// applies the Rec. 709 luma weights. Ranges 0.0 (black) to 1.0
/// (white).
pub fn relative_luminance(color: Srgb) -> f64 {
    let rgb = LinearRgb::from(color);
    LUMA_R * rgb.r + LUMA_G * rgb.g + LUMA_B * rgb.b
}

/// WCAG 2.x contrast ratio between two colors, in `1.0..=21.0`.
///
/// Symmetric in its arguments; WCAG does not distinguish text from
/// background.
pub fn wcag_ratio(a: Srgb, b: Srgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + FLARE) / (darker + FLARE)
}
