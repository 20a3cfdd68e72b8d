//! sRGB color type
//!
//! sRGB is the standard color space for terminal emulators and hex color
//! notation. It applies a gamma curve to linear light values so that
//! brightness steps look uniform on a display.

use std::str::FromStr;

use super::linear::{self, LinearRgb};
use crate::palette::ParseColorError;

/// A color in sRGB color space.
///
/// sRGB is the encoding used for hex strings and truecolor escape
/// sequences. It is gamma-corrected and therefore NOT suitable for
/// arithmetic; convert to [`LinearRgb`] before doing any math.
///
/// Channels are in the range 0.0..=1.0 (mapping to 0..255 for 8-bit).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red channel (gamma-corrected, 0.0..=1.0)
    pub r: f64,
    /// Green channel (gamma-corrected, 0.0..=1.0)
    pub g: f64,
    /// Blue channel (gamma-corrected, 0.0..=1.0)
    pub b: f64,
}

impl Srgb {
    /// Create a new Srgb color from float values.
    ///
    /// # Arguments
    /// * `r` - Red channel (0.0..=1.0)
    /// * `g` - Green channel (0.0..=1.0)
    /// * `b` - Blue channel (0.0..=1.0)
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create an Srgb color from 8-bit unsigned integer values.
    ///
    /// # Arguments
    /// * `r` - Red channel (0..=255)
    /// * `g` - Green channel (0..=255)
    /// * `b` - Blue channel (0..=255)
    ///
    /// # Example
    /// ```
    /// use okcolor::Srgb;
    /// let red = Srgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Create an Srgb color from a byte array [R, G, B].
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    ///
    /// Rounds and clamps values to the 0..=255 range.
    ///
    /// # Example
    /// ```
    /// use okcolor::Srgb;
    /// let color = Srgb::new(1.0, 0.5, 0.0);
    /// let bytes = color.to_bytes();
    /// assert_eq!(bytes[0], 255); // red
    /// assert_eq!(bytes[2], 0);   // blue
    /// ```
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Format as an uppercase hex string with a leading `#`.
    ///
    /// The output always round-trips back through [`FromStr`] to the
    /// same byte values.
    ///
    /// # Example
    /// ```
    /// use okcolor::Srgb;
    /// let color = Srgb::from_u8(255, 128, 0);
    /// assert_eq!(color.to_hex(), "#FF8000");
    /// ```
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

impl From<LinearRgb> for Srgb {
    /// Convert from linear RGB to sRGB.
    ///
    /// Channels are clamped into 0.0..=1.0 before encoding; this is the
    /// sRGB gamut clipping policy for out-of-range results of inverse
    /// color-space transforms.
    fn from(lin: LinearRgb) -> Self {
        Self {
            r: linear::linear_to_srgb(lin.r.clamp(0.0, 1.0)),
            g: linear::linear_to_srgb(lin.g.clamp(0.0, 1.0)),
            b: linear::linear_to_srgb(lin.b.clamp(0.0, 1.0)),
        }
    }
}

impl FromStr for Srgb {
    type Err = ParseColorError;

    /// Parse an sRGB color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` - standard 6-digit hex with hash
    /// - `RRGGBB` - standard 6-digit hex without hash
    /// - `#RGB` - shorthand 3-digit hex with hash (expands to RRGGBB)
    /// - `RGB` - shorthand 3-digit hex without hash
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use okcolor::Srgb;
    ///
    /// let white: Srgb = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white.r, 1.0);
    ///
    /// let red: Srgb = "#F00".parse().unwrap();
    /// assert_eq!(red.r, 1.0);
    /// assert_eq!(red.g, 0.0);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        match s.len() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::from_u8(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::from_u8(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}
