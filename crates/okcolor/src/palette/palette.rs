//! Palette struct pairing a background with its foreground colors.

use std::str::FromStr;

use super::error::PaletteError;
use crate::color::Srgb;

/// A terminal color palette: one background plus at least one
/// foreground color.
///
/// The background is stored separately because every contrast question
/// this crate answers is "foreground against background"; foregrounds
/// are never scored against each other.
///
/// Duplicate foreground colors are allowed. Analysis reports each entry
/// on its own, and real-world palettes do occasionally repeat a color
/// across slots.
///
/// # Example
///
/// ```
/// use okcolor::{Palette, Srgb};
///
/// let palette = Palette::new(
///     Srgb::from_u8(0, 0, 0),
///     &[Srgb::from_u8(255, 85, 85), Srgb::from_u8(80, 250, 123)],
/// )
/// .unwrap();
///
/// assert_eq!(palette.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    background: Srgb,
    colors: Vec<Srgb>,
}

impl Palette {
    /// Create a palette from a background and foreground colors.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyPalette`] if `colors` is empty; a
    /// palette with nothing to put on the background is meaningless.
    pub fn new(background: Srgb, colors: &[Srgb]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        Ok(Self {
            background,
            colors: colors.to_vec(),
        })
    }

    /// Create a palette from hex color strings.
    ///
    /// Accepts the same formats as [`Srgb::from_str`]: `#RRGGBB`,
    /// `#RGB`, with or without the leading `#`.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] for an invalid hex string,
    /// or [`PaletteError::EmptyPalette`] if `colors` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use okcolor::Palette;
    ///
    /// let nord = Palette::from_hex(
    ///     "#2E3440",
    ///     &["#BF616A", "#A3BE8C", "#EBCB8B", "#81A1C1", "#B48EAD", "#8FBCBB"],
    /// )
    /// .unwrap();
    /// assert_eq!(nord.len(), 6);
    /// ```
    pub fn from_hex(background: &str, colors: &[&str]) -> Result<Self, PaletteError> {
        let background = Srgb::from_str(background).map_err(PaletteError::ParseColor)?;
        let colors: Vec<Srgb> = colors
            .iter()
            .map(|s| Srgb::from_str(s).map_err(PaletteError::ParseColor))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(background, &colors)
    }

    /// The background color.
    #[inline]
    pub fn background(&self) -> Srgb {
        self.background
    }

    /// The foreground colors, in palette order.
    #[inline]
    pub fn colors(&self) -> &[Srgb] {
        &self.colors
    }

    /// Get the foreground color at the given index.
    #[inline]
    pub fn color(&self, idx: usize) -> Srgb {
        self.colors[idx]
    }

    /// Number of foreground colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette has no foreground colors.
    ///
    /// Note: This always returns `false` since empty palettes are
    /// rejected at construction time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        // Always false - validated at construction
        self.colors.is_empty()
    }
}
