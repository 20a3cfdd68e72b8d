//! Palette generation
//!
//! Turns abstract parameters (count, saturation, lightness, hue offset,
//! background) into a concrete, contrast-validated color set. See
//! [`generate_palette`] for the algorithm and [`Thresholds`] for the
//! contrast policy.

mod error;
mod generator;
mod options;

pub use error::GenerateError;
pub use generator::{generate_palette, GeneratedPalette, PaletteColor};
pub use options::{GenerateOptions, Thresholds};
