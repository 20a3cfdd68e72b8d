//! Unified error type for the okcolor public API.
//!
//! [`EngineError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use crate::generate::GenerateError;
use crate::palette::{PaletteError, ParseColorError};
use std::fmt;

/// Unified error type for the okcolor public API.
///
/// Wraps all error types from the crate into a single enum for
/// convenient `?` propagation in application code.
///
/// # Example
///
/// ```
/// use okcolor::{EngineError, Palette};
///
/// fn nord_subset() -> Result<Palette, EngineError> {
///     let palette = Palette::from_hex("#2E3440", &["#BF616A", "#A3BE8C"])?;
///     Ok(palette)
/// }
/// ```
#[derive(Debug)]
pub enum EngineError {
    /// Palette construction error (no colors, or a color failed to parse)
    Palette(PaletteError),
    /// Color parsing error (invalid hex string)
    ParseColor(ParseColorError),
    /// Generation parameter error (zero count, out-of-range coordinate)
    Generate(GenerateError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Palette(err) => write!(f, "palette error: {}", err),
            EngineError::ParseColor(err) => write!(f, "color parse error: {}", err),
            EngineError::Generate(err) => write!(f, "generation error: {}", err),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Palette(err) => Some(err),
            EngineError::ParseColor(err) => Some(err),
            EngineError::Generate(err) => Some(err),
        }
    }
}

impl From<PaletteError> for EngineError {
    fn from(err: PaletteError) -> Self {
        EngineError::Palette(err)
    }
}

impl From<ParseColorError> for EngineError {
    fn from(err: ParseColorError) -> Self {
        EngineError::ParseColor(err)
    }
}

impl From<GenerateError> for EngineError {
    fn from(err: GenerateError) -> Self {
        EngineError::Generate(err)
    }
}
