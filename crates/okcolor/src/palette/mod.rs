//! Palette types and utilities
//!
//! This module provides the palette container analyzed and produced by
//! this crate, plus the error types for parsing and validation.

mod error;
#[allow(clippy::module_inception)]
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::Palette;
