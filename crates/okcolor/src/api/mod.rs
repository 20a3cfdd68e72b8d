//! Public API for the okcolor crate.
//!
//! This module provides the high-level API: [`PaletteGenerator`] builder
//! and [`EngineError`] unified error type.

mod builder;
mod error;

pub use builder::PaletteGenerator;
pub use error::EngineError;
