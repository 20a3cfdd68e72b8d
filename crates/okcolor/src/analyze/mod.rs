//! Contrast and distribution analysis for existing palettes.
//!
//! Takes any [`Palette`](crate::palette::Palette), scores every color
//! against the shared background with both contrast metrics, and
//! summarizes how the palette occupies the Okhsl cylinder. Use this to
//! audit a hand-picked scheme the same way generated palettes are
//! scored.

mod analyzer;
mod stats;

pub use analyzer::{analyze, ColorReport, MetricSummary, PaletteAnalysis};
