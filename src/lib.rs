//! Huegen - perceptual terminal palette generator
//!
//! CLI front end for the okcolor engine.
//! This library exposes modules for integration testing.

pub mod error;
pub mod output;
pub mod presets;
pub mod report;
