//! Color space types and conversions
//!
//! The conversion pipeline runs gamma-encoded sRGB through linear RGB
//! into the Oklab family:
//!
//! ```text
//! hex string <-> Srgb <-> LinearRgb <-> Oklab <-> Oklch <-> Okhsl
//! ```
//!
//! Each hop is its own `From` impl (or an explicit method where a
//! [`ChromaCache`] is involved), so conversions compose and no step
//! hides a gamma decode or a gamut search inside another.

pub mod gamut;
pub mod linear;
pub mod okhsl;
pub mod oklab;
pub mod oklch;
pub mod srgb;

pub use gamut::{in_gamut, max_chroma, ChromaCache, SearchOptions};
pub use linear::LinearRgb;
pub use okhsl::Okhsl;
pub use oklab::Oklab;
pub use oklch::Oklch;
pub use srgb::Srgb;
