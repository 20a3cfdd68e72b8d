//! Contrast metrics
//!
//! Two independent readability metrics over sRGB color pairs:
//!
//! - [`wcag_ratio`]: the WCAG 2.x luminance contrast ratio, symmetric,
//!   in `1.0..=21.0`
//! - [`apca_lc`]: the APCA lightness contrast Lc score, polarity aware,
//!   in roughly `-108.0..=106.0`
//!
//! They disagree by design (different luminance models, different
//! curves), which is why palette validation checks both.

pub mod apca;
pub mod wcag;

pub use apca::{apca_lc, screen_luminance};
pub use wcag::{relative_luminance, wcag_ratio};
