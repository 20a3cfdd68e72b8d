//! Error types for palette generation.

use std::error::Error;
use std::fmt;

/// Errors from validating generation parameters.
///
/// These are the hard failures: they fire before any color math runs.
/// Contrast shortfalls during generation are never errors; they surface
/// as flags on the result instead.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateError {
    /// The requested color count was zero.
    ZeroCount,

    /// A numeric parameter lies outside its declared domain.
    ///
    /// Saturation and lightness must be finite percentages in
    /// `0.0..=100.0`; the hue offset must be finite (it wraps, so any
    /// finite angle is fine).
    ParameterOutOfRange {
        /// Which parameter was rejected.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCount => {
                write!(f, "palette color count must be at least 1")
            }
            Self::ParameterOutOfRange { name, value } => {
                write!(f, "invalid {name}: {value} is outside the supported range")
            }
        }
    }
}

impl Error for GenerateError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            GenerateError::ZeroCount.to_string(),
            "palette color count must be at least 1"
        );

        let err = GenerateError::ParameterOutOfRange {
            name: "saturation",
            value: 120.0,
        };
        assert_eq!(
            err.to_string(),
            "invalid saturation: 120 is outside the supported range"
        );
    }

    #[test]
    fn test_error_display_nan() {
        let err = GenerateError::ParameterOutOfRange {
            name: "lightness",
            value: f64::NAN,
        };
        assert_eq!(
            err.to_string(),
            "invalid lightness: NaN is outside the supported range"
        );
    }
}
