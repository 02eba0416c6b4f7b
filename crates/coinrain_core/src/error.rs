//! # Coin Rain Error Types
//!
//! Loading errors and the catalogue of configuration problems that
//! normalization repairs.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or strictly validating a config.
#[derive(Error, Debug)]
pub enum RainError {
    /// The configuration violates a bound contract.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The configuration text is not valid TOML for this schema.
    #[error("config parse error: {0}")]
    Parse(String),

    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl From<toml::de::Error> for RainError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result type for coin rain operations.
pub type RainResult<T> = Result<T, RainError>;

/// Which bounded field a [`ConfigIssue`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundField {
    /// `size_min`
    SizeMin,
    /// `size_max`
    SizeMax,
    /// `duration_min`
    DurationMin,
    /// `duration_max`
    DurationMax,
}

impl BoundField {
    /// Config key as written in TOML.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::SizeMin => "size_min",
            Self::SizeMax => "size_max",
            Self::DurationMin => "duration_min",
            Self::DurationMax => "duration_max",
        }
    }
}

/// A single contract violation found in a [`GeneratorConfig`].
///
/// None of these are fatal: `GeneratorConfig::resolve` repairs each one.
///
/// [`GeneratorConfig`]: crate::GeneratorConfig
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigIssue {
    /// `count` below zero. Resolved to 0.
    NegativeCount(i64),
    /// NaN or infinite bound. Resolved to the field default.
    NonFiniteBound(BoundField),
    /// Duration below zero. Resolved to 0.
    NegativeDuration(BoundField, f32),
    /// `size_min > size_max`. Resolved to a zero-width range at `size_min`.
    InvertedSizeRange {
        /// Configured minimum.
        min: f32,
        /// Configured maximum.
        max: f32,
    },
    /// `duration_min > duration_max`. Resolved to a zero-width range at `duration_min`.
    InvertedDurationRange {
        /// Configured minimum.
        min: f32,
        /// Configured maximum.
        max: f32,
    },
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeCount(count) => write!(f, "count is negative ({count})"),
            Self::NonFiniteBound(field) => write!(f, "{} is not finite", field.key()),
            Self::NegativeDuration(field, value) => {
                write!(f, "{} is negative ({value})", field.key())
            }
            Self::InvertedSizeRange { min, max } => {
                write!(f, "size_min {min} exceeds size_max {max}")
            }
            Self::InvertedDurationRange { min, max } => {
                write!(f, "duration_min {min} exceeds duration_max {max}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_messages_name_the_field() {
        let issue = ConfigIssue::NonFiniteBound(BoundField::DurationMax);
        assert_eq!(issue.to_string(), "duration_max is not finite");

        let issue = ConfigIssue::InvertedSizeRange { min: 30.0, max: 10.0 };
        assert_eq!(issue.to_string(), "size_min 30 exceeds size_max 10");
    }

    #[test]
    fn test_toml_error_becomes_parse_error() {
        let err = toml::from_str::<toml::Table>("count = ").unwrap_err();
        let err = RainError::from(err);
        assert!(matches!(err, RainError::Parse(_)));
    }
}
