//! # Generator Configuration
//!
//! The bounds a batch is drawn from, loaded from TOML or built in code.
//!
//! Every field is optional; missing fields take the defaults below.
//!
//! ```toml
//! count = 20
//! size_min = 14.0
//! size_max = 26.0
//! duration_min = 6.0
//! duration_max = 11.0
//! asset = "/coin.svg"
//! ```
//!
//! A config is used in two forms:
//! - `GeneratorConfig`: exactly what the caller wrote, possibly malformed
//! - `ResolvedConfig`: normalized bounds the generator actually draws from

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BoundField, ConfigIssue, RainError, RainResult};

/// Default number of coins in the sky at once.
pub const DEFAULT_COUNT: i64 = 20;
/// Default minimum coin size (px).
pub const DEFAULT_SIZE_MIN: f32 = 14.0;
/// Default maximum coin size (px).
pub const DEFAULT_SIZE_MAX: f32 = 26.0;
/// Default minimum fall duration (seconds).
pub const DEFAULT_DURATION_MIN: f32 = 6.0;
/// Default maximum fall duration (seconds).
pub const DEFAULT_DURATION_MAX: f32 = 11.0;
/// Default coin image.
pub const DEFAULT_ASSET: &str = "/coin.svg";

/// Caller-facing generator configuration.
///
/// Values are kept exactly as given. Use [`GeneratorConfig::resolve`] to get
/// the normalized bounds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of descriptors per batch. Negative means zero.
    pub count: i64,
    /// Minimum coin size (px).
    pub size_min: f32,
    /// Maximum coin size (px).
    pub size_max: f32,
    /// Minimum fall duration (seconds).
    pub duration_min: f32,
    /// Maximum fall duration (seconds).
    pub duration_max: f32,
    /// Opaque reference to the coin image. Never interpreted.
    pub asset: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            size_min: DEFAULT_SIZE_MIN,
            size_max: DEFAULT_SIZE_MAX,
            duration_min: DEFAULT_DURATION_MIN,
            duration_max: DEFAULT_DURATION_MAX,
            asset: DEFAULT_ASSET.to_owned(),
        }
    }
}

impl GeneratorConfig {
    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`RainError::Parse`] if the text is not valid TOML or a field
    /// has the wrong type.
    pub fn from_toml_str(text: &str) -> RainResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`RainError::Io`] if the file cannot be read and
    /// [`RainError::Parse`] if it cannot be decoded.
    pub fn from_toml_file(path: impl AsRef<Path>) -> RainResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| RainError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Sets the number of descriptors.
    #[must_use]
    pub fn with_count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    /// Sets the size range (px).
    #[must_use]
    pub fn with_size(mut self, min: f32, max: f32) -> Self {
        self.size_min = min;
        self.size_max = max;
        self
    }

    /// Sets the duration range (seconds).
    #[must_use]
    pub fn with_duration(mut self, min: f32, max: f32) -> Self {
        self.duration_min = min;
        self.duration_max = max;
        self
    }

    /// Sets the asset reference.
    #[must_use]
    pub fn with_asset(mut self, asset: impl Into<String>) -> Self {
        self.asset = asset.into();
        self
    }

    /// Memoization identity of this config.
    #[inline]
    #[must_use]
    pub fn key(&self) -> GenerationKey {
        GenerationKey {
            count: resolved_count(self.count),
            bounds: [
                self.size_min.to_bits(),
                self.size_max.to_bits(),
                self.duration_min.to_bits(),
                self.duration_max.to_bits(),
            ],
        }
    }

    /// Lists every contract violation in this config.
    #[must_use]
    pub fn issues(&self) -> Vec<ConfigIssue> {
        self.normalize().1
    }

    /// Strict check for callers that refuse malformed configs.
    ///
    /// # Errors
    ///
    /// Returns [`RainError::InvalidConfiguration`] listing every issue found.
    pub fn validate(&self) -> RainResult<()> {
        let issues = self.issues();
        if issues.is_empty() {
            return Ok(());
        }
        let message = issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(RainError::InvalidConfiguration(message))
    }

    /// Normalizes the config. Never fails.
    ///
    /// Each repaired issue is logged at `warn`.
    #[must_use]
    pub fn resolve(&self) -> ResolvedConfig {
        let (resolved, issues) = self.normalize();
        for issue in &issues {
            tracing::warn!("coin rain config normalized: {issue}");
        }
        resolved
    }

    fn normalize(&self) -> (ResolvedConfig, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        if self.count < 0 {
            issues.push(ConfigIssue::NegativeCount(self.count));
        }
        let count = resolved_count(self.count);

        // Sizes may be negative; only non-finite values are repaired.
        let size_min = finite_or_default(BoundField::SizeMin, self.size_min, DEFAULT_SIZE_MIN, &mut issues);
        let mut size_max = finite_or_default(BoundField::SizeMax, self.size_max, DEFAULT_SIZE_MAX, &mut issues);
        if size_min > size_max {
            issues.push(ConfigIssue::InvertedSizeRange {
                min: size_min,
                max: size_max,
            });
            size_max = size_min;
        }

        let duration_min = non_negative_duration(
            BoundField::DurationMin,
            self.duration_min,
            DEFAULT_DURATION_MIN,
            &mut issues,
        );
        let mut duration_max = non_negative_duration(
            BoundField::DurationMax,
            self.duration_max,
            DEFAULT_DURATION_MAX,
            &mut issues,
        );
        if duration_min > duration_max {
            issues.push(ConfigIssue::InvertedDurationRange {
                min: duration_min,
                max: duration_max,
            });
            duration_max = duration_min;
        }

        let resolved = ResolvedConfig {
            count,
            size_min,
            size_max,
            duration_min,
            duration_max,
        };
        (resolved, issues)
    }
}

/// Negative counts resolve to 0, counts past `u32::MAX` saturate.
fn resolved_count(count: i64) -> u32 {
    if count < 0 {
        0
    } else {
        u32::try_from(count).unwrap_or(u32::MAX)
    }
}

fn finite_or_default(field: BoundField, value: f32, default: f32, issues: &mut Vec<ConfigIssue>) -> f32 {
    if value.is_finite() {
        value
    } else {
        issues.push(ConfigIssue::NonFiniteBound(field));
        default
    }
}

/// Durations are floored at 0 so `-duration_max <= delay <= 0` stays satisfiable.
fn non_negative_duration(field: BoundField, value: f32, default: f32, issues: &mut Vec<ConfigIssue>) -> f32 {
    let value = finite_or_default(field, value, default, issues);
    if value < 0.0 {
        issues.push(ConfigIssue::NegativeDuration(field, value));
        return 0.0;
    }
    value
}

/// Normalized bounds.
///
/// Invariants: all bounds finite, durations `>= 0`, `size_min <= size_max`,
/// `duration_min <= duration_max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedConfig {
    count: u32,
    size_min: f32,
    size_max: f32,
    duration_min: f32,
    duration_max: f32,
}

impl ResolvedConfig {
    /// Number of descriptors per batch.
    #[inline]
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Size range (px), inclusive.
    #[inline]
    #[must_use]
    pub const fn size_range(&self) -> (f32, f32) {
        (self.size_min, self.size_max)
    }

    /// Duration range (seconds), inclusive.
    #[inline]
    #[must_use]
    pub const fn duration_range(&self) -> (f32, f32) {
        (self.duration_min, self.duration_max)
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        GeneratorConfig::default().normalize().0
    }
}

/// Identity of a config for memoization.
///
/// Covers the resolved `count` and the four bounds (bit-exact). The asset is not part of
/// the key: swapping the image must not restart every coin's animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GenerationKey {
    count: u32,
    bounds: [u32; 4],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_header_layer() {
        let config = GeneratorConfig::default();
        assert_eq!(config.count, 20);
        assert_eq!((config.size_min, config.size_max), (14.0, 26.0));
        assert_eq!((config.duration_min, config.duration_max), (6.0, 11.0));
        assert_eq!(config.asset, "/coin.svg");
        assert!(config.issues().is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GeneratorConfig::from_toml_str("count = 5\nasset = \"/coin.png\"").unwrap();
        assert_eq!(config.count, 5);
        assert_eq!(config.asset, "/coin.png");
        assert_eq!(config.size_max, DEFAULT_SIZE_MAX);
        assert_eq!(config.duration_min, DEFAULT_DURATION_MIN);
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let err = GeneratorConfig::from_toml_str("count = \"many\"").unwrap_err();
        assert!(matches!(err, RainError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = GeneratorConfig::from_toml_file("/definitely/not/here/coins.toml").unwrap_err();
        assert!(matches!(err, RainError::Io { .. }));
    }

    #[test]
    fn test_negative_count_resolves_to_zero() {
        let config = GeneratorConfig::default().with_count(-4);
        assert_eq!(config.issues(), vec![ConfigIssue::NegativeCount(-4)]);
        assert_eq!(config.resolve().count(), 0);
    }

    #[test]
    fn test_inverted_ranges_collapse_to_min() {
        let config = GeneratorConfig::default()
            .with_size(30.0, 10.0)
            .with_duration(9.0, 2.0);
        let resolved = config.resolve();
        assert_eq!(resolved.size_range(), (30.0, 30.0));
        assert_eq!(resolved.duration_range(), (9.0, 9.0));
        assert_eq!(config.issues().len(), 2);
    }

    #[test]
    fn test_non_finite_bounds_fall_back_to_defaults() {
        let config = GeneratorConfig::default()
            .with_size(f32::NAN, 20.0)
            .with_duration(1.0, f32::INFINITY);
        let resolved = config.resolve();
        assert_eq!(resolved.size_range(), (DEFAULT_SIZE_MIN, 20.0));
        assert_eq!(resolved.duration_range(), (1.0, DEFAULT_DURATION_MAX));
    }

    #[test]
    fn test_negative_durations_clamp_to_zero() {
        let config = GeneratorConfig::default().with_duration(-3.0, -1.0);
        let resolved = config.resolve();
        assert_eq!(resolved.duration_range(), (0.0, 0.0));
        assert_eq!(
            config.issues(),
            vec![
                ConfigIssue::NegativeDuration(BoundField::DurationMin, -3.0),
                ConfigIssue::NegativeDuration(BoundField::DurationMax, -1.0),
            ]
        );
    }

    #[test]
    fn test_negative_sizes_pass_through() {
        let config = GeneratorConfig::default().with_size(-5.0, -1.0);
        assert!(config.issues().is_empty());
        assert!(config.validate().is_ok());
        assert_eq!(config.resolve().size_range(), (-5.0, -1.0));
    }

    #[test]
    fn test_negative_counts_share_a_key() {
        let empty = GeneratorConfig::default().with_count(0).key();
        assert_eq!(GeneratorConfig::default().with_count(-1).key(), empty);
        assert_eq!(GeneratorConfig::default().with_count(-2).key(), empty);
    }

    #[test]
    fn test_validate_lists_all_issues() {
        let config = GeneratorConfig::default().with_count(-1).with_size(5.0, 1.0);
        let err = config.validate().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("count is negative"));
        assert!(message.contains("size_min 5 exceeds size_max 1"));
    }

    #[test]
    fn test_key_ignores_asset() {
        let a = GeneratorConfig::default();
        let b = GeneratorConfig::default().with_asset("/coin.png");
        assert_eq!(a.key(), b.key());
        assert_ne!(a.key(), a.clone().with_size(14.0, 27.0).key());
        assert_ne!(a.key(), a.clone().with_count(21).key());
    }
}
