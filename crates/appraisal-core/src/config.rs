//! Engine configuration
//!
//! Selects among the pure library functions; it never changes what those
//! functions compute.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Use weighted roll-ups for goals and objectives
    pub weighted_rollups: bool,
    /// Changes at or below this many points count as a stable trend
    pub trend_stable_band: f64,
}

impl EngineConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With weighted roll-ups
    #[inline]
    #[must_use]
    pub fn with_weighted_rollups(mut self, weighted: bool) -> Self {
        self.weighted_rollups = weighted;
        self
    }

    /// With stable trend band
    #[inline]
    #[must_use]
    pub fn with_trend_stable_band(mut self, band: f64) -> Self {
        self.trend_stable_band = band;
        self
    }

    /// Parse and validate configuration from TOML
    ///
    /// Missing keys take their defaults.
    ///
    /// # Errors
    /// - `ConfigError::Parse` if the TOML is malformed
    /// - `ConfigError::InvalidValue` if a value is out of range
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    /// `ConfigError::InvalidValue` naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.trend_stable_band.is_finite() || self.trend_stable_band < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "trend_stable_band",
                message: format!("must be a non-negative number, got {}", self.trend_stable_band),
            });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weighted_rollups: false,
            trend_stable_band: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EngineConfig::new();
        assert!(!config.weighted_rollups);
        assert_eq!(config.trend_stable_band, 0.0);
    }

    #[test]
    fn builder() {
        let config = EngineConfig::new()
            .with_weighted_rollups(true)
            .with_trend_stable_band(2.5);
        assert!(config.weighted_rollups);
        assert_eq!(config.trend_stable_band, 2.5);
    }

    #[test]
    fn from_toml_full() {
        let config = EngineConfig::from_toml_str(
            r"
            weighted_rollups = true
            trend_stable_band = 3.0
            ",
        )
        .unwrap();
        assert_eq!(
            config,
            EngineConfig::new()
                .with_weighted_rollups(true)
                .with_trend_stable_band(3.0)
        );
    }

    #[test]
    fn from_toml_partial_uses_defaults() {
        let config = EngineConfig::from_toml_str("weighted_rollups = true").unwrap();
        assert!(config.weighted_rollups);
        assert_eq!(config.trend_stable_band, 0.0);

        assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn from_toml_rejects_negative_band() {
        let err = EngineConfig::from_toml_str("trend_stable_band = -1.0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { field: "trend_stable_band", .. }
        ));
    }

    #[test]
    fn from_toml_rejects_bad_types() {
        let err = EngineConfig::from_toml_str("weighted_rollups = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
