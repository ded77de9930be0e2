//! Error types for the appraisal engine
//!
//! Wraps the per-crate errors so callers deal with one type:
//! - Model parse failures
//! - Rejected status transitions and unknown names
//! - Configuration failures

use appraisal_authz::AuthzError;
use appraisal_model::ModelError;

/// Main engine error type
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Model parse failure
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// Authorization failure
    #[error("authorization error: {0}")]
    Authz(#[from] AuthzError),

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl EngineError {
    /// Check if the error is a rejected status change
    #[inline]
    #[must_use]
    pub fn is_illegal_transition(&self) -> bool {
        matches!(self, Self::Authz(err) if err.is_transition())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML could not be parsed
    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range
    #[error("invalid value for {field}: {message}")]
    InvalidValue {
        /// Offending field
        field: &'static str,
        /// What is wrong with it
        message: String,
    },
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
