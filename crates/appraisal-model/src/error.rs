//! Error types for the model crate
//!
//! Only string parsing can fail here; every other operation on the model is
//! total.

/// Errors raised when parsing model enums from their wire names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Status name outside the lifecycle enumeration
    #[error("unknown status: '{0}'")]
    UnknownStatus(String),

    /// Role name outside the role hierarchy
    #[error("unknown role: '{0}'")]
    UnknownRole(String),
}
