//! Error types for the authorization crate

use appraisal_model::StatusType;

/// Authorization errors
///
/// Permission derivation itself never fails; these only come from
/// transition validation and from parsing names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthzError {
    /// Status change not in the transition table
    #[error("illegal status transition: {from} -> {to}")]
    IllegalTransition {
        /// Current status
        from: StatusType,
        /// Requested status
        to: StatusType,
    },

    /// Review type name not recognised
    #[error("unknown review type: '{0}'")]
    UnknownReviewType(String),

    /// `action_resource` key not in the permission table
    #[error("unknown permission: '{0}'")]
    UnknownPermission(String),
}

impl AuthzError {
    /// Check if the error came from a rejected status change
    #[inline]
    #[must_use]
    pub fn is_transition(&self) -> bool {
        matches!(self, Self::IllegalTransition { .. })
    }
}
