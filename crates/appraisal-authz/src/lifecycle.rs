//! Status gates and legal transitions
//!
//! Gates depend on the status alone and apply identically to every entity
//! kind. The transition table is kept consistent with them: completing,
//! blocking, unblocking and reopening only happen from statuses whose gate
//! allows it.

use crate::error::AuthzError;
use appraisal_model::StatusType;
use serde::{Deserialize, Serialize};

/// Anything except `completed` and `cancelled`
#[inline]
#[must_use]
pub fn can_edit(status: StatusType) -> bool {
    !matches!(status, StatusType::Completed | StatusType::Cancelled)
}

/// `draft` or `not_started`
#[inline]
#[must_use]
pub fn can_delete(status: StatusType) -> bool {
    matches!(status, StatusType::Draft | StatusType::NotStarted)
}

/// `in_progress` or `active`
#[inline]
#[must_use]
pub fn can_complete(status: StatusType) -> bool {
    matches!(status, StatusType::InProgress | StatusType::Active)
}

/// `completed` or `cancelled`
#[inline]
#[must_use]
pub fn can_reopen(status: StatusType) -> bool {
    matches!(status, StatusType::Completed | StatusType::Cancelled)
}

/// `active` or `in_progress`
#[inline]
#[must_use]
pub fn can_block(status: StatusType) -> bool {
    matches!(status, StatusType::Active | StatusType::InProgress)
}

/// `blocked`
#[inline]
#[must_use]
pub fn can_unblock(status: StatusType) -> bool {
    status == StatusType::Blocked
}

/// Status-gated action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusAction {
    /// Change the entity
    Edit,
    /// Remove the entity
    Delete,
    /// Mark the entity completed
    Complete,
    /// Bring a finished entity back
    Reopen,
    /// Mark the entity blocked
    Block,
    /// Clear a block
    Unblock,
}

impl StatusAction {
    /// Every action, in declaration order
    pub const ALL: [StatusAction; 6] = [
        StatusAction::Edit,
        StatusAction::Delete,
        StatusAction::Complete,
        StatusAction::Reopen,
        StatusAction::Block,
        StatusAction::Unblock,
    ];

    /// Check the gate for this action
    #[must_use]
    pub fn permits(self, status: StatusType) -> bool {
        match self {
            StatusAction::Edit => can_edit(status),
            StatusAction::Delete => can_delete(status),
            StatusAction::Complete => can_complete(status),
            StatusAction::Reopen => can_reopen(status),
            StatusAction::Block => can_block(status),
            StatusAction::Unblock => can_unblock(status),
        }
    }
}

/// Actions whose gate holds for `status`
#[must_use]
pub fn available_actions(status: StatusType) -> Vec<StatusAction> {
    StatusAction::ALL
        .into_iter()
        .filter(|action| action.permits(status))
        .collect()
}

/// Statuses reachable from `from` in one step
#[must_use]
pub fn allowed_transitions(from: StatusType) -> &'static [StatusType] {
    match from {
        StatusType::Draft => &[
            StatusType::NotStarted,
            StatusType::InProgress,
            StatusType::Active,
            StatusType::Cancelled,
        ],
        StatusType::NotStarted => &[
            StatusType::Draft,
            StatusType::InProgress,
            StatusType::Active,
            StatusType::Cancelled,
        ],
        StatusType::InProgress => &[
            StatusType::Active,
            StatusType::Completed,
            StatusType::Blocked,
            StatusType::Overdue,
            StatusType::Cancelled,
        ],
        StatusType::Active => &[
            StatusType::InProgress,
            StatusType::Completed,
            StatusType::Blocked,
            StatusType::Overdue,
            StatusType::Cancelled,
        ],
        StatusType::Blocked => &[StatusType::InProgress, StatusType::Active, StatusType::Cancelled],
        StatusType::Overdue => &[StatusType::InProgress, StatusType::Active, StatusType::Cancelled],
        StatusType::Completed => &[StatusType::InProgress, StatusType::Active],
        StatusType::Cancelled => &[StatusType::Draft, StatusType::NotStarted],
    }
}

/// Check if `from -> to` is in the transition table
#[inline]
#[must_use]
pub fn can_transition(from: StatusType, to: StatusType) -> bool {
    allowed_transitions(from).contains(&to)
}

/// Validate a status change
///
/// # Errors
/// `AuthzError::IllegalTransition` if `to` is not reachable from `from`.
pub fn validate_transition(from: StatusType, to: StatusType) -> Result<(), AuthzError> {
    if can_transition(from, to) {
        Ok(())
    } else {
        Err(AuthzError::IllegalTransition { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_gate() {
        let editable: Vec<_> = StatusType::ALL.into_iter().filter(|&s| can_edit(s)).collect();
        assert_eq!(editable.len(), 6);
        assert!(!can_edit(StatusType::Completed));
        assert!(!can_edit(StatusType::Cancelled));
        assert!(can_edit(StatusType::Blocked));
    }

    #[test]
    fn delete_gate() {
        assert!(can_delete(StatusType::Draft));
        assert!(can_delete(StatusType::NotStarted));
        assert!(!can_delete(StatusType::InProgress));
    }

    #[test]
    fn available_actions_for_in_progress() {
        assert_eq!(
            available_actions(StatusType::InProgress),
            vec![StatusAction::Edit, StatusAction::Complete, StatusAction::Block]
        );
    }

    #[test]
    fn available_actions_for_completed() {
        assert_eq!(
            available_actions(StatusType::Completed),
            vec![StatusAction::Reopen]
        );
    }

    #[test]
    fn available_actions_for_blocked() {
        assert_eq!(
            available_actions(StatusType::Blocked),
            vec![StatusAction::Edit, StatusAction::Unblock]
        );
    }

    #[test]
    fn complete_only_from_working_states() {
        assert!(validate_transition(StatusType::Active, StatusType::Completed).is_ok());
        assert!(validate_transition(StatusType::InProgress, StatusType::Completed).is_ok());
        assert_eq!(
            validate_transition(StatusType::Draft, StatusType::Completed),
            Err(AuthzError::IllegalTransition {
                from: StatusType::Draft,
                to: StatusType::Completed,
            })
        );
    }

    #[test]
    fn transition_table_sizes() {
        let sizes: Vec<usize> = StatusType::ALL
            .into_iter()
            .map(|status| allowed_transitions(status).len())
            .collect();
        assert_eq!(sizes.iter().sum::<usize>(), 28);
        assert_eq!(
            allowed_transitions(StatusType::Completed),
            &[StatusType::InProgress, StatusType::Active]
        );
    }

    #[test]
    fn reopen_transitions() {
        assert!(can_transition(StatusType::Completed, StatusType::InProgress));
        assert!(can_transition(StatusType::Cancelled, StatusType::NotStarted));
        assert!(!can_transition(StatusType::Completed, StatusType::Cancelled));
    }
}
