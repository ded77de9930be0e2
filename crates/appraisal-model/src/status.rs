//! Lifecycle status enumeration

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a task, goal or objective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusType {
    /// Created but not yet started
    NotStarted,
    /// Still being drafted by its owner
    Draft,
    /// Work is under way
    InProgress,
    /// Live and being tracked
    Active,
    /// Finished
    Completed,
    /// Cannot proceed until something external changes
    Blocked,
    /// Past its due date without completing
    Overdue,
    /// Abandoned
    Cancelled,
}

impl StatusType {
    /// Every status, in declaration order
    pub const ALL: [StatusType; 8] = [
        StatusType::NotStarted,
        StatusType::Draft,
        StatusType::InProgress,
        StatusType::Active,
        StatusType::Completed,
        StatusType::Blocked,
        StatusType::Overdue,
        StatusType::Cancelled,
    ];

    /// Wire name of the status
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StatusType::NotStarted => "not_started",
            StatusType::Draft => "draft",
            StatusType::InProgress => "in_progress",
            StatusType::Active => "active",
            StatusType::Completed => "completed",
            StatusType::Blocked => "blocked",
            StatusType::Overdue => "overdue",
            StatusType::Cancelled => "cancelled",
        }
    }

    /// Check if this status counts as done for progress purposes
    #[inline]
    #[must_use]
    pub fn is_completed(self) -> bool {
        self == StatusType::Completed
    }
}

impl fmt::Display for StatusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusType::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ModelError::UnknownStatus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parse_roundtrip() {
        for status in StatusType::ALL {
            assert_eq!(status.as_str().parse::<StatusType>(), Ok(status));
        }
    }

    #[test]
    fn status_parse_unknown() {
        let err = "paused".parse::<StatusType>().unwrap_err();
        assert_eq!(err, ModelError::UnknownStatus("paused".to_string()));
    }

    #[test]
    fn status_serde_names() {
        let json = serde_json::to_string(&StatusType::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");

        let status: StatusType = serde_json::from_str("\"not_started\"").unwrap();
        assert_eq!(status, StatusType::NotStarted);
    }

    #[test]
    fn only_completed_is_completed() {
        let done: Vec<_> = StatusType::ALL
            .into_iter()
            .filter(|s| s.is_completed())
            .collect();
        assert_eq!(done, vec![StatusType::Completed]);
    }
}
