//! Validation and display helpers

use appraisal_model::ProgressData;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse progress state for a percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressStatus {
    /// Nothing done
    NotStarted,
    /// Partially done
    InProgress,
    /// Fully done
    Completed,
}

impl ProgressStatus {
    /// Display name
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ProgressStatus::NotStarted => "not-started",
            ProgressStatus::InProgress => "in-progress",
            ProgressStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clamp a record into range
///
/// `current` and `total` become non-negative and `percentage` lands in
/// `[0, 100]`. NaN fields become `0`.
#[must_use]
pub fn validate_progress(progress: ProgressData) -> ProgressData {
    let percentage = if progress.percentage.is_nan() {
        0.0
    } else {
        progress.percentage.clamp(0.0, 100.0)
    };

    ProgressData::new(progress.current.max(0.0), progress.total.max(0.0), percentage)
}

/// Check if a record has reached 100%
#[inline]
#[must_use]
pub fn is_progress_complete(progress: &ProgressData) -> bool {
    progress.percentage >= 100.0
}

/// Coarse state for a percentage
#[must_use]
pub fn get_progress_status(percentage: f64) -> ProgressStatus {
    if percentage >= 100.0 {
        ProgressStatus::Completed
    } else if percentage > 0.0 {
        ProgressStatus::InProgress
    } else {
        ProgressStatus::NotStarted
    }
}

/// `"3/5 (60%)"`
#[must_use]
pub fn format_progress_display(progress: &ProgressData) -> String {
    format!(
        "{}/{} ({}%)",
        progress.current, progress.total, progress.percentage
    )
}

/// `"60%"`
#[must_use]
pub fn format_progress_percentage(progress: &ProgressData) -> String {
    format!("{}%", progress.percentage)
}
