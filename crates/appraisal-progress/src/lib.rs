//! Appraisal Progress
//!
//! Rolls task completion up through goals and objectives:
//! - Plain roll-ups: count-based at the task level, mean of child
//!   percentages above it
//! - Weighted roll-ups: every node contributes `percentage × weight / 100`
//! - Analytics: status buckets, completion rate and trend between snapshots
//! - Display helpers: clamping, status labels and formatted strings
//!
//! All functions are pure and total. Empty input yields
//! [`ProgressData::zero`], and a zero denominator yields a zero percentage.
//!
//! # Example
//!
//! ```rust
//! use appraisal_model::{Goal, StatusType, Task};
//! use appraisal_progress::{goal_progress, weighted_goal_progress};
//!
//! let goals = vec![
//!     Goal::new("a", StatusType::InProgress).with_tasks(vec![
//!         Task::new("t1", StatusType::Completed),
//!         Task::new("t2", StatusType::Completed),
//!         Task::new("t3", StatusType::InProgress),
//!     ]),
//!     Goal::new("b", StatusType::Completed).with_weight(2.0),
//! ];
//!
//! assert_eq!(goal_progress(&goals).percentage, 84.0);
//! assert_eq!(weighted_goal_progress(&goals).percentage, 89.0);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod aggregate;
pub mod analytics;
pub mod display;
pub mod weighted;

pub use aggregate::{goal_progress, objective_progress, task_progress};
pub use analytics::{
    analyze_progress, calculate_progress_trend, calculate_progress_trend_with_band, trend_between,
    ProgressAnalytics, ProgressSnapshot, ProgressTrend, TrendDirection,
};
pub use appraisal_model::ProgressData;
pub use display::{
    format_progress_display, format_progress_percentage, get_progress_status,
    is_progress_complete, validate_progress, ProgressStatus,
};
pub use weighted::{weighted_goal_progress, weighted_objective_progress, weighted_task_progress};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Percentage of `current` over `total`, rounded half away from zero
///
/// Returns `0` when `total` is not positive.
#[inline]
#[must_use]
pub fn percent_of(current: f64, total: f64) -> f64 {
    if total > 0.0 {
        (current / total * 100.0).round()
    } else {
        0.0
    }
}

/// Binary percentage for a node scored from its own status
#[inline]
pub(crate) fn status_percentage(status: appraisal_model::StatusType) -> f64 {
    if status.is_completed() {
        100.0
    } else {
        0.0
    }
}

/// [`status_percentage`] for a childless node, traced by id
pub(crate) fn own_status_percentage(
    id: &appraisal_model::EntityId,
    status: appraisal_model::StatusType,
) -> f64 {
    tracing::trace!(entity = %id, %status, "no children, scoring from own status");
    status_percentage(status)
}
