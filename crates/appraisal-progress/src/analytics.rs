//! Status analytics and progress trends

use crate::percent_of;
use appraisal_model::{ProgressData, StatusType, Statused};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status breakdown of a collection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressAnalytics {
    /// Number of items analysed
    pub total_items: usize,
    /// `completed`
    pub completed: usize,
    /// `in_progress` or `active`
    pub in_progress: usize,
    /// `not_started` or `draft`
    pub not_started: usize,
    /// `blocked` or `overdue`
    pub blocked: usize,
    /// Completed over total
    pub overall: ProgressData,
    /// Rounded completion rate
    pub completion_rate: f64,
}

impl ProgressAnalytics {
    /// Items counted in `total_items` but in none of the four buckets
    ///
    /// Only `cancelled` lands here today. Records whose buckets add up to
    /// more than `total_items` report `0`.
    #[inline]
    #[must_use]
    pub fn unclassified(&self) -> usize {
        let bucketed = self
            .completed
            .saturating_add(self.in_progress)
            .saturating_add(self.not_started)
            .saturating_add(self.blocked);
        self.total_items.saturating_sub(bucketed)
    }
}

/// Bucket statuses and compute the completion rate
#[must_use]
pub fn analyze_progress<T: Statused>(items: &[T]) -> ProgressAnalytics {
    let mut analytics = ProgressAnalytics {
        total_items: items.len(),
        completed: 0,
        in_progress: 0,
        not_started: 0,
        blocked: 0,
        overall: ProgressData::zero(),
        completion_rate: 0.0,
    };

    for item in items {
        match item.status() {
            StatusType::Completed => analytics.completed += 1,
            StatusType::InProgress | StatusType::Active => analytics.in_progress += 1,
            StatusType::NotStarted | StatusType::Draft => analytics.not_started += 1,
            StatusType::Blocked | StatusType::Overdue => analytics.blocked += 1,
            StatusType::Cancelled => {}
        }
    }

    let completed = analytics.completed as f64;
    let total = analytics.total_items as f64;
    analytics.completion_rate = percent_of(completed, total);
    analytics.overall = ProgressData::new(completed, total, analytics.completion_rate);
    analytics
}

/// Historical percentage reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    /// Percentage at the time of the reading
    pub percentage: f64,
    /// When the reading was taken
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
}

impl ProgressSnapshot {
    /// Snapshot without a timestamp
    #[inline]
    #[must_use]
    pub fn new(percentage: f64) -> Self {
        Self {
            percentage,
            recorded_at: None,
        }
    }

    /// Snapshot taken at `recorded_at`
    #[inline]
    #[must_use]
    pub fn at(percentage: f64, recorded_at: DateTime<Utc>) -> Self {
        Self {
            percentage,
            recorded_at: Some(recorded_at),
        }
    }
}

/// Direction of change between the last two snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Latest reading is higher
    Up,
    /// Latest reading is lower
    Down,
    /// No change
    Stable,
}

/// Trend between the last two snapshots
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressTrend {
    /// Direction of change
    pub trend: TrendDirection,
    /// Absolute difference in percentage points
    pub change: f64,
}

impl ProgressTrend {
    /// No change
    #[inline]
    #[must_use]
    pub fn stable() -> Self {
        Self {
            trend: TrendDirection::Stable,
            change: 0.0,
        }
    }
}

/// Compare the last two snapshots of an ordered history
///
/// Fewer than two snapshots is a stable trend with no change.
#[must_use]
pub fn calculate_progress_trend(history: &[ProgressSnapshot]) -> ProgressTrend {
    calculate_progress_trend_with_band(history, 0.0)
}

/// [`calculate_progress_trend`] with changes at or below `stable_band`
/// reported as stable
#[must_use]
pub fn calculate_progress_trend_with_band(
    history: &[ProgressSnapshot],
    stable_band: f64,
) -> ProgressTrend {
    match history {
        [.., previous, latest] => {
            trend_between(previous.percentage, latest.percentage, stable_band)
        }
        _ => ProgressTrend::stable(),
    }
}

/// Trend from `previous` to `latest`
///
/// Changes at or below `stable_band` are reported as stable; `change` still
/// carries the actual difference.
#[must_use]
pub fn trend_between(previous: f64, latest: f64, stable_band: f64) -> ProgressTrend {
    let change = (latest - previous).abs();
    let trend = if change <= stable_band {
        TrendDirection::Stable
    } else if latest > previous {
        TrendDirection::Up
    } else {
        TrendDirection::Down
    };

    ProgressTrend { trend, change }
}
