//! Weighted roll-ups
//!
//! Same traversal as the plain roll-ups, but each node contributes
//! `percentage × weight / 100` to a running sum which is then divided by the
//! total weight. Weights default to `1` (see
//! [`Weighted::effective_weight`](appraisal_model::Weighted::effective_weight)).
//!
//! Weights are scaled by the largest weight before summing, so the
//! percentage stays in `[0, 100]` however large the weights get.
//!
//! Unlike the plain roll-ups, `current` here is the accumulated weighted sum
//! and `total` is the total weight, not item counts. Display code relies on
//! this shape so it is kept as is.

use crate::{own_status_percentage, status_percentage};
use appraisal_model::{Goal, Objective, ProgressData, Scoring, Task, Weighted};

/// Weighted share of completed tasks
#[must_use]
pub fn weighted_task_progress(tasks: &[Task]) -> ProgressData {
    weighted_rollup(tasks, |task| status_percentage(task.status))
}

/// Weighted mean of per-goal percentages
///
/// Goals with tasks score [`weighted_task_progress`] over them.
#[must_use]
pub fn weighted_goal_progress(goals: &[Goal]) -> ProgressData {
    weighted_rollup(goals, |goal| match goal.scoring() {
        Scoring::Children(tasks) => weighted_task_progress(tasks).percentage,
        Scoring::OwnStatus(status) => own_status_percentage(&goal.id, status),
    })
}

/// Weighted mean of per-objective percentages
///
/// Objectives with goals score [`weighted_goal_progress`] over them.
#[must_use]
pub fn weighted_objective_progress(objectives: &[Objective]) -> ProgressData {
    weighted_rollup(objectives, |objective| match objective.scoring() {
        Scoring::Children(goals) => weighted_goal_progress(goals).percentage,
        Scoring::OwnStatus(status) => own_status_percentage(&objective.id, status),
    })
}

fn weighted_rollup<T: Weighted>(items: &[T], percentage: impl Fn(&T) -> f64) -> ProgressData {
    let max_weight = items
        .iter()
        .map(Weighted::effective_weight)
        .fold(0.0, f64::max);
    if max_weight <= 0.0 {
        return ProgressData::zero();
    }

    // Every scaled weight is in (0, 1], so neither sum can overflow.
    let (scaled_sum, scaled_total) = items.iter().fold((0.0, 0.0), |(sum, total), item| {
        let scale = item.effective_weight() / max_weight;
        let fraction = (percentage(item) / 100.0).clamp(0.0, 1.0);
        (sum + fraction * scale, total + scale)
    });

    let percentage = (scaled_sum / scaled_total * 100.0).round();
    let percentage = if percentage.is_nan() {
        0.0
    } else {
        percentage.clamp(0.0, 100.0)
    };

    ProgressData::new(scaled_sum * max_weight, scaled_total * max_weight, percentage)
}
