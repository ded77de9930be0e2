//! Plain (count-based) roll-ups
//!
//! Tasks are counted. Goals and objectives take the unweighted mean of
//! their per-node percentages, and `current` counts nodes sitting at exactly
//! 100%.

use crate::{own_status_percentage, percent_of};
use appraisal_model::{Goal, Objective, ProgressData, Scoring, Task};

/// Completed tasks over all tasks
#[must_use]
pub fn task_progress(tasks: &[Task]) -> ProgressData {
    if tasks.is_empty() {
        return ProgressData::zero();
    }

    let completed = tasks.iter().filter(|t| t.status.is_completed()).count() as f64;
    let total = tasks.len() as f64;

    ProgressData::new(completed, total, percent_of(completed, total))
}

/// Mean of per-goal percentages
///
/// A goal with tasks scores [`task_progress`] over them; a goal without
/// tasks scores 100 or 0 from its own status.
#[must_use]
pub fn goal_progress(goals: &[Goal]) -> ProgressData {
    mean_rollup(goals, goal_percentage)
}

/// Mean of per-objective percentages
///
/// An objective with goals scores [`goal_progress`] over them; an objective
/// without goals scores 100 or 0 from its own status.
#[must_use]
pub fn objective_progress(objectives: &[Objective]) -> ProgressData {
    mean_rollup(objectives, objective_percentage)
}

fn goal_percentage(goal: &Goal) -> f64 {
    match goal.scoring() {
        Scoring::Children(tasks) => task_progress(tasks).percentage,
        Scoring::OwnStatus(status) => own_status_percentage(&goal.id, status),
    }
}

fn objective_percentage(objective: &Objective) -> f64 {
    match objective.scoring() {
        Scoring::Children(goals) => goal_progress(goals).percentage,
        Scoring::OwnStatus(status) => own_status_percentage(&objective.id, status),
    }
}

fn mean_rollup<T>(items: &[T], percentage: impl Fn(&T) -> f64) -> ProgressData {
    if items.is_empty() {
        return ProgressData::zero();
    }

    let percentages: Vec<f64> = items.iter().map(percentage).collect();
    let finished = percentages.iter().filter(|&&p| p == 100.0).count() as f64;
    let total = items.len() as f64;
    let sum: f64 = percentages.iter().sum();

    ProgressData::new(finished, total, (sum / total).round())
}

#[cfg(test)]
mod tests {
    use super::*;
    use appraisal_model::StatusType;
    use appraisal_test_utils::{goal_with_tasks, tasks_with};

    #[test]
    fn task_progress_empty() {
        assert_eq!(task_progress(&[]), ProgressData::zero());
    }

    #[test]
    fn task_progress_counts_completed() {
        let tasks = tasks_with(&[
            StatusType::Completed,
            StatusType::Completed,
            StatusType::InProgress,
            StatusType::Draft,
            StatusType::Completed,
        ]);
        assert_eq!(task_progress(&tasks), ProgressData::new(3.0, 5.0, 60.0));
    }

    #[test]
    fn task_progress_ignores_weights() {
        let tasks = vec![
            Task::new("t1", StatusType::Completed).with_weight(10.0),
            Task::new("t2", StatusType::Active),
        ];
        assert_eq!(task_progress(&tasks).percentage, 50.0);
    }

    #[test]
    fn goal_progress_empty() {
        assert_eq!(goal_progress(&[]), ProgressData::zero());
    }

    #[test]
    fn childless_goal_scores_from_status() {
        let done = [Goal::new("g", StatusType::Completed)];
        assert_eq!(goal_progress(&done), ProgressData::new(1.0, 1.0, 100.0));

        for status in StatusType::ALL.into_iter().filter(|s| !s.is_completed()) {
            let goal = [Goal::new("g", status)];
            assert_eq!(goal_progress(&goal).percentage, 0.0, "status {status}");
        }
    }

    #[test]
    fn goal_status_ignored_when_tasks_present() {
        let goal = goal_with_tasks("g", StatusType::Completed, &[StatusType::Draft]);
        assert_eq!(goal_progress(&[goal]).percentage, 0.0);
    }

    #[test]
    fn goal_progress_is_mean_of_goal_percentages() {
        let goals = vec![
            goal_with_tasks(
                "a",
                StatusType::InProgress,
                &[StatusType::Completed, StatusType::Completed, StatusType::Draft],
            ),
            Goal::new("b", StatusType::Completed),
            Goal::new("c", StatusType::Draft).with_tasks(vec![]),
        ];

        // (67 + 100 + 0) / 3 = 55.67
        let progress = goal_progress(&goals);
        assert_eq!(progress.percentage, 56.0);
        assert_eq!(progress.current, 1.0);
        assert_eq!(progress.total, 3.0);
    }

    #[test]
    fn objective_progress_recurses_through_goals() {
        let objectives = vec![
            Objective::new("o1", StatusType::Active).with_goals(vec![
                goal_with_tasks("a", StatusType::Active, &[StatusType::Completed]),
                goal_with_tasks("b", StatusType::Active, &[StatusType::Draft]),
            ]),
            Objective::new("o2", StatusType::Completed),
        ];

        // o1 = (100 + 0) / 2 = 50, o2 = 100
        let progress = objective_progress(&objectives);
        assert_eq!(progress, ProgressData::new(1.0, 2.0, 75.0));
    }

    #[test]
    fn objective_progress_empty() {
        assert_eq!(objective_progress(&[]), ProgressData::zero());
    }

    #[test]
    fn inputs_are_left_untouched() {
        let goals = vec![goal_with_tasks(
            "a",
            StatusType::Active,
            &[StatusType::Completed, StatusType::Blocked],
        )];
        let before = goals.clone();
        let _ = goal_progress(&goals);
        assert_eq!(goals, before);
    }
}
