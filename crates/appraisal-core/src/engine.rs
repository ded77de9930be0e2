//! Review engine
//!
//! Thin facade over the progress and authorization crates. The two halves
//! never call each other; the engine only routes to one or the other
//! according to its configuration.

use crate::config::EngineConfig;
use crate::error::Result;
use appraisal_authz::{
    feedback_permissions, goal_permissions, objective_permissions, task_permissions,
    validate_permission, validate_transition, PermissionCheck,
};
use appraisal_model::{
    EntityPermissions, Feedback, Goal, Objective, PermissionContext, ProgressData, StatusType,
    Statused, Task,
};
use appraisal_progress::{
    analyze_progress, calculate_progress_trend_with_band, goal_progress, objective_progress,
    task_progress, weighted_goal_progress, weighted_objective_progress, weighted_task_progress,
    ProgressAnalytics, ProgressSnapshot, ProgressTrend,
};

/// Borrowed entity for permission resolution
#[derive(Debug, Clone, Copy)]
pub enum EntityRef<'a> {
    /// A goal
    Goal(&'a Goal),
    /// An objective
    Objective(&'a Objective),
    /// A task
    Task(&'a Task),
    /// A feedback record
    Feedback(&'a Feedback),
}

impl<'a> From<&'a Goal> for EntityRef<'a> {
    fn from(value: &'a Goal) -> Self {
        EntityRef::Goal(value)
    }
}

impl<'a> From<&'a Objective> for EntityRef<'a> {
    fn from(value: &'a Objective) -> Self {
        EntityRef::Objective(value)
    }
}

impl<'a> From<&'a Task> for EntityRef<'a> {
    fn from(value: &'a Task) -> Self {
        EntityRef::Task(value)
    }
}

impl<'a> From<&'a Feedback> for EntityRef<'a> {
    fn from(value: &'a Feedback) -> Self {
        EntityRef::Feedback(value)
    }
}

/// Progress and permission engine
#[derive(Debug, Clone, Default)]
pub struct ReviewEngine {
    config: EngineConfig,
}

impl ReviewEngine {
    /// Create engine with configuration
    #[inline]
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Task roll-up, weighted if configured
    #[must_use]
    pub fn task_progress(&self, tasks: &[Task]) -> ProgressData {
        if self.config.weighted_rollups {
            weighted_task_progress(tasks)
        } else {
            task_progress(tasks)
        }
    }

    /// Goal roll-up, weighted if configured
    #[must_use]
    pub fn goal_progress(&self, goals: &[Goal]) -> ProgressData {
        tracing::debug!(
            goals = goals.len(),
            weighted = self.config.weighted_rollups,
            "goal roll-up"
        );
        if self.config.weighted_rollups {
            weighted_goal_progress(goals)
        } else {
            goal_progress(goals)
        }
    }

    /// Objective roll-up, weighted if configured
    #[must_use]
    pub fn objective_progress(&self, objectives: &[Objective]) -> ProgressData {
        tracing::debug!(
            objectives = objectives.len(),
            weighted = self.config.weighted_rollups,
            "objective roll-up"
        );
        if self.config.weighted_rollups {
            weighted_objective_progress(objectives)
        } else {
            objective_progress(objectives)
        }
    }

    /// Status breakdown of any statused collection
    #[must_use]
    pub fn analyze<T: Statused>(&self, items: &[T]) -> ProgressAnalytics {
        analyze_progress(items)
    }

    /// Trend between the last two snapshots, using the configured stable band
    #[must_use]
    pub fn trend(&self, history: &[ProgressSnapshot]) -> ProgressTrend {
        calculate_progress_trend_with_band(history, self.config.trend_stable_band)
    }

    /// Permissions on any entity
    #[must_use]
    pub fn permissions<'a>(
        &self,
        ctx: &PermissionContext,
        entity: impl Into<EntityRef<'a>>,
    ) -> EntityPermissions {
        match entity.into() {
            EntityRef::Goal(goal) => goal_permissions(ctx, goal),
            EntityRef::Objective(objective) => objective_permissions(ctx, objective),
            EntityRef::Task(task) => task_permissions(ctx, task),
            EntityRef::Feedback(feedback) => feedback_permissions(ctx, feedback),
        }
    }

    /// Named `action_resource` lookup
    #[must_use]
    pub fn check(&self, action: &str, resource: &str, ctx: &PermissionContext) -> PermissionCheck {
        tracing::debug!(action, resource, user = %ctx.user_id, "permission check");
        validate_permission(action, resource, ctx)
    }

    /// Validate a status change and return the new status
    ///
    /// # Errors
    /// `EngineError::Authz` if the change is not in the transition table.
    pub fn transition(&self, from: StatusType, to: StatusType) -> Result<StatusType> {
        validate_transition(from, to).map_err(|err| {
            tracing::warn!(%from, %to, "rejected status transition");
            err
        })?;
        Ok(to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use appraisal_model::Role;
    use appraisal_progress::TrendDirection;

    fn goals() -> Vec<Goal> {
        vec![
            Goal::new("a", StatusType::InProgress).with_tasks(vec![
                Task::new("t1", StatusType::Completed),
                Task::new("t2", StatusType::Completed),
                Task::new("t3", StatusType::Draft),
            ]),
            Goal::new("b", StatusType::Completed).with_weight(2.0),
        ]
    }

    #[test]
    fn plain_rollups_by_default() {
        let engine = ReviewEngine::default();
        assert_eq!(engine.goal_progress(&goals()).percentage, 84.0);
        assert_eq!(engine.goal_progress(&goals()).current, 1.0);
    }

    #[test]
    fn weighted_rollups_when_configured() {
        let engine = ReviewEngine::new(EngineConfig::new().with_weighted_rollups(true));
        assert_eq!(engine.goal_progress(&goals()).percentage, 89.0);

        let objective = Objective::new("o", StatusType::Active).with_goals(goals());
        assert_eq!(engine.objective_progress(&[objective]).percentage, 89.0);
    }

    #[test]
    fn task_rollup_follows_config() {
        let tasks = vec![
            Task::new("t1", StatusType::Completed).with_weight(3.0),
            Task::new("t2", StatusType::Draft),
        ];
        assert_eq!(ReviewEngine::default().task_progress(&tasks).percentage, 50.0);

        let weighted = ReviewEngine::new(EngineConfig::new().with_weighted_rollups(true));
        assert_eq!(weighted.task_progress(&tasks).percentage, 75.0);
    }

    #[test]
    fn trend_uses_band() {
        let history = [ProgressSnapshot::new(50.0), ProgressSnapshot::new(53.0)];

        assert_eq!(ReviewEngine::default().trend(&history).trend, TrendDirection::Up);

        let banded = ReviewEngine::new(EngineConfig::new().with_trend_stable_band(5.0));
        let trend = banded.trend(&history);
        assert_eq!(trend.trend, TrendDirection::Stable);
        assert_eq!(trend.change, 3.0);

        assert_eq!(banded.trend(&history[..1]), ProgressTrend::stable());
    }

    #[test]
    fn permissions_dispatch() {
        let engine = ReviewEngine::default();
        let ctx = PermissionContext::new(Role::IndividualContributor, "u1");

        let goal = Goal::new("g", StatusType::InProgress).owned_by("u1");
        assert!(engine.permissions(&ctx, &goal).can_edit);

        let task = Task::new("t", StatusType::Active).owned_by("u1");
        assert!(engine.permissions(&ctx, &task).can_complete);

        let objective = Objective::new("o", StatusType::Draft).owned_by("u1");
        assert!(!engine.permissions(&ctx, &objective).can_delete);

        let feedback = Feedback::new("f", "u2", "u1");
        assert!(!engine.permissions(&ctx, &feedback).can_give_feedback);
    }

    #[test]
    fn transition_ok_and_rejected() {
        let engine = ReviewEngine::default();
        assert_eq!(
            engine.transition(StatusType::Active, StatusType::Completed).unwrap(),
            StatusType::Completed
        );

        let err = engine
            .transition(StatusType::Completed, StatusType::Blocked)
            .unwrap_err();
        assert!(err.is_illegal_transition());
    }

    #[test]
    fn check_unknown_is_denied() {
        let engine = ReviewEngine::default();
        let ctx = PermissionContext::new(Role::HrAdmin, "h1");
        let check = engine.check("delete", "everything", &ctx);
        assert!(!check.allowed);
        assert_eq!(check.reason.as_deref(), Some("Unknown permission"));
    }
}
