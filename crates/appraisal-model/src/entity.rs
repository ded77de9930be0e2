//! Entity records
//!
//! The objective → goal → task hierarchy plus feedback. Relationships are
//! plain nested vectors handed in by the caller; no entity owns identity
//! beyond its id string.

use crate::status::StatusType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a task, goal, objective or feedback record
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl EntityId {
    /// Create an entity id
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Identifier of a user
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    /// Create a user id
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Anything carrying a lifecycle status
pub trait Statused {
    /// Current lifecycle status
    fn status(&self) -> StatusType;
}

/// Anything carrying an optional roll-up weight
pub trait Weighted {
    /// Weight as supplied by the caller
    fn weight(&self) -> Option<f64>;

    /// Weight used in weighted roll-ups
    ///
    /// Absent, zero, negative and non-finite weights all count as `1`, so an
    /// item is never dropped from the denominator.
    #[inline]
    fn effective_weight(&self) -> f64 {
        match self.weight() {
            Some(w) if w.is_finite() && w > 0.0 => w,
            _ => 1.0,
        }
    }
}

/// How a node's percentage is derived
///
/// A node with at least one child is scored from its children and its own
/// status is ignored. A node without children falls back to its own status.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scoring<'a, C> {
    /// Score from these (non-empty) children
    Children(&'a [C]),
    /// Score 100 if this status is completed, else 0
    OwnStatus(StatusType),
}

fn scoring<'a, C>(children: Option<&'a [C]>, status: StatusType) -> Scoring<'a, C> {
    match children {
        Some(children) if !children.is_empty() => Scoring::Children(children),
        _ => Scoring::OwnStatus(status),
    }
}

/// Leaf work item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Task id
    pub id: EntityId,
    /// Lifecycle status
    pub status: StatusType,
    /// Roll-up weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Owning user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<UserId>,
}

impl Task {
    /// Create a task
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, status: StatusType) -> Self {
        Self {
            id: EntityId::new(id),
            status,
            weight: None,
            owner_id: None,
        }
    }

    /// With weight
    #[inline]
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// With owner
    #[inline]
    #[must_use]
    pub fn owned_by(mut self, owner: impl Into<String>) -> Self {
        self.owner_id = Some(UserId::new(owner));
        self
    }
}

/// Goal made of optional tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Goal id
    pub id: EntityId,
    /// Lifecycle status
    pub status: StatusType,
    /// Roll-up weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Owning user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<UserId>,
    /// Child tasks, if the source enumerated them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,
}

impl Goal {
    /// Create a goal without tasks
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, status: StatusType) -> Self {
        Self {
            id: EntityId::new(id),
            status,
            weight: None,
            owner_id: None,
            tasks: None,
        }
    }

    /// With weight
    #[inline]
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// With owner
    #[inline]
    #[must_use]
    pub fn owned_by(mut self, owner: impl Into<String>) -> Self {
        self.owner_id = Some(UserId::new(owner));
        self
    }

    /// With tasks
    #[inline]
    #[must_use]
    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = Some(tasks);
        self
    }

    /// How this goal is scored
    #[inline]
    #[must_use]
    pub fn scoring(&self) -> Scoring<'_, Task> {
        scoring(self.tasks.as_deref(), self.status)
    }
}

/// Objective made of optional goals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Objective {
    /// Objective id
    pub id: EntityId,
    /// Lifecycle status
    pub status: StatusType,
    /// Roll-up weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Owning user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<UserId>,
    /// Child goals, if the source enumerated them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<Vec<Goal>>,
}

impl Objective {
    /// Create an objective without goals
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, status: StatusType) -> Self {
        Self {
            id: EntityId::new(id),
            status,
            weight: None,
            owner_id: None,
            goals: None,
        }
    }

    /// With weight
    #[inline]
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// With owner
    #[inline]
    #[must_use]
    pub fn owned_by(mut self, owner: impl Into<String>) -> Self {
        self.owner_id = Some(UserId::new(owner));
        self
    }

    /// With goals
    #[inline]
    #[must_use]
    pub fn with_goals(mut self, goals: Vec<Goal>) -> Self {
        self.goals = Some(goals);
        self
    }

    /// How this objective is scored
    #[inline]
    #[must_use]
    pub fn scoring(&self) -> Scoring<'_, Goal> {
        scoring(self.goals.as_deref(), self.status)
    }
}

/// Feedback given by one user to another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    /// Feedback id
    pub id: EntityId,
    /// Author
    pub giver_id: UserId,
    /// Subject
    pub recipient_id: UserId,
}

impl Feedback {
    /// Create a feedback record
    #[inline]
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        giver: impl Into<String>,
        recipient: impl Into<String>,
    ) -> Self {
        Self {
            id: EntityId::new(id),
            giver_id: UserId::new(giver),
            recipient_id: UserId::new(recipient),
        }
    }
}

macro_rules! impl_statused_weighted {
    ($($ty:ty),*) => {
        $(
            impl Statused for $ty {
                #[inline]
                fn status(&self) -> StatusType {
                    self.status
                }
            }

            impl Weighted for $ty {
                #[inline]
                fn weight(&self) -> Option<f64> {
                    self.weight
                }
            }
        )*
    };
}

impl_statused_weighted!(Task, Goal, Objective);

impl Statused for StatusType {
    #[inline]
    fn status(&self) -> StatusType {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_weight_defaults_to_one() {
        assert_eq!(Task::new("t", StatusType::Draft).effective_weight(), 1.0);
        assert_eq!(
            Task::new("t", StatusType::Draft).with_weight(0.0).effective_weight(),
            1.0
        );
        assert_eq!(
            Task::new("t", StatusType::Draft).with_weight(-2.0).effective_weight(),
            1.0
        );
        assert_eq!(
            Task::new("t", StatusType::Draft)
                .with_weight(f64::NAN)
                .effective_weight(),
            1.0
        );
        assert_eq!(
            Task::new("t", StatusType::Draft).with_weight(2.5).effective_weight(),
            2.5
        );
    }

    #[test]
    fn goal_without_tasks_scores_own_status() {
        let goal = Goal::new("g", StatusType::Completed);
        assert_eq!(goal.scoring(), Scoring::OwnStatus(StatusType::Completed));

        let goal = goal.with_tasks(vec![]);
        assert_eq!(goal.scoring(), Scoring::OwnStatus(StatusType::Completed));
    }

    #[test]
    fn goal_with_tasks_scores_children() {
        let goal = Goal::new("g", StatusType::Completed)
            .with_tasks(vec![Task::new("t", StatusType::Draft)]);
        assert!(matches!(goal.scoring(), Scoring::Children(tasks) if tasks.len() == 1));
    }

    #[test]
    fn objective_scoring() {
        let objective = Objective::new("o", StatusType::Active);
        assert_eq!(objective.scoring(), Scoring::OwnStatus(StatusType::Active));

        let objective = objective.with_goals(vec![Goal::new("g", StatusType::Draft)]);
        assert!(matches!(objective.scoring(), Scoring::Children(goals) if goals.len() == 1));
    }

    #[test]
    fn goal_deserializes_from_api_shape() {
        let json = r#"{
            "id": "g1",
            "status": "in_progress",
            "weight": 2,
            "ownerId": "u1",
            "tasks": [
                { "id": "t1", "status": "completed" },
                { "id": "t2", "status": "blocked", "weight": 3 }
            ]
        }"#;

        let goal: Goal = serde_json::from_str(json).unwrap();
        assert_eq!(goal.id, EntityId::new("g1"));
        assert_eq!(goal.weight, Some(2.0));
        assert_eq!(goal.owner_id, Some(UserId::new("u1")));

        let tasks = goal.tasks.unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].status, StatusType::Blocked);
        assert_eq!(tasks[1].weight, Some(3.0));
        assert_eq!(tasks[0].weight, None);
    }

    #[test]
    fn feedback_deserializes_from_api_shape() {
        let json = r#"{ "id": "f1", "giverId": "u1", "recipientId": "u2" }"#;
        let feedback: Feedback = serde_json::from_str(json).unwrap();
        assert_eq!(feedback, Feedback::new("f1", "u1", "u2"));
    }
}
