//! Testing utilities for the appraisal workspace
//!
//! Shared fixtures, builders and proptest strategies.

#![allow(missing_docs)]

use appraisal_model::{Feedback, Goal, Objective, PermissionContext, Role, StatusType, Task};
use proptest::prelude::*;

pub fn tasks_with(statuses: &[StatusType]) -> Vec<Task> {
    statuses
        .iter()
        .enumerate()
        .map(|(i, &status)| Task::new(format!("t{i}"), status))
        .collect()
}

pub fn goal_with_tasks(id: &str, status: StatusType, task_statuses: &[StatusType]) -> Goal {
    Goal::new(id, status).with_tasks(tasks_with(task_statuses))
}

pub fn objective_with_goals(id: &str, status: StatusType, goals: Vec<Goal>) -> Objective {
    Objective::new(id, status).with_goals(goals)
}

pub fn owned_goal(owner: &str, status: StatusType) -> Goal {
    Goal::new("goal", status).owned_by(owner)
}

pub fn owned_objective(owner: &str, status: StatusType) -> Objective {
    Objective::new("objective", status).owned_by(owner)
}

pub fn owned_task(owner: &str, status: StatusType) -> Task {
    Task::new("task", status).owned_by(owner)
}

pub fn feedback(giver: &str, recipient: &str) -> Feedback {
    Feedback::new("feedback", giver, recipient)
}

pub fn ic(user: &str) -> PermissionContext {
    PermissionContext::new(Role::IndividualContributor, user)
}

pub fn manager(user: &str) -> PermissionContext {
    PermissionContext::new(Role::Manager, user)
}

pub fn hr_admin(user: &str) -> PermissionContext {
    PermissionContext::new(Role::HrAdmin, user)
}

pub fn any_status() -> impl Strategy<Value = StatusType> {
    prop::sample::select(StatusType::ALL.to_vec())
}

pub fn any_role() -> impl Strategy<Value = Role> {
    prop::sample::select(Role::ALL.to_vec())
}

pub fn any_tasks(max: usize) -> impl Strategy<Value = Vec<Task>> {
    prop::collection::vec(any_status(), 0..=max).prop_map(|statuses| tasks_with(&statuses))
}

pub fn any_goal() -> impl Strategy<Value = Goal> {
    (any_status(), any_tasks(6), prop::option::of(0.5f64..5.0)).prop_map(
        |(status, tasks, weight)| {
            let mut goal = Goal::new("g", status).with_tasks(tasks);
            goal.weight = weight;
            goal
        },
    )
}

pub fn any_goals(max: usize) -> impl Strategy<Value = Vec<Goal>> {
    prop::collection::vec(any_goal(), 0..=max)
}
