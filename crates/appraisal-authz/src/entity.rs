//! Per-entity permission records
//!
//! | Entity    | edit                 | delete                     | complete              |
//! |-----------|----------------------|----------------------------|-----------------------|
//! | Goal      | owner                | owner, manager, HR admin   | owner, manager        |
//! | Objective | owner, manager, HR   | manager, HR admin          | owner, manager, HR    |
//! | Task      | owner                | owner, manager             | owner                 |
//!
//! Each of the above is additionally gated on the matching status gate.
//! Assigning always needs a manager or HR admin. Viewing, commenting and
//! giving feedback are always allowed on goals, objectives and tasks.
//! Feedback records follow their own giver/recipient rules.

use crate::lifecycle;
use appraisal_model::{
    EntityId, EntityPermissions, Feedback, Goal, Objective, PermissionContext, StatusType, Task,
};

/// Permissions on a goal
#[must_use]
pub fn goal_permissions(ctx: &PermissionContext, goal: &Goal) -> EntityPermissions {
    let owner = ctx.owns(goal.owner_id.as_ref());
    let manager = ctx.is_manager();
    let hr_admin = ctx.is_hr_admin();

    resolved(
        "goal",
        &goal.id,
        goal.status,
        EntityPermissions {
            can_view: true,
            can_edit: owner && lifecycle::can_edit(goal.status),
            can_delete: (owner || manager || hr_admin) && lifecycle::can_delete(goal.status),
            can_complete: (owner || manager) && lifecycle::can_complete(goal.status),
            can_assign: manager || hr_admin,
            can_comment: true,
            can_give_feedback: true,
        },
    )
}

/// Permissions on an objective
#[must_use]
pub fn objective_permissions(ctx: &PermissionContext, objective: &Objective) -> EntityPermissions {
    let owner = ctx.owns(objective.owner_id.as_ref());
    let manager = ctx.is_manager();
    let hr_admin = ctx.is_hr_admin();
    let status = objective.status;

    resolved(
        "objective",
        &objective.id,
        status,
        EntityPermissions {
            can_view: true,
            can_edit: (owner || manager || hr_admin) && lifecycle::can_edit(status),
            can_delete: (manager || hr_admin) && lifecycle::can_delete(status),
            can_complete: (owner || manager || hr_admin) && lifecycle::can_complete(status),
            can_assign: manager || hr_admin,
            can_comment: true,
            can_give_feedback: true,
        },
    )
}

/// Permissions on a task
#[must_use]
pub fn task_permissions(ctx: &PermissionContext, task: &Task) -> EntityPermissions {
    let owner = ctx.owns(task.owner_id.as_ref());
    let manager = ctx.is_manager();
    let hr_admin = ctx.is_hr_admin();

    resolved(
        "task",
        &task.id,
        task.status,
        EntityPermissions {
            can_view: true,
            can_edit: owner && lifecycle::can_edit(task.status),
            can_delete: (owner || manager) && lifecycle::can_delete(task.status),
            can_complete: owner && lifecycle::can_complete(task.status),
            can_assign: manager || hr_admin,
            can_comment: true,
            can_give_feedback: true,
        },
    )
}

/// Permissions on a feedback record
///
/// Only the giver edits. The giver or an HR admin deletes. Feedback is never
/// completed or assigned, and a user cannot give feedback on feedback
/// addressed to themselves.
#[must_use]
pub fn feedback_permissions(ctx: &PermissionContext, feedback: &Feedback) -> EntityPermissions {
    let giver = ctx.is_self(&feedback.giver_id);
    let recipient = ctx.is_self(&feedback.recipient_id);
    let manager = ctx.is_manager();
    let hr_admin = ctx.is_hr_admin();

    let permissions = EntityPermissions {
        can_view: giver || recipient || manager || hr_admin,
        can_edit: giver,
        can_delete: giver || hr_admin,
        can_complete: false,
        can_assign: false,
        can_comment: recipient || manager || hr_admin,
        can_give_feedback: !recipient,
    };

    tracing::trace!(
        kind = "feedback",
        entity = %feedback.id,
        giver,
        recipient,
        ?permissions,
        "resolved permissions"
    );
    permissions
}

fn resolved(
    kind: &'static str,
    id: &EntityId,
    status: StatusType,
    permissions: EntityPermissions,
) -> EntityPermissions {
    tracing::trace!(kind, entity = %id, %status, ?permissions, "resolved permissions");
    permissions
}
