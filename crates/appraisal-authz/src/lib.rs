//! Appraisal Authorization
//!
//! Decides which actions are permitted on an entity from three inputs:
//! - The caller's role and identity (`PermissionContext`)
//! - Ownership of the entity
//! - The entity's lifecycle status
//!
//! Everything is a declarative rule table evaluated fresh on every call.
//! There is no transition history and no cached decision.
//!
//! # Modules
//!
//! - [`lifecycle`]: status gates and legal status transitions
//! - [`roles`]: role hierarchy and role-only capabilities
//! - [`entity`]: per-entity permission records
//! - [`scope`]: department and user visibility
//! - [`check`]: named `action_resource` lookups with default deny
//!
//! # Example
//!
//! ```rust
//! use appraisal_authz::goal_permissions;
//! use appraisal_model::{Goal, PermissionContext, Role, StatusType};
//!
//! let ctx = PermissionContext::new(Role::IndividualContributor, "u1");
//! let goal = Goal::new("g1", StatusType::InProgress).owned_by("u1");
//!
//! let perms = goal_permissions(&ctx, &goal);
//! assert!(perms.can_edit);
//! assert!(perms.can_complete);
//! assert!(!perms.can_delete);
//! assert!(!perms.can_assign);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod check;
pub mod entity;
pub mod error;
pub mod lifecycle;
pub mod roles;
pub mod scope;

pub use check::{validate_permission, PermissionCheck, PermissionKey};
pub use entity::{feedback_permissions, goal_permissions, objective_permissions, task_permissions};
pub use error::AuthzError;
pub use lifecycle::{
    allowed_transitions, available_actions, can_block, can_complete, can_delete, can_edit,
    can_reopen, can_transition, can_unblock, validate_transition, StatusAction,
};
pub use roles::{can_participate_in_review, has_role, role_has_capability, Capability, ReviewType};
pub use scope::{can_access_department, can_access_user};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
