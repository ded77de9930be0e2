//! Roles, permission contexts and permission records

use crate::entity::UserId;
use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Organisational role, ordered by privilege
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Individual contributor (rank 1)
    #[default]
    IndividualContributor,
    /// People manager (rank 2)
    Manager,
    /// HR administrator (rank 3)
    HrAdmin,
}

impl Role {
    /// Every role, lowest rank first
    pub const ALL: [Role; 3] = [Role::IndividualContributor, Role::Manager, Role::HrAdmin];

    /// Numeric rank in the role hierarchy
    #[inline]
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Role::IndividualContributor => 1,
            Role::Manager => 2,
            Role::HrAdmin => 3,
        }
    }

    /// Wire name of the role
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::IndividualContributor => "individual_contributor",
            Role::Manager => "manager",
            Role::HrAdmin => "hr_admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ModelError::UnknownRole(s.to_string()))
    }
}

/// Identity of the caller asking for permissions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionContext {
    /// Role of the caller
    pub user_role: Role,
    /// Caller's user id
    pub user_id: UserId,
    /// Caller's department
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,
    /// Explicit manager flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_manager: Option<bool>,
    /// Explicit HR admin flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_hr_admin: Option<bool>,
}

impl PermissionContext {
    /// Create a context for a user with a role
    #[inline]
    #[must_use]
    pub fn new(user_role: Role, user_id: impl Into<String>) -> Self {
        Self {
            user_role,
            user_id: UserId::new(user_id),
            department_id: None,
            is_manager: None,
            is_hr_admin: None,
        }
    }

    /// With department
    #[inline]
    #[must_use]
    pub fn in_department(mut self, department: impl Into<String>) -> Self {
        self.department_id = Some(department.into());
        self
    }

    /// With explicit manager flag
    #[inline]
    #[must_use]
    pub fn with_manager_flag(mut self, flag: bool) -> Self {
        self.is_manager = Some(flag);
        self
    }

    /// With explicit HR admin flag
    #[inline]
    #[must_use]
    pub fn with_hr_admin_flag(mut self, flag: bool) -> Self {
        self.is_hr_admin = Some(flag);
        self
    }

    /// Manager by flag or by role
    ///
    /// The hierarchy is not consulted: an HR admin is not a manager unless
    /// flagged as one.
    #[inline]
    #[must_use]
    pub fn is_manager(&self) -> bool {
        self.is_manager.unwrap_or(false) || self.user_role == Role::Manager
    }

    /// HR admin by flag or by role
    #[inline]
    #[must_use]
    pub fn is_hr_admin(&self) -> bool {
        self.is_hr_admin.unwrap_or(false) || self.user_role == Role::HrAdmin
    }

    /// Check if `user` is the caller
    #[inline]
    #[must_use]
    pub fn is_self(&self, user: &UserId) -> bool {
        &self.user_id == user
    }

    /// Check if the caller owns an entity with this owner
    #[inline]
    #[must_use]
    pub fn owns(&self, owner: Option<&UserId>) -> bool {
        owner.is_some_and(|owner| self.is_self(owner))
    }
}

/// Actions permitted on one entity for one caller
///
/// Recomputed on every call; never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct EntityPermissions {
    /// May see the entity
    pub can_view: bool,
    /// May change the entity
    pub can_edit: bool,
    /// May remove the entity
    pub can_delete: bool,
    /// May mark the entity completed
    pub can_complete: bool,
    /// May reassign the entity
    pub can_assign: bool,
    /// May comment on the entity
    pub can_comment: bool,
    /// May give feedback on the entity
    pub can_give_feedback: bool,
}

impl EntityPermissions {
    /// Nothing allowed
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Only viewing allowed
    #[inline]
    #[must_use]
    pub fn view_only() -> Self {
        Self {
            can_view: true,
            ..Self::default()
        }
    }
}
