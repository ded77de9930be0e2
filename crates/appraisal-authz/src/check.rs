//! Named permission lookups
//!
//! Callers ask by `action` and `resource`; the pair is joined into an
//! `action_resource` key and looked up in a fixed table. Keys outside the
//! table are denied.

use crate::error::AuthzError;
use crate::roles::{role_has_capability, Capability};
use appraisal_model::{PermissionContext, Role};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reason attached to keys outside the table
pub const UNKNOWN_PERMISSION: &str = "Unknown permission";

/// Outcome of a named permission lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionCheck {
    /// Whether the action is allowed
    pub allowed: bool,
    /// Why it was denied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl PermissionCheck {
    /// Allowed, no reason
    #[inline]
    #[must_use]
    pub fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    /// Denied with a reason
    #[inline]
    #[must_use]
    pub fn deny(reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            reason: Some(reason.into()),
        }
    }
}

/// Known `action_resource` keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionKey {
    /// `create_objective`
    CreateObjective,
    /// `assign_task`
    AssignTask,
    /// `view_reports`
    ViewReports,
    /// `manage_users`
    ManageUsers,
    /// `manage_review_cycles`
    ManageReviewCycles,
    /// `manage_departments`
    ManageDepartments,
    /// `manage_settings`
    ManageSettings,
    /// `export_data`
    ExportData,
    /// `import_data`
    ImportData,
    /// `view_audit_logs`
    ViewAuditLogs,
    /// `initiate_review`
    InitiateReview,
}

impl PermissionKey {
    /// Every key, in declaration order
    pub const ALL: [PermissionKey; 11] = [
        PermissionKey::CreateObjective,
        PermissionKey::AssignTask,
        PermissionKey::ViewReports,
        PermissionKey::ManageUsers,
        PermissionKey::ManageReviewCycles,
        PermissionKey::ManageDepartments,
        PermissionKey::ManageSettings,
        PermissionKey::ExportData,
        PermissionKey::ImportData,
        PermissionKey::ViewAuditLogs,
        PermissionKey::InitiateReview,
    ];

    /// The `action_resource` key
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PermissionKey::CreateObjective => "create_objective",
            PermissionKey::AssignTask => "assign_task",
            PermissionKey::ViewReports => "view_reports",
            PermissionKey::ManageUsers => "manage_users",
            PermissionKey::ManageReviewCycles => "manage_review_cycles",
            PermissionKey::ManageDepartments => "manage_departments",
            PermissionKey::ManageSettings => "manage_settings",
            PermissionKey::ExportData => "export_data",
            PermissionKey::ImportData => "import_data",
            PermissionKey::ViewAuditLogs => "view_audit_logs",
            PermissionKey::InitiateReview => "initiate_review",
        }
    }

    /// Capability backing this key
    #[must_use]
    pub fn capability(self) -> Capability {
        match self {
            PermissionKey::CreateObjective => Capability::CreateObjectives,
            PermissionKey::AssignTask => Capability::AssignTasks,
            PermissionKey::ViewReports => Capability::ViewReports,
            PermissionKey::ManageUsers => Capability::ManageUsers,
            PermissionKey::ManageReviewCycles => Capability::ManageReviewCycles,
            PermissionKey::ManageDepartments => Capability::ManageDepartments,
            PermissionKey::ManageSettings => Capability::ManageSettings,
            PermissionKey::ExportData => Capability::ExportData,
            PermissionKey::ImportData => Capability::ImportData,
            PermissionKey::ViewAuditLogs => Capability::ViewAuditLogs,
            PermissionKey::InitiateReview => Capability::InitiateReview,
        }
    }

    /// Reason given when the caller's role is too low
    #[must_use]
    pub fn denial_reason(self) -> &'static str {
        match self.capability().required_role() {
            Role::HrAdmin => "Requires HR admin role",
            Role::Manager | Role::IndividualContributor => "Requires manager or HR admin role",
        }
    }
}

impl fmt::Display for PermissionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionKey {
    type Err = AuthzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PermissionKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| AuthzError::UnknownPermission(s.to_string()))
    }
}

/// Look up `action_resource` for the caller's role
#[must_use]
pub fn validate_permission(
    action: &str,
    resource: &str,
    ctx: &PermissionContext,
) -> PermissionCheck {
    let key = format!("{action}_{resource}");

    match key.parse::<PermissionKey>() {
        Ok(key) if role_has_capability(ctx.user_role, key.capability()) => {
            PermissionCheck::allow()
        }
        Ok(key) => PermissionCheck::deny(key.denial_reason()),
        Err(_) => {
            tracing::debug!(%key, "denying unknown permission");
            PermissionCheck::deny(UNKNOWN_PERMISSION)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(role: Role) -> PermissionContext {
        PermissionContext::new(role, "u1")
    }

    #[test]
    fn key_roundtrip() {
        for key in PermissionKey::ALL {
            assert_eq!(key.as_str().parse::<PermissionKey>(), Ok(key));
        }
    }

    #[test]
    fn unknown_key_is_denied() {
        let check = validate_permission("launch", "rocket", &ctx(Role::HrAdmin));
        assert_eq!(check, PermissionCheck::deny("Unknown permission"));
    }

    #[test]
    fn manager_creates_objectives() {
        assert_eq!(
            validate_permission("create", "objective", &ctx(Role::Manager)),
            PermissionCheck::allow()
        );
    }

    #[test]
    fn ic_denied_with_reason() {
        let check = validate_permission("create", "objective", &ctx(Role::IndividualContributor));
        assert!(!check.allowed);
        assert_eq!(check.reason.as_deref(), Some("Requires manager or HR admin role"));
    }

    #[test]
    fn manager_denied_hr_only() {
        let check = validate_permission("manage", "users", &ctx(Role::Manager));
        assert!(!check.allowed);
        assert_eq!(check.reason.as_deref(), Some("Requires HR admin role"));
    }

    #[test]
    fn hr_admin_allowed_everything_known() {
        for key in PermissionKey::ALL {
            let (action, resource) = key.as_str().split_once('_').unwrap();
            assert!(validate_permission(action, resource, &ctx(Role::HrAdmin)).allowed, "{key}");
        }
    }

    #[test]
    fn allowed_check_serializes_without_reason() {
        let json = serde_json::to_value(PermissionCheck::allow()).unwrap();
        assert_eq!(json, serde_json::json!({ "allowed": true }));
    }
}
