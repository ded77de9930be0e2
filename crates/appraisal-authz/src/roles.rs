//! Role hierarchy and role-only capabilities

use crate::error::AuthzError;
use appraisal_model::Role;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Check if `actual` ranks at least as high as `required`
#[inline]
#[must_use]
pub fn has_role(actual: Role, required: Role) -> bool {
    actual.rank() >= required.rank()
}

/// Capability decided by role alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Create, edit and deactivate users
    ManageUsers,
    /// See every department
    ViewAllDepartments,
    /// Create objectives
    CreateObjectives,
    /// Assign tasks to others
    AssignTasks,
    /// Open reports
    ViewReports,
    /// Open and close review cycles
    ManageReviewCycles,
    /// Give feedback to any user
    GiveFeedbackToAnyone,
    /// Edit many entities at once
    BulkEdit,
    /// Delete many entities at once
    BulkDelete,
    /// Assign many entities at once
    BulkAssign,
    /// Export data
    ExportData,
    /// Import data
    ImportData,
    /// Change application settings
    ManageSettings,
    /// Read the audit log
    ViewAuditLogs,
    /// Create and restructure departments
    ManageDepartments,
    /// Start a review
    InitiateReview,
}

impl Capability {
    /// Every capability, in declaration order
    pub const ALL: [Capability; 16] = [
        Capability::ManageUsers,
        Capability::ViewAllDepartments,
        Capability::CreateObjectives,
        Capability::AssignTasks,
        Capability::ViewReports,
        Capability::ManageReviewCycles,
        Capability::GiveFeedbackToAnyone,
        Capability::BulkEdit,
        Capability::BulkDelete,
        Capability::BulkAssign,
        Capability::ExportData,
        Capability::ImportData,
        Capability::ManageSettings,
        Capability::ViewAuditLogs,
        Capability::ManageDepartments,
        Capability::InitiateReview,
    ];

    /// Lowest role holding this capability
    #[must_use]
    pub fn required_role(self) -> Role {
        match self {
            Capability::CreateObjectives
            | Capability::AssignTasks
            | Capability::ViewReports
            | Capability::BulkEdit
            | Capability::BulkAssign
            | Capability::ExportData
            | Capability::InitiateReview => Role::Manager,

            Capability::ManageUsers
            | Capability::ViewAllDepartments
            | Capability::ManageReviewCycles
            | Capability::GiveFeedbackToAnyone
            | Capability::BulkDelete
            | Capability::ImportData
            | Capability::ManageSettings
            | Capability::ViewAuditLogs
            | Capability::ManageDepartments => Role::HrAdmin,
        }
    }
}

/// Check if `role` holds `capability`
#[inline]
#[must_use]
pub fn role_has_capability(role: Role, capability: Capability) -> bool {
    has_role(role, capability.required_role())
}

macro_rules! capability_predicates {
    ($($(#[$doc:meta])* $name:ident => $cap:ident;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            #[must_use]
            pub fn $name(role: Role) -> bool {
                role_has_capability(role, Capability::$cap)
            }
        )*
    };
}

capability_predicates! {
    /// HR admin only
    can_manage_users => ManageUsers;
    /// HR admin only
    can_view_all_departments => ViewAllDepartments;
    /// Manager and above
    can_create_objectives => CreateObjectives;
    /// Manager and above
    can_assign_tasks => AssignTasks;
    /// Manager and above
    can_view_reports => ViewReports;
    /// HR admin only
    can_manage_review_cycles => ManageReviewCycles;
    /// HR admin only
    can_give_feedback_to_anyone => GiveFeedbackToAnyone;
    /// Manager and above
    can_bulk_edit => BulkEdit;
    /// HR admin only
    can_bulk_delete => BulkDelete;
    /// Manager and above
    can_bulk_assign => BulkAssign;
    /// Manager and above
    can_export_data => ExportData;
    /// HR admin only
    can_import_data => ImportData;
    /// HR admin only
    can_manage_settings => ManageSettings;
    /// HR admin only
    can_view_audit_logs => ViewAuditLogs;
    /// HR admin only
    can_manage_departments => ManageDepartments;
    /// Manager and above
    can_initiate_review => InitiateReview;
}

/// Kind of review a user can take part in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewType {
    /// Self assessment
    #[serde(rename = "self")]
    SelfReview,
    /// Review by a peer
    Peer,
    /// Review written by a manager
    Manager,
    /// Review of a manager by a report
    Upward,
}

impl ReviewType {
    /// Wire name
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ReviewType::SelfReview => "self",
            ReviewType::Peer => "peer",
            ReviewType::Manager => "manager",
            ReviewType::Upward => "upward",
        }
    }
}

impl fmt::Display for ReviewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReviewType {
    type Err = AuthzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "self" => Ok(ReviewType::SelfReview),
            "peer" => Ok(ReviewType::Peer),
            "manager" => Ok(ReviewType::Manager),
            "upward" => Ok(ReviewType::Upward),
            other => Err(AuthzError::UnknownReviewType(other.to_string())),
        }
    }
}

/// Manager reviews need a manager or HR admin; every other review is open
#[must_use]
pub fn can_participate_in_review(role: Role, review_type: ReviewType) -> bool {
    match review_type {
        ReviewType::Manager => has_role(role, Role::Manager),
        ReviewType::SelfReview | ReviewType::Peer | ReviewType::Upward => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hierarchy() {
        assert!(has_role(Role::HrAdmin, Role::Manager));
        assert!(has_role(Role::Manager, Role::Manager));
        assert!(!has_role(Role::IndividualContributor, Role::Manager));
        assert!(has_role(Role::IndividualContributor, Role::IndividualContributor));
    }

    #[test]
    fn individual_contributor_holds_nothing() {
        for capability in Capability::ALL {
            assert!(
                !role_has_capability(Role::IndividualContributor, capability),
                "{capability:?}"
            );
        }
    }

    #[test]
    fn hr_admin_holds_everything() {
        for capability in Capability::ALL {
            assert!(role_has_capability(Role::HrAdmin, capability), "{capability:?}");
        }
    }

    #[test]
    fn manager_capabilities() {
        assert!(can_create_objectives(Role::Manager));
        assert!(can_assign_tasks(Role::Manager));
        assert!(can_view_reports(Role::Manager));
        assert!(can_bulk_edit(Role::Manager));
        assert!(can_bulk_assign(Role::Manager));
        assert!(can_export_data(Role::Manager));
        assert!(can_initiate_review(Role::Manager));

        assert!(!can_manage_users(Role::Manager));
        assert!(!can_view_all_departments(Role::Manager));
        assert!(!can_manage_review_cycles(Role::Manager));
        assert!(!can_give_feedback_to_anyone(Role::Manager));
        assert!(!can_bulk_delete(Role::Manager));
        assert!(!can_import_data(Role::Manager));
        assert!(!can_manage_settings(Role::Manager));
        assert!(!can_view_audit_logs(Role::Manager));
        assert!(!can_manage_departments(Role::Manager));
    }

    #[test]
    fn review_participation() {
        assert!(!can_participate_in_review(Role::IndividualContributor, ReviewType::Manager));
        assert!(can_participate_in_review(Role::Manager, ReviewType::Manager));
        assert!(can_participate_in_review(Role::HrAdmin, ReviewType::Manager));

        for review in [ReviewType::SelfReview, ReviewType::Peer, ReviewType::Upward] {
            for role in Role::ALL {
                assert!(can_participate_in_review(role, review));
            }
        }
    }

    #[test]
    fn review_type_names() {
        assert_eq!("self".parse::<ReviewType>(), Ok(ReviewType::SelfReview));
        assert_eq!(
            serde_json::to_string(&ReviewType::SelfReview).unwrap(),
            "\"self\""
        );
        assert_eq!(
            "annual".parse::<ReviewType>(),
            Err(AuthzError::UnknownReviewType("annual".to_string()))
        );
    }
}
