//! Department and user visibility

use appraisal_model::{PermissionContext, Role, UserId};

/// HR admins reach every department; everyone else only their own
///
/// A user without a department reaches none.
#[must_use]
pub fn can_access_department(
    role: Role,
    user_department: Option<&str>,
    target_department: &str,
) -> bool {
    role == Role::HrAdmin || user_department == Some(target_department)
}

/// Self, HR admins, and managers within the same department
#[must_use]
pub fn can_access_user(
    ctx: &PermissionContext,
    target_user: &UserId,
    target_department: Option<&str>,
) -> bool {
    if ctx.is_self(target_user) || ctx.is_hr_admin() {
        return true;
    }

    ctx.is_manager()
        && ctx
            .department_id
            .as_deref()
            .is_some_and(|department| target_department == Some(department))
}
