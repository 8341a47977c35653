use std::str::FromStr;

use crewdeck_core::{AppError, Role, UserIdentity};
use serde::{Deserialize, Serialize};

/// Permissions enforced by visibility and feature checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Allows browsing the personnel directory.
    ViewEmployees,
    /// Allows creating personnel records.
    AddEmployees,
    /// Allows editing personnel records.
    EditEmployees,
    /// Allows deleting personnel records.
    DeleteEmployees,
    /// Allows reading payroll data.
    ViewPayroll,
    /// Allows managing payroll data.
    ManagePayroll,
    /// Allows approving leave requests.
    ApproveLeaves,
    /// Allows approving expense claims.
    ApproveClaims,
    /// Allows managing organizational settings (departments, services).
    ManageSettings,
    /// Allows managing company records.
    ManageCompany,
    /// Allows managing teams.
    ManageTeams,
    /// Allows managing invoices.
    ManageInvoices,
}

impl Permission {
    /// Returns a stable storage value for this permission.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ViewEmployees => "view_employees",
            Self::AddEmployees => "add_employees",
            Self::EditEmployees => "edit_employees",
            Self::DeleteEmployees => "delete_employees",
            Self::ViewPayroll => "view_payroll",
            Self::ManagePayroll => "manage_payroll",
            Self::ApproveLeaves => "approve_leaves",
            Self::ApproveClaims => "approve_claims",
            Self::ManageSettings => "manage_settings",
            Self::ManageCompany => "manage_company",
            Self::ManageTeams => "manage_teams",
            Self::ManageInvoices => "manage_invoices",
        }
    }
}

impl FromStr for Permission {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "view_employees" => Ok(Self::ViewEmployees),
            "add_employees" => Ok(Self::AddEmployees),
            "edit_employees" => Ok(Self::EditEmployees),
            "delete_employees" => Ok(Self::DeleteEmployees),
            "view_payroll" => Ok(Self::ViewPayroll),
            "manage_payroll" => Ok(Self::ManagePayroll),
            "approve_leaves" => Ok(Self::ApproveLeaves),
            "approve_claims" => Ok(Self::ApproveClaims),
            "manage_settings" => Ok(Self::ManageSettings),
            "manage_company" => Ok(Self::ManageCompany),
            "manage_teams" => Ok(Self::ManageTeams),
            "manage_invoices" => Ok(Self::ManageInvoices),
            _ => Err(AppError::Validation(format!(
                "unknown permission value '{value}'"
            ))),
        }
    }
}

/// Returns the fixed permission set for a role.
///
/// The table is static and read-only; roles never gain or lose
/// permissions at runtime.
#[must_use]
pub fn role_permissions(role: Role) -> &'static [Permission] {
    const ADMIN: &[Permission] = &[
        Permission::ViewEmployees,
        Permission::AddEmployees,
        Permission::EditEmployees,
        Permission::DeleteEmployees,
        Permission::ManageCompany,
        Permission::ManageTeams,
        Permission::ApproveLeaves,
        Permission::ManageSettings,
        Permission::ManagePayroll,
        Permission::ManageInvoices,
    ];
    const RH: &[Permission] = &[
        Permission::ViewEmployees,
        Permission::AddEmployees,
        Permission::EditEmployees,
        Permission::DeleteEmployees,
        Permission::ViewPayroll,
        Permission::ManagePayroll,
        Permission::ApproveLeaves,
        Permission::ApproveClaims,
        Permission::ManageTeams,
        Permission::ManageInvoices,
    ];
    const MANAGER: &[Permission] = &[
        Permission::ViewEmployees,
        Permission::ApproveLeaves,
        Permission::ApproveClaims,
    ];

    match role {
        Role::Admin => ADMIN,
        Role::HumanResources => RH,
        Role::Manager => MANAGER,
        Role::Employee | Role::Undefined => &[],
    }
}

/// Returns whether the caller holds the permission. False for an absent
/// caller.
#[must_use]
pub fn has_permission(user: Option<&UserIdentity>, permission: Permission) -> bool {
    user.is_some_and(|user| role_permissions(user.role()).contains(&permission))
}

/// Returns whether the caller is an administrator.
#[must_use]
pub fn is_admin(user: Option<&UserIdentity>) -> bool {
    user.is_some_and(|user| user.role() == Role::Admin)
}

/// Returns whether the caller is human-resources staff.
#[must_use]
pub fn is_rh(user: Option<&UserIdentity>) -> bool {
    user.is_some_and(|user| user.role() == Role::HumanResources)
}

/// Returns whether the caller is a manager.
#[must_use]
pub fn is_manager(user: Option<&UserIdentity>) -> bool {
    user.is_some_and(|user| user.role() == Role::Manager)
}

/// Returns whether the caller is a regular employee.
#[must_use]
pub fn is_employee(user: Option<&UserIdentity>) -> bool {
    user.is_some_and(|user| user.role() == Role::Employee)
}

/// Returns whether the caller is a manager with company, team, and
/// employee affiliations all assigned.
#[must_use]
pub fn is_fully_assigned_manager(user: Option<&UserIdentity>) -> bool {
    is_manager(user)
        && user.is_some_and(|user| {
            user.company_id().is_some() && user.team_id().is_some() && user.employee_id().is_some()
        })
}

/// Returns whether the caller is RH staff with company and employee
/// affiliations assigned.
#[must_use]
pub fn is_fully_assigned_rh(user: Option<&UserIdentity>) -> bool {
    is_rh(user)
        && user.is_some_and(|user| user.company_id().is_some() && user.employee_id().is_some())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crewdeck_core::{OrgId, Role, UserIdentity};

    use super::{
        Permission, has_permission, is_admin, is_fully_assigned_manager, role_permissions,
    };

    fn user(role: Role) -> UserIdentity {
        UserIdentity::new("u-1", role, None, None, None)
    }

    #[test]
    fn permission_round_trips_storage_value() {
        let permission = Permission::ManageSettings;
        let restored = Permission::from_str(permission.as_str());
        assert!(restored.is_ok());
        assert_eq!(restored.unwrap_or(Permission::ViewPayroll), permission);
    }

    #[test]
    fn unknown_permission_is_rejected() {
        assert!(Permission::from_str("manage_everything").is_err());
    }

    #[test]
    fn admin_manages_company_and_settings() {
        let admin = user(Role::Admin);
        assert!(has_permission(Some(&admin), Permission::ManageCompany));
        assert!(has_permission(Some(&admin), Permission::ManageSettings));
    }

    #[test]
    fn rh_cannot_manage_company_or_settings() {
        let rh = user(Role::HumanResources);
        assert!(!has_permission(Some(&rh), Permission::ManageCompany));
        assert!(!has_permission(Some(&rh), Permission::ManageSettings));
        assert!(has_permission(Some(&rh), Permission::ApproveClaims));
    }

    #[test]
    fn employee_and_undefined_hold_no_permissions() {
        assert!(role_permissions(Role::Employee).is_empty());
        assert!(role_permissions(Role::Undefined).is_empty());
    }

    #[test]
    fn absent_caller_has_nothing() {
        assert!(!has_permission(None, Permission::ViewEmployees));
        assert!(!is_admin(None));
    }

    #[test]
    fn fully_assigned_manager_needs_all_affiliations() {
        let partial = UserIdentity::new("m-1", Role::Manager, Some(OrgId::from(1)), None, None);
        assert!(!is_fully_assigned_manager(Some(&partial)));

        let full = UserIdentity::new(
            "m-1",
            Role::Manager,
            Some(OrgId::from(1)),
            Some(OrgId::from(5)),
            Some(OrgId::from(9)),
        );
        assert!(is_fully_assigned_manager(Some(&full)));
    }
}
