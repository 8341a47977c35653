use serde::{Deserialize, Serialize};

use crate::OrgId;

/// Role attached to an authenticated account.
///
/// Roles map to fixed permission sets; the mapping itself lives in the
/// domain crate. Unknown role tags resolve to [`Role::Undefined`], which
/// grants nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full administrative access.
    Admin,
    /// Human-resources staff.
    #[serde(rename = "rh")]
    HumanResources,
    /// Team leader.
    Manager,
    /// Regular staff member.
    Employee,
    /// Unrecognized or missing role.
    #[serde(other)]
    Undefined,
}

impl Role {
    /// Resolves a stored role tag. Total: unknown tags become `Undefined`.
    #[must_use]
    pub fn from_tag(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "admin" => Self::Admin,
            "rh" => Self::HumanResources,
            "manager" => Self::Manager,
            "employee" => Self::Employee,
            _ => Self::Undefined,
        }
    }

    /// Returns the stable storage tag for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::HumanResources => "rh",
            Self::Manager => "manager",
            Self::Employee => "employee",
            Self::Undefined => "undefined",
        }
    }
}

/// The caller on whose behalf a search runs.
///
/// Immutable for the duration of a search; owned by the host's
/// authentication layer. An unauthenticated caller is represented as
/// `Option<&UserIdentity>::None` at every API boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    subject: String,
    role: Role,
    company_id: Option<OrgId>,
    team_id: Option<OrgId>,
    employee_id: Option<OrgId>,
}

impl UserIdentity {
    /// Creates a caller identity from authentication and affiliation data.
    #[must_use]
    pub fn new(
        subject: impl Into<String>,
        role: Role,
        company_id: Option<OrgId>,
        team_id: Option<OrgId>,
        employee_id: Option<OrgId>,
    ) -> Self {
        Self {
            subject: subject.into(),
            role,
            company_id,
            team_id,
            employee_id,
        }
    }

    /// Returns the stable subject claim for the account.
    #[must_use]
    pub fn subject(&self) -> &str {
        self.subject.as_str()
    }

    /// Returns the caller's role.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the company affiliation, if assigned.
    #[must_use]
    pub fn company_id(&self) -> Option<&OrgId> {
        self.company_id.as_ref()
    }

    /// Returns the team affiliation, if assigned.
    #[must_use]
    pub fn team_id(&self) -> Option<&OrgId> {
        self.team_id.as_ref()
    }

    /// Returns the employee record affiliation, if assigned.
    #[must_use]
    pub fn employee_id(&self) -> Option<&OrgId> {
        self.employee_id.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::Role;

    #[test]
    fn role_tags_round_trip() {
        for role in [Role::Admin, Role::HumanResources, Role::Manager, Role::Employee] {
            assert_eq!(Role::from_tag(role.as_str()), role);
        }
    }

    #[test]
    fn unknown_role_tag_is_undefined() {
        assert_eq!(Role::from_tag("superuser"), Role::Undefined);
        assert_eq!(Role::from_tag(""), Role::Undefined);
    }

    #[test]
    fn role_tag_is_case_insensitive() {
        assert_eq!(Role::from_tag(" Admin "), Role::Admin);
        assert_eq!(Role::from_tag("RH"), Role::HumanResources);
    }
}
