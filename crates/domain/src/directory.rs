use crewdeck_core::OrgId;
use serde::{Deserialize, Serialize};

/// Personnel record.
///
/// Record fields mirror the host's camelCase JSON; anything the source
/// data may omit is optional and treated as empty for display and
/// matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Stable record id, unique within the personnel collection.
    pub id: OrgId,
    /// Full display name.
    pub name: String,
    /// Work email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Job title.
    #[serde(default)]
    pub position: Option<String>,
    /// Owning company.
    #[serde(default)]
    pub company_id: Option<OrgId>,
    /// Assigned team.
    #[serde(default)]
    pub team_id: Option<OrgId>,
}

/// Team record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Stable record id, unique within the team collection.
    pub id: OrgId,
    /// Team display name.
    pub name: String,
    /// Department the team belongs to.
    #[serde(default)]
    pub department: Option<String>,
    /// Owning company.
    #[serde(default)]
    pub company_id: Option<OrgId>,
}

/// Business entity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Stable record id, unique within the company collection.
    pub id: OrgId,
    /// Registered company name.
    pub name: String,
    /// Country of registration.
    #[serde(default)]
    pub country: Option<String>,
}

/// Organizational unit record (department).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    /// Stable record id, unique within the department collection.
    pub id: OrgId,
    /// Department display name.
    pub name: String,
}

/// Organizational unit record (service).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceUnit {
    /// Stable record id, unique within the service collection.
    pub id: OrgId,
    /// Service display name.
    pub name: String,
}
