//! Personal records: leave requests, expense claims, medical-leave
//! records. Visibility for all three follows the owner/RH/manager rules in
//! the application crate's scope resolver.

use std::str::FromStr;

use crewdeck_core::{AppError, OrgId};
use serde::{Deserialize, Serialize};

/// Leave request record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    /// Stable record id, unique within the leave collection.
    pub id: OrgId,
    /// Short reason shown in lists.
    pub title: String,
    /// Employee the leave belongs to.
    #[serde(default)]
    pub employee_id: Option<OrgId>,
    /// Team of the owning employee at request time.
    #[serde(default)]
    pub team_id: Option<OrgId>,
    /// Company of the owning employee at request time.
    #[serde(default)]
    pub company_id: Option<OrgId>,
    /// First day of the leave (ISO date).
    #[serde(default)]
    pub start_date: Option<String>,
    /// Submission timestamp, used when no start date was recorded.
    #[serde(default)]
    pub requested_at: Option<String>,
}

/// Expense claim categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimType {
    /// Equipment and material issues.
    Material,
    /// Account and access issues.
    Account,
    /// Anything else, including unrecognized stored tags.
    #[serde(other)]
    Other,
}

impl ClaimType {
    /// Returns a stable storage value for this claim type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Material => "material",
            Self::Account => "account",
            Self::Other => "other",
        }
    }

    /// Returns the display label for this claim type.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Material => "Material claim",
            Self::Account => "Account claim",
            Self::Other => "Other claim",
        }
    }
}

impl FromStr for ClaimType {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "material" => Ok(Self::Material),
            "account" => Ok(Self::Account),
            "other" => Ok(Self::Other),
            _ => Err(AppError::Validation(format!(
                "unknown claim type '{value}'"
            ))),
        }
    }
}

/// Expense claim record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    /// Stable record id, unique within the claim collection.
    pub id: OrgId,
    /// Claim category.
    #[serde(rename = "type")]
    pub claim_type: ClaimType,
    /// Free-text description, the claim's only searchable field.
    #[serde(default)]
    pub description: Option<String>,
    /// Employee the claim belongs to.
    #[serde(default)]
    pub employee_id: Option<OrgId>,
    /// Team of the owning employee at submission time.
    #[serde(default)]
    pub team_id: Option<OrgId>,
    /// Company of the owning employee at submission time.
    #[serde(default)]
    pub company_id: Option<OrgId>,
}

/// Medical-leave record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    /// Stable record id, unique within the medical record collection.
    pub id: OrgId,
    /// Name as registered in payroll, the record's searchable field.
    pub payroll_name: String,
    /// Date the medical certificate was issued (ISO date).
    #[serde(default)]
    pub issue_date: Option<String>,
    /// Employee the record belongs to.
    #[serde(default)]
    pub employee_id: Option<OrgId>,
    /// Team of the owning employee at issue time.
    #[serde(default)]
    pub team_id: Option<OrgId>,
    /// Company of the owning employee at issue time.
    #[serde(default)]
    pub company_id: Option<OrgId>,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{Claim, ClaimType};

    #[test]
    fn claim_type_round_trips_storage_value() {
        let restored = ClaimType::from_str(ClaimType::Account.as_str());
        assert!(restored.is_ok());
        assert_eq!(restored.unwrap_or(ClaimType::Material), ClaimType::Account);
    }

    #[test]
    fn unknown_claim_type_tag_is_rejected_by_parse() {
        assert!(ClaimType::from_str("hardware").is_err());
    }

    #[test]
    fn unknown_claim_type_deserializes_as_other() {
        let claim: Result<Claim, _> = serde_json::from_str(
            r#"{"id": 3, "type": "hardware", "description": "Broken chair"}"#,
        );
        assert!(claim.is_ok());
        let claim = match claim {
            Ok(claim) => claim,
            Err(_) => return,
        };
        assert_eq!(claim.claim_type, ClaimType::Other);
    }

    #[test]
    fn claim_ids_accept_numbers_and_strings() {
        let from_number: Result<Claim, _> =
            serde_json::from_str(r#"{"id": 7, "type": "material"}"#);
        let from_string: Result<Claim, _> =
            serde_json::from_str(r#"{"id": "7", "type": "material"}"#);
        assert!(from_number.is_ok());
        assert!(from_string.is_ok());
        if let (Ok(left), Ok(right)) = (from_number, from_string) {
            assert_eq!(left.id, right.id);
        }
    }
}
