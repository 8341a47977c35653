use crewdeck_core::OrgId;
use serde::{Deserialize, Serialize};

/// Company-wide announcement record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    /// Stable record id, unique within the announcement collection.
    pub id: OrgId,
    /// Headline shown in lists.
    pub title: String,
    /// Announcement body.
    #[serde(default)]
    pub content: Option<String>,
    /// Company the announcement was published for.
    #[serde(default)]
    pub company_id: Option<OrgId>,
    /// Publication timestamp as stored by the host (ISO date or datetime).
    #[serde(default)]
    pub created_at: String,
}
