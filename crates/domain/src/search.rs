use crewdeck_core::OrgId;
use serde::{Deserialize, Serialize};

use crate::{
    Announcement, Claim, Company, Department, Employee, LeaveRequest, MedicalRecord, ServiceUnit,
    Team,
};

/// Entity category attached to each search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchCategory {
    /// Personnel record.
    Employee,
    /// Team record.
    Team,
    /// Company-wide announcement.
    Announcement,
    /// Leave request.
    Leave,
    /// Expense claim.
    Claim,
    /// Medical-leave record.
    MedicalRecord,
    /// Business entity.
    Company,
    /// Organizational unit (department).
    Department,
    /// Organizational unit (service).
    Service,
}

impl SearchCategory {
    /// Returns the stable tag used in composite result ids.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Team => "team",
            Self::Announcement => "announcement",
            Self::Leave => "leave",
            Self::Claim => "claim",
            Self::MedicalRecord => "medical_record",
            Self::Company => "company",
            Self::Department => "department",
            Self::Service => "service",
        }
    }

    /// Returns the display label shown next to each result row.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Employee => "Employees",
            Self::Team => "Teams",
            Self::Announcement => "Announcements",
            Self::Leave => "Leaves",
            Self::Claim => "Claims",
            Self::MedicalRecord => "Medical records",
            Self::Company => "Companies",
            Self::Department => "Departments",
            Self::Service => "Services",
        }
    }

    /// Returns the glyph rendered in front of a result row.
    #[must_use]
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Employee => "\u{1F465}",
            Self::Team => "\u{1F91D}",
            Self::Announcement => "\u{1F4E2}",
            _ => "\u{1F50D}",
        }
    }
}

/// A record from any of the searchable collections, tagged by entity.
///
/// One variant per collection; the scope resolver, the matcher, and the
/// result projections all dispatch on this union.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum SearchableRecord {
    /// Personnel record.
    Employee(Employee),
    /// Team record.
    Team(Team),
    /// Company-wide announcement.
    Announcement(Announcement),
    /// Leave request.
    Leave(LeaveRequest),
    /// Expense claim.
    Claim(Claim),
    /// Medical-leave record.
    MedicalRecord(MedicalRecord),
    /// Business entity.
    Company(Company),
    /// Organizational unit (department).
    Department(Department),
    /// Organizational unit (service).
    Service(ServiceUnit),
}

impl SearchableRecord {
    /// Returns the category tag for this record's variant.
    #[must_use]
    pub fn category(&self) -> SearchCategory {
        match self {
            Self::Employee(_) => SearchCategory::Employee,
            Self::Team(_) => SearchCategory::Team,
            Self::Announcement(_) => SearchCategory::Announcement,
            Self::Leave(_) => SearchCategory::Leave,
            Self::Claim(_) => SearchCategory::Claim,
            Self::MedicalRecord(_) => SearchCategory::MedicalRecord,
            Self::Company(_) => SearchCategory::Company,
            Self::Department(_) => SearchCategory::Department,
            Self::Service(_) => SearchCategory::Service,
        }
    }

    /// Returns the source record's own id.
    ///
    /// Ids are unique only within their own collection; pair with
    /// [`SearchableRecord::category`] for a globally unique key.
    #[must_use]
    pub fn source_id(&self) -> &OrgId {
        match self {
            Self::Employee(record) => &record.id,
            Self::Team(record) => &record.id,
            Self::Announcement(record) => &record.id,
            Self::Leave(record) => &record.id,
            Self::Claim(record) => &record.id,
            Self::MedicalRecord(record) => &record.id,
            Self::Company(record) => &record.id,
            Self::Department(record) => &record.id,
            Self::Service(record) => &record.id,
        }
    }
}

/// One entry in the assembled search result list.
///
/// Created fresh per search invocation; carries the originating record so
/// the presenter can route to the right detail screen without re-querying
/// the engine. The category tag always matches the wrapped variant because
/// both are derived from the record here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    id: String,
    title: String,
    subtitle: String,
    category: SearchCategory,
    record: SearchableRecord,
}

impl SearchResult {
    /// Builds a result entry from a matched record and its display
    /// projection.
    #[must_use]
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>, record: SearchableRecord) -> Self {
        let category = record.category();
        Self {
            id: format!("{}-{}", category.as_str(), record.source_id()),
            title: title.into(),
            subtitle: subtitle.into(),
            category,
            record,
        }
    }

    /// Returns the composite id, unique across all categories.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Returns the secondary display line.
    #[must_use]
    pub fn subtitle(&self) -> &str {
        self.subtitle.as_str()
    }

    /// Returns the category tag.
    #[must_use]
    pub fn category(&self) -> SearchCategory {
        self.category
    }

    /// Returns the originating record.
    #[must_use]
    pub fn record(&self) -> &SearchableRecord {
        &self.record
    }
}
