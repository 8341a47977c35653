use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use crewdeck_core::UserIdentity;
use crewdeck_domain::{
    Permission, SearchCategory, SearchResult, SearchableRecord, has_permission, is_admin,
    is_employee, is_manager, is_rh,
};
use tracing::debug;

use crate::matcher::{normalize_query, record_matches};
use crate::ports::CollectionRepository;
use crate::scope::is_visible;


/// Assembles the unified search result list.
///
/// Recomputed fully on every invocation: a pure, synchronous function of
/// the query, the caller, and the current collection snapshots. Cheap
/// enough to re-run on every keystroke; no caching, no ranking, no
/// pagination.
#[derive(Clone)]
pub struct SearchService {
    collections: Arc<dyn CollectionRepository>,
}

impl SearchService {
    /// Creates a search service over the host's collections.
    #[must_use]
    pub fn new(collections: Arc<dyn CollectionRepository>) -> Self {
        Self { collections }
    }

    /// Runs an access-scoped search for the caller.
    ///
    /// Collections are scanned in a fixed order (personnel, teams,
    /// announcements, leaves, claims, medical records, companies,
    /// departments, services); results keep that order. A blank query or
    /// an absent/unauthorized caller yields an empty list — never an
    /// error.
    #[must_use]
    pub fn search(&self, user: Option<&UserIdentity>, query: &str) -> Vec<SearchResult> {
        let Some(needle) = normalize_query(query) else {
            return Vec::new();
        };

        let mut results = Vec::new();

        if category_enabled(user, SearchCategory::Employee) {
            for employee in self.collections.employees() {
                push_match(user, &needle, SearchableRecord::Employee(employee), &mut results);
            }
        }
        if category_enabled(user, SearchCategory::Team) {
            for team in self.collections.teams() {
                push_match(user, &needle, SearchableRecord::Team(team), &mut results);
            }
        }
        if category_enabled(user, SearchCategory::Announcement) {
            for announcement in self.collections.announcements() {
                push_match(
                    user,
                    &needle,
                    SearchableRecord::Announcement(announcement),
                    &mut results,
                );
            }
        }
        if category_enabled(user, SearchCategory::Leave) {
            for leave in self.collections.leave_requests() {
                push_match(user, &needle, SearchableRecord::Leave(leave), &mut results);
            }
        }
        if category_enabled(user, SearchCategory::Claim) {
            for claim in self.collections.claims() {
                push_match(user, &needle, SearchableRecord::Claim(claim), &mut results);
            }
        }
        if category_enabled(user, SearchCategory::MedicalRecord) {
            for record in self.collections.medical_records() {
                push_match(
                    user,
                    &needle,
                    SearchableRecord::MedicalRecord(record),
                    &mut results,
                );
            }
        }
        if category_enabled(user, SearchCategory::Company) {
            for company in self.collections.companies() {
                push_match(user, &needle, SearchableRecord::Company(company), &mut results);
            }
        }
        if category_enabled(user, SearchCategory::Department) {
            for department in self.collections.departments() {
                push_match(
                    user,
                    &needle,
                    SearchableRecord::Department(department),
                    &mut results,
                );
            }
        }
        if category_enabled(user, SearchCategory::Service) {
            for service in self.collections.services() {
                push_match(user, &needle, SearchableRecord::Service(service), &mut results);
            }
        }

        debug!(
            query_chars = needle.chars().count(),
            role = user.map_or("anonymous", |user| user.role().as_str()),
            result_count = results.len(),
            "search recomputed"
        );

        results
    }
}

/// Category-level gate: when the caller cannot see any record of a
/// category, the whole collection is skipped without being fetched.
fn category_enabled(user: Option<&UserIdentity>, category: SearchCategory) -> bool {
    match category {
        SearchCategory::Employee | SearchCategory::Team => {
            is_admin(user) || is_rh(user) || is_manager(user) || is_employee(user)
        }
        SearchCategory::Announcement => user.and_then(UserIdentity::company_id).is_some(),
        // Ownership grants apply regardless of role, so any authenticated
        // caller may hold personal records.
        SearchCategory::Leave | SearchCategory::Claim | SearchCategory::MedicalRecord => {
            user.is_some()
        }
        SearchCategory::Company => has_permission(user, Permission::ManageCompany),
        SearchCategory::Department | SearchCategory::Service => {
            has_permission(user, Permission::ManageSettings)
        }
    }
}

fn push_match(
    user: Option<&UserIdentity>,
    needle: &str,
    record: SearchableRecord,
    results: &mut Vec<SearchResult>,
) {
    if !is_visible(user, &record) || !record_matches(needle, &record) {
        return;
    }
    let (title, subtitle) = projection(&record);
    results.push(SearchResult::new(title, subtitle, record));
}

/// Maps a record to its display title and subtitle.
fn projection(record: &SearchableRecord) -> (String, String) {
    match record {
        SearchableRecord::Employee(employee) => (
            employee.name.clone(),
            employee
                .position
                .clone()
                .or_else(|| employee.email.clone())
                .unwrap_or_default(),
        ),
        SearchableRecord::Team(team) => {
            (team.name.clone(), team.department.clone().unwrap_or_default())
        }
        SearchableRecord::Announcement(announcement) => (
            announcement.title.clone(),
            format_date(announcement.created_at.as_str()),
        ),
        SearchableRecord::Leave(leave) => (
            leave.title.clone(),
            leave
                .start_date
                .as_deref()
                .or(leave.requested_at.as_deref())
                .map(format_date)
                .unwrap_or_default(),
        ),
        SearchableRecord::Claim(claim) => (
            claim.claim_type.label().to_owned(),
            claim.description.clone().unwrap_or_default(),
        ),
        SearchableRecord::MedicalRecord(record) => (
            record.payroll_name.clone(),
            record.issue_date.as_deref().map(format_date).unwrap_or_default(),
        ),
        SearchableRecord::Company(company) => {
            (company.name.clone(), company.country.clone().unwrap_or_default())
        }
        SearchableRecord::Department(department) => (
            department.name.clone(),
            SearchCategory::Department.label().to_owned(),
        ),
        SearchableRecord::Service(service) => (
            service.name.clone(),
            SearchCategory::Service.label().to_owned(),
        ),
    }
}

/// Best-effort date rendering for subtitles.
///
/// Accepts ISO dates and datetimes; anything unparseable is returned
/// verbatim rather than failing the scan.
fn format_date(value: &str) -> String {
    const DISPLAY: &str = "%d/%m/%Y";

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.format(DISPLAY).to_string();
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return datetime.format(DISPLAY).to_string();
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return datetime.format(DISPLAY).to_string();
    }
    value.to_owned()
}
