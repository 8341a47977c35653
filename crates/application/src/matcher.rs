use crewdeck_domain::SearchableRecord;

/// Prepares a raw query for matching.
///
/// Returns `None` for an empty or whitespace-only query: search is
/// opt-in, a blank query yields no results rather than a full listing.
#[must_use]
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}

fn field_contains(needle: &str, field: Option<&str>) -> bool {
    field.unwrap_or_default().to_lowercase().contains(needle)
}

/// Returns whether any of the record's designated searchable fields
/// contains the normalized query as a substring.
///
/// `needle` must already be lowercased (see [`normalize_query`]). Missing
/// fields behave as empty strings.
#[must_use]
pub fn record_matches(needle: &str, record: &SearchableRecord) -> bool {
    match record {
        SearchableRecord::Employee(employee) => {
            field_contains(needle, Some(employee.name.as_str()))
                || field_contains(needle, employee.email.as_deref())
        }
        SearchableRecord::Team(team) => field_contains(needle, Some(team.name.as_str())),
        SearchableRecord::Announcement(announcement) => {
            field_contains(needle, Some(announcement.title.as_str()))
                || field_contains(needle, announcement.content.as_deref())
        }
        SearchableRecord::Leave(leave) => field_contains(needle, Some(leave.title.as_str())),
        SearchableRecord::Claim(claim) => field_contains(needle, claim.description.as_deref()),
        SearchableRecord::MedicalRecord(record) => {
            field_contains(needle, Some(record.payroll_name.as_str()))
        }
        SearchableRecord::Company(company) => field_contains(needle, Some(company.name.as_str())),
        SearchableRecord::Department(department) => {
            field_contains(needle, Some(department.name.as_str()))
        }
        SearchableRecord::Service(service) => field_contains(needle, Some(service.name.as_str())),
    }
}

#[cfg(test)]
mod tests {
    use crewdeck_core::OrgId;
    use crewdeck_domain::{Announcement, Claim, ClaimType, Employee, SearchableRecord};

    use super::{normalize_query, record_matches};

    #[test]
    fn blank_queries_are_rejected() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("   \t"), None);
    }

    #[test]
    fn queries_are_trimmed_and_lowercased() {
        assert_eq!(normalize_query("  MoHamed "), Some("mohamed".to_owned()));
    }

    #[test]
    fn matching_is_case_insensitive_substring_containment() {
        let record = SearchableRecord::Employee(Employee {
            id: OrgId::from(1),
            name: "Mohamed Ben Ali".to_owned(),
            email: Some("mohamed@acme.tn".to_owned()),
            position: None,
            company_id: None,
            team_id: None,
        });
        assert!(record_matches("ben ali", &record));
        assert!(record_matches("@acme", &record));
        assert!(!record_matches("sarah", &record));
    }

    #[test]
    fn any_designated_field_is_enough() {
        let record = SearchableRecord::Announcement(Announcement {
            id: OrgId::from(1),
            title: "Maintenance".to_owned(),
            content: Some("Le chauffage sera coupé vendredi".to_owned()),
            company_id: None,
            created_at: String::new(),
        });
        assert!(record_matches("chauffage", &record));
        assert!(record_matches("maintenance", &record));
    }

    #[test]
    fn missing_fields_behave_as_empty_strings() {
        let record = SearchableRecord::Claim(Claim {
            id: OrgId::from(1),
            claim_type: ClaimType::Other,
            description: None,
            employee_id: None,
            team_id: None,
            company_id: None,
        });
        assert!(!record_matches("vpn", &record));
    }
}
