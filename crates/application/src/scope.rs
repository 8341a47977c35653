//! Per-entity visibility rules.
//!
//! Every predicate is a total function: an absent or malformed caller and
//! missing record affiliations evaluate to "not visible" rather than
//! failing. Organizational ids compare through [`OrgId`], which absorbs
//! the host data's mixed number/string encoding.

use crewdeck_core::{OrgId, UserIdentity};
use crewdeck_domain::{
    Announcement, Claim, Employee, LeaveRequest, MedicalRecord, Permission, SearchableRecord,
    Team, has_permission, is_admin, is_employee, is_manager, is_rh,
};

/// Returns whether the record is within the caller's visibility scope.
#[must_use]
pub fn is_visible(user: Option<&UserIdentity>, record: &SearchableRecord) -> bool {
    match record {
        SearchableRecord::Employee(employee) => employee_visible(user, employee),
        SearchableRecord::Team(team) => team_visible(user, team),
        SearchableRecord::Announcement(announcement) => announcement_visible(user, announcement),
        SearchableRecord::Leave(leave) => leave_visible(user, leave),
        SearchableRecord::Claim(claim) => claim_visible(user, claim),
        SearchableRecord::MedicalRecord(record) => medical_record_visible(user, record),
        SearchableRecord::Company(_) => has_permission(user, Permission::ManageCompany),
        SearchableRecord::Department(_) | SearchableRecord::Service(_) => {
            has_permission(user, Permission::ManageSettings)
        }
    }
}

fn same_org(left: Option<&OrgId>, right: Option<&OrgId>) -> bool {
    matches!((left, right), (Some(left), Some(right)) if left == right)
}

fn employee_visible(user: Option<&UserIdentity>, record: &Employee) -> bool {
    if is_admin(user) {
        return true;
    }
    if is_rh(user) {
        return same_org(
            user.and_then(UserIdentity::company_id),
            record.company_id.as_ref(),
        );
    }
    if is_manager(user) || is_employee(user) {
        return same_org(user.and_then(UserIdentity::team_id), record.team_id.as_ref());
    }
    false
}

fn team_visible(user: Option<&UserIdentity>, record: &Team) -> bool {
    if is_admin(user) {
        return has_permission(user, Permission::ViewEmployees);
    }
    if is_rh(user) {
        return same_org(
            user.and_then(UserIdentity::company_id),
            record.company_id.as_ref(),
        );
    }
    if is_manager(user) || is_employee(user) {
        return same_org(user.and_then(UserIdentity::team_id), Some(&record.id));
    }
    false
}

fn announcement_visible(user: Option<&UserIdentity>, record: &Announcement) -> bool {
    same_org(
        user.and_then(UserIdentity::company_id),
        record.company_id.as_ref(),
    )
}

// Owner, admin, same-company RH, and same-team manager are independent
// grants, not a priority chain.
fn personal_record_visible(
    user: Option<&UserIdentity>,
    owner_id: Option<&OrgId>,
    team_id: Option<&OrgId>,
    company_id: Option<&OrgId>,
) -> bool {
    is_admin(user)
        || same_org(user.and_then(UserIdentity::employee_id), owner_id)
        || (is_rh(user) && same_org(user.and_then(UserIdentity::company_id), company_id))
        || (is_manager(user) && same_org(user.and_then(UserIdentity::team_id), team_id))
}

fn leave_visible(user: Option<&UserIdentity>, record: &LeaveRequest) -> bool {
    personal_record_visible(
        user,
        record.employee_id.as_ref(),
        record.team_id.as_ref(),
        record.company_id.as_ref(),
    )
}

fn claim_visible(user: Option<&UserIdentity>, record: &Claim) -> bool {
    personal_record_visible(
        user,
        record.employee_id.as_ref(),
        record.team_id.as_ref(),
        record.company_id.as_ref(),
    )
}

fn medical_record_visible(user: Option<&UserIdentity>, record: &MedicalRecord) -> bool {
    personal_record_visible(
        user,
        record.employee_id.as_ref(),
        record.team_id.as_ref(),
        record.company_id.as_ref(),
    )
}
