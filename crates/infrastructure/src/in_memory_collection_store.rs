use std::sync::{PoisonError, RwLock};

use crewdeck_application::CollectionRepository;
use crewdeck_core::OrgId;
use crewdeck_domain::{
    Announcement, Claim, Company, Department, Employee, LeaveRequest, MedicalRecord, ServiceUnit,
    Team,
};

/// One guarded collection snapshot.
///
/// Poisoned locks are absorbed: a panicking writer elsewhere must not
/// take the search surface down with it.
#[derive(Debug)]
struct Collection<T> {
    records: RwLock<Vec<T>>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl<T: Clone> Collection<T> {
    fn snapshot(&self) -> Vec<T> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, records: Vec<T>) {
        *self.records.write().unwrap_or_else(PoisonError::into_inner) = records;
    }

    fn push(&self, record: T) {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }

    fn retain(&self, keep: impl FnMut(&T) -> bool) {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(keep);
    }
}

/// In-memory implementation of the collection port.
///
/// Stands in for the host's reactive state containers: the host replaces
/// whole snapshots as data loads, the engine reads them. Collections the
/// host never loaded stay empty, which the engine treats identically to
/// loaded-but-empty ones.
#[derive(Debug, Default)]
pub struct InMemoryCollectionStore {
    employees: Collection<Employee>,
    teams: Collection<Team>,
    announcements: Collection<Announcement>,
    leave_requests: Collection<LeaveRequest>,
    claims: Collection<Claim>,
    medical_records: Collection<MedicalRecord>,
    companies: Collection<Company>,
    departments: Collection<Department>,
    services: Collection<ServiceUnit>,
}

impl InMemoryCollectionStore {
    /// Creates a store with every collection empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the personnel snapshot.
    pub fn set_employees(&self, records: Vec<Employee>) {
        self.employees.set(records);
    }

    /// Appends one personnel record.
    pub fn add_employee(&self, record: Employee) {
        self.employees.push(record);
    }

    /// Removes the personnel record with the given id, if present.
    pub fn remove_employee(&self, id: &OrgId) {
        self.employees.retain(|record| &record.id != id);
    }

    /// Replaces the team snapshot.
    pub fn set_teams(&self, records: Vec<Team>) {
        self.teams.set(records);
    }

    /// Appends one team record.
    pub fn add_team(&self, record: Team) {
        self.teams.push(record);
    }

    /// Removes the team record with the given id, if present.
    pub fn remove_team(&self, id: &OrgId) {
        self.teams.retain(|record| &record.id != id);
    }

    /// Replaces the announcement snapshot.
    pub fn set_announcements(&self, records: Vec<Announcement>) {
        self.announcements.set(records);
    }

    /// Appends one announcement.
    pub fn add_announcement(&self, record: Announcement) {
        self.announcements.push(record);
    }

    /// Removes the announcement with the given id, if present.
    pub fn remove_announcement(&self, id: &OrgId) {
        self.announcements.retain(|record| &record.id != id);
    }

    /// Replaces the leave request snapshot.
    pub fn set_leave_requests(&self, records: Vec<LeaveRequest>) {
        self.leave_requests.set(records);
    }

    /// Appends one leave request.
    pub fn add_leave_request(&self, record: LeaveRequest) {
        self.leave_requests.push(record);
    }

    /// Removes the leave request with the given id, if present.
    pub fn remove_leave_request(&self, id: &OrgId) {
        self.leave_requests.retain(|record| &record.id != id);
    }

    /// Replaces the claim snapshot.
    pub fn set_claims(&self, records: Vec<Claim>) {
        self.claims.set(records);
    }

    /// Appends one claim.
    pub fn add_claim(&self, record: Claim) {
        self.claims.push(record);
    }

    /// Removes the claim with the given id, if present.
    pub fn remove_claim(&self, id: &OrgId) {
        self.claims.retain(|record| &record.id != id);
    }

    /// Replaces the medical record snapshot.
    pub fn set_medical_records(&self, records: Vec<MedicalRecord>) {
        self.medical_records.set(records);
    }

    /// Appends one medical record.
    pub fn add_medical_record(&self, record: MedicalRecord) {
        self.medical_records.push(record);
    }

    /// Removes the medical record with the given id, if present.
    pub fn remove_medical_record(&self, id: &OrgId) {
        self.medical_records.retain(|record| &record.id != id);
    }

    /// Replaces the company snapshot.
    pub fn set_companies(&self, records: Vec<Company>) {
        self.companies.set(records);
    }

    /// Appends one company record.
    pub fn add_company(&self, record: Company) {
        self.companies.push(record);
    }

    /// Removes the company record with the given id, if present.
    pub fn remove_company(&self, id: &OrgId) {
        self.companies.retain(|record| &record.id != id);
    }

    /// Replaces the department snapshot.
    pub fn set_departments(&self, records: Vec<Department>) {
        self.departments.set(records);
    }

    /// Appends one department record.
    pub fn add_department(&self, record: Department) {
        self.departments.push(record);
    }

    /// Removes the department record with the given id, if present.
    pub fn remove_department(&self, id: &OrgId) {
        self.departments.retain(|record| &record.id != id);
    }

    /// Replaces the service snapshot.
    pub fn set_services(&self, records: Vec<ServiceUnit>) {
        self.services.set(records);
    }

    /// Appends one service record.
    pub fn add_service(&self, record: ServiceUnit) {
        self.services.push(record);
    }

    /// Removes the service record with the given id, if present.
    pub fn remove_service(&self, id: &OrgId) {
        self.services.retain(|record| &record.id != id);
    }
}

impl CollectionRepository for InMemoryCollectionStore {
    fn employees(&self) -> Vec<Employee> {
        self.employees.snapshot()
    }

    fn teams(&self) -> Vec<Team> {
        self.teams.snapshot()
    }

    fn announcements(&self) -> Vec<Announcement> {
        self.announcements.snapshot()
    }

    fn leave_requests(&self) -> Vec<LeaveRequest> {
        self.leave_requests.snapshot()
    }

    fn claims(&self) -> Vec<Claim> {
        self.claims.snapshot()
    }

    fn medical_records(&self) -> Vec<MedicalRecord> {
        self.medical_records.snapshot()
    }

    fn companies(&self) -> Vec<Company> {
        self.companies.snapshot()
    }

    fn departments(&self) -> Vec<Department> {
        self.departments.snapshot()
    }

    fn services(&self) -> Vec<ServiceUnit> {
        self.services.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crewdeck_application::{CollectionRepository, SearchService};
    use crewdeck_core::{OrgId, Role, UserIdentity};
    use crewdeck_domain::Employee;

    use super::InMemoryCollectionStore;

    fn employee(id: i64, name: &str) -> Employee {
        Employee {
            id: OrgId::from(id),
            name: name.to_owned(),
            email: None,
            position: None,
            company_id: None,
            team_id: None,
        }
    }

    #[test]
    fn unloaded_collections_read_as_empty() {
        let store = InMemoryCollectionStore::new();
        assert!(store.employees().is_empty());
        assert!(store.claims().is_empty());
    }

    #[test]
    fn set_replaces_the_whole_snapshot() {
        let store = InMemoryCollectionStore::new();
        store.set_employees(vec![employee(1, "Sarah Lane"), employee(2, "Mohamed Ben Ali")]);
        store.set_employees(vec![employee(3, "Nadia Trabelsi")]);

        let snapshot = store.employees();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].name, "Nadia Trabelsi");
    }

    #[test]
    fn add_appends_to_the_current_snapshot() {
        let store = InMemoryCollectionStore::new();
        store.set_employees(vec![employee(1, "Sarah Lane")]);
        store.add_employee(employee(2, "Mohamed Ben Ali"));
        assert_eq!(store.employees().len(), 2);
    }

    #[test]
    fn remove_matches_ids_across_number_and_string_forms() {
        let store = InMemoryCollectionStore::new();
        store.set_employees(vec![employee(1, "Sarah Lane"), employee(2, "Mohamed Ben Ali")]);
        store.remove_employee(&OrgId::new("2"));

        let snapshot = store.employees();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].name, "Sarah Lane");
    }

    #[test]
    fn store_backs_a_search_end_to_end() {
        let store = Arc::new(InMemoryCollectionStore::new());
        store.set_employees(vec![employee(1, "Mohamed Ben Ali")]);

        let engine = SearchService::new(store);
        let admin = UserIdentity::new("u-1", Role::Admin, None, None, None);

        let results = engine.search(Some(&admin), "mohamed");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title(), "Mohamed Ben Ali");
    }
}
