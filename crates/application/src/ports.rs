use crewdeck_domain::{
    Announcement, Claim, Company, Department, Employee, LeaveRequest, MedicalRecord, ServiceUnit,
    Team,
};

/// Read-only snapshot access to the host's record collections.
///
/// Each method returns the current snapshot of one collection. The engine
/// never mutates records; a collection the host has not loaded yet must be
/// returned as an empty `Vec`, indistinguishable from a loaded-but-empty
/// one. All methods are synchronous: a search runs to completion on the
/// calling thread with no suspension points.
pub trait CollectionRepository: Send + Sync {
    /// Current personnel records.
    fn employees(&self) -> Vec<Employee>;

    /// Current team records.
    fn teams(&self) -> Vec<Team>;

    /// Current announcements.
    fn announcements(&self) -> Vec<Announcement>;

    /// Current leave requests.
    fn leave_requests(&self) -> Vec<LeaveRequest>;

    /// Current expense claims.
    fn claims(&self) -> Vec<Claim>;

    /// Current medical-leave records.
    fn medical_records(&self) -> Vec<MedicalRecord>;

    /// Current company records.
    fn companies(&self) -> Vec<Company>;

    /// Current department records.
    fn departments(&self) -> Vec<Department>;

    /// Current service records.
    fn services(&self) -> Vec<ServiceUnit>;
}
