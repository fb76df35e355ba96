//! Compliance entry intake: validate a flat submission form, translate UI
//! sentinels, coerce numeric fields, and route the result into the typed
//! record variant its compliance type persists to.

pub mod domain;
pub(crate) mod intake;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    ComplianceRecord, ComplianceRecordId, ComplianceStatus, ComplianceSubmission, ComplianceType,
    InspectionFields, InspectionRecord, InspectionType, Priority, ViolationFields,
    ViolationRecord, ViolationType, DEFAULT_PENALTY_CURRENCY,
};
pub use intake::{IntakeError, IntakeGuard, NO_DRIVER_SENTINEL};
pub use repository::ComplianceRepository;
pub use router::compliance_router;
pub use service::{ComplianceService, ComplianceServiceError};
