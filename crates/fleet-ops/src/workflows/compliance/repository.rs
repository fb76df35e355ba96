use crate::backend::RepositoryError;
use crate::tenancy::OrgContext;

use super::domain::{InspectionRecord, ViolationRecord};

/// Storage abstraction for compliance records.
///
/// Inspections and violations live in distinct collections; the two insert
/// methods make the routing boundary part of the contract. Entries are
/// create-only: the dashboard defines no edit or delete flow for them.
pub trait ComplianceRepository: Send + Sync {
    fn insert_inspection(
        &self,
        ctx: &OrgContext,
        record: InspectionRecord,
    ) -> Result<InspectionRecord, RepositoryError>;
    fn insert_violation(
        &self,
        ctx: &OrgContext,
        record: ViolationRecord,
    ) -> Result<ViolationRecord, RepositoryError>;
}
