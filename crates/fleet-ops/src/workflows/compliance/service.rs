use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use crate::backend::RepositoryError;
use crate::tenancy::OrgContext;

use super::domain::{ComplianceRecord, ComplianceRecordId, ComplianceSubmission};
use super::intake::{IntakeError, IntakeGuard};
use super::repository::ComplianceRepository;

/// Service composing the intake guard and the per-type record collections.
pub struct ComplianceService<R> {
    guard: IntakeGuard,
    repository: Arc<R>,
}

static RECORD_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_record_id(kind: &str) -> ComplianceRecordId {
    let id = RECORD_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ComplianceRecordId(format!("{kind}-{id:06}"))
}

impl<R> ComplianceService<R>
where
    R: ComplianceRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            guard: IntakeGuard,
            repository,
        }
    }

    /// Submit a compliance entry in one atomic step: validate, route, insert.
    pub fn submit(
        &self,
        ctx: &OrgContext,
        submission: ComplianceSubmission,
    ) -> Result<ComplianceRecord, ComplianceServiceError> {
        let mut record = self
            .guard
            .record_from_submission(ctx, submission, Utc::now())?;
        record.assign_id(next_record_id(record.kind()));

        let stored = match record {
            ComplianceRecord::Inspection(inspection) => {
                ComplianceRecord::Inspection(self.repository.insert_inspection(ctx, inspection)?)
            }
            ComplianceRecord::Violation(violation) => {
                ComplianceRecord::Violation(self.repository.insert_violation(ctx, violation)?)
            }
        };

        Ok(stored)
    }
}

/// Error raised by the compliance service.
#[derive(Debug, thiserror::Error)]
pub enum ComplianceServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
