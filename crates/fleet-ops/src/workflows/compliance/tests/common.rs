use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::backend::RepositoryError;
use crate::tenancy::OrgContext;
use crate::workflows::compliance::domain::{
    ComplianceStatus, ComplianceSubmission, ComplianceType, InspectionFields, Priority,
    ViolationFields,
};
use crate::workflows::compliance::repository::ComplianceRepository;
use crate::workflows::compliance::service::ComplianceService;
use crate::workflows::compliance::{InspectionRecord, ViolationRecord};

pub(super) fn ctx() -> OrgContext {
    OrgContext::new("org-100", "user-7", "Dana Mills", "fleet_manager")
}

pub(super) fn inspection_submission() -> ComplianceSubmission {
    ComplianceSubmission {
        compliance_type: ComplianceType::VehicleInspection,
        vehicle_id: "veh-42".to_string(),
        driver_id: Some("drv-9".to_string()),
        compliance_date: NaiveDate::from_ymd_opt(2026, 3, 14),
        next_review_date: NaiveDate::from_ymd_opt(2026, 9, 14),
        status: ComplianceStatus::Compliant,
        priority: Priority::Medium,
        severity: None,
        title: "Quarterly brake inspection".to_string(),
        description: "Full brake system check on the depot lift.".to_string(),
        regulatory_body: Some("DVSA".to_string()),
        regulatory_reference: Some("MOT-2026-0314".to_string()),
        inspection: Some(InspectionFields {
            compliance_score: Some(92.0),
            defects_found: vec!["worn rear pads".to_string()],
            location: Some("Depot 3".to_string()),
            vehicle_mileage: Some(84_312.0),
            brake_condition: Some("serviceable".to_string()),
            ..InspectionFields::default()
        }),
        violation: None,
    }
}

pub(super) fn violation_submission() -> ComplianceSubmission {
    ComplianceSubmission {
        compliance_type: ComplianceType::ComplianceViolation,
        vehicle_id: "veh-17".to_string(),
        driver_id: Some("no_driver".to_string()),
        compliance_date: NaiveDate::from_ymd_opt(2026, 4, 2),
        next_review_date: None,
        status: ComplianceStatus::Pending,
        priority: Priority::High,
        severity: Some(Priority::Critical),
        title: "Overweight load at weighbridge".to_string(),
        description: "Axle 2 exceeded the permitted limit by 6%.".to_string(),
        regulatory_body: Some("DVSA".to_string()),
        regulatory_reference: None,
        inspection: None,
        violation: Some(ViolationFields {
            violation_type: crate::workflows::compliance::ViolationType::OverweightLoad,
            penalty_amount: Some(300.0),
            follow_up_required: true,
            follow_up_date: NaiveDate::from_ymd_opt(2026, 4, 30),
            risk_assessment_score: Some(7.0),
            ..ViolationFields::default()
        }),
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryComplianceRepository {
    pub(super) inspections: Arc<Mutex<Vec<InspectionRecord>>>,
    pub(super) violations: Arc<Mutex<Vec<ViolationRecord>>>,
}

impl MemoryComplianceRepository {
    pub(super) fn inspections(&self) -> Vec<InspectionRecord> {
        self.inspections.lock().expect("lock").clone()
    }

    pub(super) fn violations(&self) -> Vec<ViolationRecord> {
        self.violations.lock().expect("lock").clone()
    }
}

impl ComplianceRepository for MemoryComplianceRepository {
    fn insert_inspection(
        &self,
        _ctx: &OrgContext,
        record: InspectionRecord,
    ) -> Result<InspectionRecord, RepositoryError> {
        self.inspections.lock().expect("lock").push(record.clone());
        Ok(record)
    }

    fn insert_violation(
        &self,
        _ctx: &OrgContext,
        record: ViolationRecord,
    ) -> Result<ViolationRecord, RepositoryError> {
        self.violations.lock().expect("lock").push(record.clone());
        Ok(record)
    }
}

pub(super) fn build_service() -> (
    ComplianceService<MemoryComplianceRepository>,
    Arc<MemoryComplianceRepository>,
) {
    let repository = Arc::new(MemoryComplianceRepository::default());
    let service = ComplianceService::new(repository.clone());
    (service, repository)
}
