use chrono::{DateTime, Utc};

use crate::tenancy::{DriverId, OrgContext, VehicleId};

use super::domain::{
    ComplianceRecord, ComplianceRecordId, ComplianceSubmission, ComplianceType, InspectionRecord,
    ViolationRecord, DEFAULT_PENALTY_CURRENCY,
};

/// UI placeholder meaning "no driver selected"; must never reach storage.
pub const NO_DRIVER_SENTINEL: &str = "no_driver";

const DEFAULT_COMPLIANCE_SCORE: u8 = 100;
const MIN_RISK_SCORE: u8 = 1;
const MAX_RISK_SCORE: u8 = 10;

/// Validation errors raised during compliance intake.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("vehicle is required")]
    MissingVehicle,
    #[error("compliance date is required")]
    MissingComplianceDate,
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("no storage route is defined for {} entries", .0.label())]
    UnsupportedType(ComplianceType),
}

/// Guard turning a raw submission into a routed, sanitized record.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    /// Validate the submission and build the record variant its compliance
    /// type routes to. The returned record carries a placeholder id; the
    /// service assigns the real one before persisting.
    pub fn record_from_submission(
        &self,
        ctx: &OrgContext,
        submission: ComplianceSubmission,
        now: DateTime<Utc>,
    ) -> Result<ComplianceRecord, IntakeError> {
        if submission.vehicle_id.trim().is_empty() {
            return Err(IntakeError::MissingVehicle);
        }
        let compliance_date = submission
            .compliance_date
            .ok_or(IntakeError::MissingComplianceDate)?;
        if submission.title.trim().is_empty() {
            return Err(IntakeError::EmptyTitle);
        }
        if submission.description.trim().is_empty() {
            return Err(IntakeError::EmptyDescription);
        }

        let vehicle_id = VehicleId(submission.vehicle_id.trim().to_string());
        let driver_id = normalize_driver(submission.driver_id.as_deref());

        match submission.compliance_type {
            ComplianceType::VehicleInspection => {
                let fields = submission.inspection.unwrap_or_default();
                Ok(ComplianceRecord::Inspection(InspectionRecord {
                    id: ComplianceRecordId("pending".to_string()),
                    org_id: ctx.org_id.clone(),
                    vehicle_id,
                    driver_id,
                    inspector: ctx.user_id.clone(),
                    compliance_date,
                    next_review_date: submission.next_review_date,
                    status: submission.status,
                    priority: submission.priority,
                    severity: submission.severity,
                    title: submission.title,
                    description: submission.description,
                    regulatory_body: submission.regulatory_body,
                    regulatory_reference: submission.regulatory_reference,
                    inspection_type: fields.inspection_type,
                    compliance_score: coerce_score(fields.compliance_score),
                    defects_found: fields.defects_found,
                    location: fields.location,
                    weather_conditions: fields.weather_conditions,
                    vehicle_mileage: coerce_mileage(fields.vehicle_mileage),
                    fuel_level: fields.fuel_level,
                    oil_condition: fields.oil_condition,
                    tire_condition: fields.tire_condition,
                    brake_condition: fields.brake_condition,
                    lights_condition: fields.lights_condition,
                    emergency_equipment: fields.emergency_equipment,
                    created_at: now,
                }))
            }
            ComplianceType::ComplianceViolation => {
                let fields = submission.violation.unwrap_or_default();
                Ok(ComplianceRecord::Violation(ViolationRecord {
                    id: ComplianceRecordId("pending".to_string()),
                    org_id: ctx.org_id.clone(),
                    vehicle_id,
                    driver_id,
                    reported_by: ctx.user_id.clone(),
                    compliance_date,
                    next_review_date: submission.next_review_date,
                    status: submission.status,
                    priority: submission.priority,
                    severity: submission.severity,
                    title: submission.title,
                    description: submission.description,
                    regulatory_body: submission.regulatory_body,
                    regulatory_reference: submission.regulatory_reference,
                    violation_type: fields.violation_type,
                    penalty_amount: coerce_amount(fields.penalty_amount),
                    penalty_currency: fields
                        .penalty_currency
                        .filter(|currency| !currency.trim().is_empty())
                        .unwrap_or_else(|| DEFAULT_PENALTY_CURRENCY.to_string()),
                    case_number: fields.case_number,
                    location: fields.location,
                    witnesses: fields.witnesses,
                    evidence_files: fields.evidence_files,
                    corrective_actions: fields.corrective_actions,
                    follow_up_required: fields.follow_up_required,
                    follow_up_date: fields.follow_up_date,
                    risk_assessment_score: coerce_risk_score(fields.risk_assessment_score),
                    operational_impact: fields.operational_impact,
                    lessons_learned: fields.lessons_learned,
                    created_at: now,
                }))
            }
            other @ (ComplianceType::RegulatoryCheck
            | ComplianceType::DocumentCompliance
            | ComplianceType::SafetyAudit) => {
                tracing::warn!(compliance_type = other.label(), "rejected unroutable entry");
                Err(IntakeError::UnsupportedType(other))
            }
        }
    }
}

/// Translate the `"no_driver"` sentinel (or a blank value) to a true null.
pub(crate) fn normalize_driver(raw: Option<&str>) -> Option<DriverId> {
    match raw {
        None => None,
        Some(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() || trimmed == NO_DRIVER_SENTINEL {
                None
            } else {
                Some(DriverId(trimmed.to_string()))
            }
        }
    }
}

fn coerce_score(raw: Option<f64>) -> u8 {
    raw.filter(|value| value.is_finite())
        .map(|value| value.clamp(0.0, 100.0) as u8)
        .unwrap_or(DEFAULT_COMPLIANCE_SCORE)
}

fn coerce_amount(raw: Option<f64>) -> f64 {
    raw.filter(|value| value.is_finite())
        .map(|value| value.max(0.0))
        .unwrap_or(0.0)
}

fn coerce_mileage(raw: Option<f64>) -> u32 {
    raw.filter(|value| value.is_finite())
        .map(|value| value.clamp(0.0, u32::MAX as f64) as u32)
        .unwrap_or(0)
}

fn coerce_risk_score(raw: Option<f64>) -> u8 {
    raw.filter(|value| value.is_finite())
        .map(|value| value.clamp(MIN_RISK_SCORE as f64, MAX_RISK_SCORE as f64) as u8)
        .unwrap_or(MIN_RISK_SCORE)
}
