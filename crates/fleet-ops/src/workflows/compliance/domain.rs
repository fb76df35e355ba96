use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::tenancy::{DriverId, OrgId, UserId, VehicleId};

pub const DEFAULT_PENALTY_CURRENCY: &str = "GBP";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceType {
    VehicleInspection,
    ComplianceViolation,
    RegulatoryCheck,
    DocumentCompliance,
    SafetyAudit,
}

impl ComplianceType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::VehicleInspection => "Vehicle Inspection",
            Self::ComplianceViolation => "Compliance Violation",
            Self::RegulatoryCheck => "Regulatory Check",
            Self::DocumentCompliance => "Document Compliance",
            Self::SafetyAudit => "Safety Audit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Pending,
    InProgress,
    Compliant,
    NonCompliant,
    Conditional,
    Resolved,
}

impl ComplianceStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Compliant => "Compliant",
            Self::NonCompliant => "Non-Compliant",
            Self::Conditional => "Conditional",
            Self::Resolved => "Resolved",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InspectionType {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Annual,
    Compliance,
}

impl InspectionType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Quarterly => "Quarterly",
            Self::Annual => "Annual",
            Self::Compliance => "Compliance",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationType {
    Speeding,
    HoursOfService,
    OverweightLoad,
    Documentation,
    EquipmentDefect,
    #[default]
    Other,
}

impl ViolationType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Speeding => "Speeding",
            Self::HoursOfService => "Hours of Service",
            Self::OverweightLoad => "Overweight Load",
            Self::Documentation => "Documentation",
            Self::EquipmentDefect => "Equipment Defect",
            Self::Other => "Other",
        }
    }
}

/// Flat intake form exactly as the dashboard submits it.
///
/// The two conditional field groups are both optional here; the intake guard
/// enforces that the group matching `compliance_type` is the one that ends
/// up populated, applying defaults for anything the form left out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceSubmission {
    pub compliance_type: ComplianceType,
    pub vehicle_id: String,
    /// UI sentinel: `"no_driver"` (or blank) means no driver selected.
    #[serde(default)]
    pub driver_id: Option<String>,
    #[serde(default)]
    pub compliance_date: Option<NaiveDate>,
    #[serde(default)]
    pub next_review_date: Option<NaiveDate>,
    pub status: ComplianceStatus,
    pub priority: Priority,
    #[serde(default)]
    pub severity: Option<Priority>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub regulatory_body: Option<String>,
    #[serde(default)]
    pub regulatory_reference: Option<String>,
    #[serde(default)]
    pub inspection: Option<InspectionFields>,
    #[serde(default)]
    pub violation: Option<ViolationFields>,
}

/// Inspection-specific form fields; numeric fields arrive raw and are
/// coerced by the intake guard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InspectionFields {
    #[serde(default)]
    pub inspection_type: InspectionType,
    #[serde(default)]
    pub compliance_score: Option<f64>,
    #[serde(default)]
    pub defects_found: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub weather_conditions: Option<String>,
    #[serde(default)]
    pub vehicle_mileage: Option<f64>,
    #[serde(default)]
    pub fuel_level: Option<String>,
    #[serde(default)]
    pub oil_condition: Option<String>,
    #[serde(default)]
    pub tire_condition: Option<String>,
    #[serde(default)]
    pub brake_condition: Option<String>,
    #[serde(default)]
    pub lights_condition: Option<String>,
    #[serde(default)]
    pub emergency_equipment: Vec<String>,
}

/// Violation-specific form fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViolationFields {
    #[serde(default)]
    pub violation_type: ViolationType,
    #[serde(default)]
    pub penalty_amount: Option<f64>,
    #[serde(default)]
    pub penalty_currency: Option<String>,
    #[serde(default)]
    pub case_number: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub witnesses: Vec<String>,
    #[serde(default)]
    pub evidence_files: Vec<String>,
    #[serde(default)]
    pub corrective_actions: Vec<String>,
    #[serde(default)]
    pub follow_up_required: bool,
    #[serde(default)]
    pub follow_up_date: Option<NaiveDate>,
    #[serde(default)]
    pub risk_assessment_score: Option<f64>,
    #[serde(default)]
    pub operational_impact: Option<String>,
    #[serde(default)]
    pub lessons_learned: Option<String>,
}

/// Identifier wrapper for persisted compliance records of either kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComplianceRecordId(pub String);

/// Sanitized vehicle-inspection record bound for the inspections collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionRecord {
    pub id: ComplianceRecordId,
    pub org_id: OrgId,
    pub vehicle_id: VehicleId,
    pub driver_id: Option<DriverId>,
    pub inspector: UserId,
    pub compliance_date: NaiveDate,
    pub next_review_date: Option<NaiveDate>,
    pub status: ComplianceStatus,
    pub priority: Priority,
    pub severity: Option<Priority>,
    pub title: String,
    pub description: String,
    pub regulatory_body: Option<String>,
    pub regulatory_reference: Option<String>,
    pub inspection_type: InspectionType,
    pub compliance_score: u8,
    pub defects_found: Vec<String>,
    pub location: Option<String>,
    pub weather_conditions: Option<String>,
    pub vehicle_mileage: u32,
    pub fuel_level: Option<String>,
    pub oil_condition: Option<String>,
    pub tire_condition: Option<String>,
    pub brake_condition: Option<String>,
    pub lights_condition: Option<String>,
    pub emergency_equipment: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Sanitized violation record bound for the violations collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViolationRecord {
    pub id: ComplianceRecordId,
    pub org_id: OrgId,
    pub vehicle_id: VehicleId,
    pub driver_id: Option<DriverId>,
    pub reported_by: UserId,
    pub compliance_date: NaiveDate,
    pub next_review_date: Option<NaiveDate>,
    pub status: ComplianceStatus,
    pub priority: Priority,
    pub severity: Option<Priority>,
    pub title: String,
    pub description: String,
    pub regulatory_body: Option<String>,
    pub regulatory_reference: Option<String>,
    pub violation_type: ViolationType,
    pub penalty_amount: f64,
    pub penalty_currency: String,
    pub case_number: Option<String>,
    pub location: Option<String>,
    pub witnesses: Vec<String>,
    pub evidence_files: Vec<String>,
    pub corrective_actions: Vec<String>,
    pub follow_up_required: bool,
    pub follow_up_date: Option<NaiveDate>,
    pub risk_assessment_score: u8,
    pub operational_impact: Option<String>,
    pub lessons_learned: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Routed persistence shape: each variant only carries its own fields and
/// targets its own storage collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComplianceRecord {
    Inspection(InspectionRecord),
    Violation(ViolationRecord),
}

impl ComplianceRecord {
    pub fn id(&self) -> &ComplianceRecordId {
        match self {
            Self::Inspection(record) => &record.id,
            Self::Violation(record) => &record.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Inspection(record) => &record.title,
            Self::Violation(record) => &record.title,
        }
    }

    pub fn status(&self) -> ComplianceStatus {
        match self {
            Self::Inspection(record) => record.status,
            Self::Violation(record) => record.status,
        }
    }

    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Inspection(_) => "inspection",
            Self::Violation(_) => "violation",
        }
    }

    pub(crate) fn assign_id(&mut self, id: ComplianceRecordId) {
        match self {
            Self::Inspection(record) => record.id = id,
            Self::Violation(record) => record.id = id,
        }
    }
}
