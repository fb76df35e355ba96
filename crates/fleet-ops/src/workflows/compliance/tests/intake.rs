use chrono::Utc;

use super::common::{ctx, inspection_submission, violation_submission};
use crate::workflows::compliance::domain::{ComplianceRecord, ComplianceType};
use crate::workflows::compliance::intake::{normalize_driver, IntakeError, IntakeGuard};
use crate::workflows::compliance::InspectionFields;

#[test]
fn driver_sentinel_translates_to_null() {
    assert_eq!(normalize_driver(Some("no_driver")), None);
    assert_eq!(normalize_driver(Some("  ")), None);
    assert_eq!(normalize_driver(None), None);
    assert_eq!(
        normalize_driver(Some("drv-9")).map(|driver| driver.0),
        Some("drv-9".to_string())
    );
}

#[test]
fn violation_with_sentinel_driver_persists_null() {
    let guard = IntakeGuard;
    let record = guard
        .record_from_submission(&ctx(), violation_submission(), Utc::now())
        .expect("violation routes");

    match record {
        ComplianceRecord::Violation(violation) => assert_eq!(violation.driver_id, None),
        other => panic!("expected violation record, got {other:?}"),
    }
}

#[test]
fn inspection_score_defaults_to_100_when_unset() {
    let guard = IntakeGuard;
    let mut submission = inspection_submission();
    submission.inspection = Some(InspectionFields::default());

    let record = guard
        .record_from_submission(&ctx(), submission, Utc::now())
        .expect("inspection routes");

    match record {
        ComplianceRecord::Inspection(inspection) => {
            assert_eq!(inspection.compliance_score, 100);
            assert_eq!(inspection.vehicle_mileage, 0);
            assert!(inspection.defects_found.is_empty());
        }
        other => panic!("expected inspection record, got {other:?}"),
    }
}

#[test]
fn inspection_score_clamps_out_of_range_and_nan() {
    let guard = IntakeGuard;

    let mut submission = inspection_submission();
    submission.inspection = Some(InspectionFields {
        compliance_score: Some(250.0),
        ..InspectionFields::default()
    });
    let record = guard
        .record_from_submission(&ctx(), submission, Utc::now())
        .expect("routes");
    match record {
        ComplianceRecord::Inspection(inspection) => assert_eq!(inspection.compliance_score, 100),
        other => panic!("unexpected {other:?}"),
    }

    let mut submission = inspection_submission();
    submission.inspection = Some(InspectionFields {
        compliance_score: Some(f64::NAN),
        vehicle_mileage: Some(f64::INFINITY),
        ..InspectionFields::default()
    });
    let record = guard
        .record_from_submission(&ctx(), submission, Utc::now())
        .expect("routes");
    match record {
        ComplianceRecord::Inspection(inspection) => {
            assert_eq!(inspection.compliance_score, 100);
            assert_eq!(inspection.vehicle_mileage, 0);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn violation_defaults_currency_and_risk_floor() {
    let guard = IntakeGuard;
    let mut submission = violation_submission();
    if let Some(fields) = submission.violation.as_mut() {
        fields.penalty_currency = None;
        fields.risk_assessment_score = Some(0.2);
    }

    let record = guard
        .record_from_submission(&ctx(), submission, Utc::now())
        .expect("violation routes");

    match record {
        ComplianceRecord::Violation(violation) => {
            assert_eq!(violation.penalty_currency, "GBP");
            assert_eq!(violation.risk_assessment_score, 1);
        }
        other => panic!("expected violation record, got {other:?}"),
    }
}

#[test]
fn inspector_identity_comes_from_caller() {
    let guard = IntakeGuard;
    let context = ctx();
    let record = guard
        .record_from_submission(&context, inspection_submission(), Utc::now())
        .expect("inspection routes");

    match record {
        ComplianceRecord::Inspection(inspection) => {
            assert_eq!(inspection.inspector, context.user_id);
            assert_eq!(inspection.org_id, context.org_id);
        }
        other => panic!("expected inspection record, got {other:?}"),
    }
}

#[test]
fn missing_required_fields_block_submission() {
    let guard = IntakeGuard;

    let mut submission = inspection_submission();
    submission.vehicle_id = "  ".to_string();
    assert!(matches!(
        guard.record_from_submission(&ctx(), submission, Utc::now()),
        Err(IntakeError::MissingVehicle)
    ));

    let mut submission = inspection_submission();
    submission.compliance_date = None;
    assert!(matches!(
        guard.record_from_submission(&ctx(), submission, Utc::now()),
        Err(IntakeError::MissingComplianceDate)
    ));

    let mut submission = inspection_submission();
    submission.title = String::new();
    assert!(matches!(
        guard.record_from_submission(&ctx(), submission, Utc::now()),
        Err(IntakeError::EmptyTitle)
    ));

    let mut submission = inspection_submission();
    submission.description = "   ".to_string();
    assert!(matches!(
        guard.record_from_submission(&ctx(), submission, Utc::now()),
        Err(IntakeError::EmptyDescription)
    ));
}

#[test]
fn unrouted_types_surface_typed_errors() {
    let guard = IntakeGuard;
    for kind in [
        ComplianceType::RegulatoryCheck,
        ComplianceType::DocumentCompliance,
        ComplianceType::SafetyAudit,
    ] {
        let mut submission = inspection_submission();
        submission.compliance_type = kind;
        match guard.record_from_submission(&ctx(), submission, Utc::now()) {
            Err(IntakeError::UnsupportedType(reported)) => assert_eq!(reported, kind),
            other => panic!("expected unsupported-type error for {kind:?}, got {other:?}"),
        }
    }
}
