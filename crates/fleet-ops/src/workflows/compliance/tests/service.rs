use super::common::{build_service, ctx, inspection_submission, violation_submission};
use crate::workflows::compliance::domain::ComplianceRecord;
use crate::workflows::compliance::service::ComplianceServiceError;
use crate::workflows::compliance::IntakeError;

#[test]
fn inspection_routes_to_inspection_collection() {
    let (service, repository) = build_service();

    let record = service
        .submit(&ctx(), inspection_submission())
        .expect("submission succeeds");

    assert!(matches!(record, ComplianceRecord::Inspection(_)));
    assert_eq!(repository.inspections().len(), 1);
    assert!(repository.violations().is_empty());
    assert!(record.id().0.starts_with("inspection-"));
}

#[test]
fn violation_routes_to_violation_collection() {
    let (service, repository) = build_service();

    let record = service
        .submit(&ctx(), violation_submission())
        .expect("submission succeeds");

    assert!(matches!(record, ComplianceRecord::Violation(_)));
    assert_eq!(repository.violations().len(), 1);
    assert!(repository.inspections().is_empty());
}

#[test]
fn intake_failure_leaves_collections_untouched() {
    let (service, repository) = build_service();
    let mut submission = violation_submission();
    submission.title = String::new();

    match service.submit(&ctx(), submission) {
        Err(ComplianceServiceError::Intake(IntakeError::EmptyTitle)) => {}
        other => panic!("expected intake failure, got {other:?}"),
    }

    assert!(repository.inspections().is_empty());
    assert!(repository.violations().is_empty());
}
