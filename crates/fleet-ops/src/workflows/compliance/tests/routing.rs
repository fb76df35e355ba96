use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::{ctx, inspection_submission, violation_submission, MemoryComplianceRepository};
use crate::workflows::compliance::router::compliance_router;
use crate::workflows::compliance::service::ComplianceService;

fn build_router() -> axum::Router {
    let repository = Arc::new(MemoryComplianceRepository::default());
    let service = Arc::new(ComplianceService::new(repository));
    compliance_router(service)
}

async fn post_record(router: axum::Router, payload: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/compliance/records")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request");

    let response = router.oneshot(request).await.expect("router dispatch");
    let status = response.status();
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    let value: Value = serde_json::from_slice(&body).expect("json");
    (status, value)
}

#[tokio::test]
async fn post_inspection_returns_receipt() {
    let payload = json!({
        "context": ctx(),
        "record": inspection_submission(),
    });

    let (status, body) = post_record(build_router(), payload).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.get("kind").and_then(Value::as_str), Some("inspection"));
    assert!(body
        .get("record_id")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .starts_with("inspection-"));
}

#[tokio::test]
async fn post_unsupported_type_returns_unprocessable() {
    let mut submission = violation_submission();
    submission.compliance_type = crate::workflows::compliance::ComplianceType::SafetyAudit;
    let payload = json!({
        "context": ctx(),
        "record": submission,
    });

    let (status, body) = post_record(build_router(), payload).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .contains("Safety Audit"));
}

#[tokio::test]
async fn post_missing_title_returns_unprocessable() {
    let mut submission = inspection_submission();
    submission.title = String::new();
    let payload = json!({
        "context": ctx(),
        "record": submission,
    });

    let (status, body) = post_record(build_router(), payload).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .contains("title"));
}
