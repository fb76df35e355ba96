use crate::infra::{
    AppState, InMemoryComplianceRepository, InMemoryDocumentRepository,
    InMemoryNotificationRepository, InMemoryStorage,
};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

use fleet_ops::workflows::compliance::{compliance_router, ComplianceService};
use fleet_ops::workflows::documents::{document_router, DocumentService};
use fleet_ops::workflows::notifications::{notification_router, NotificationService};

pub(crate) type ApiDocumentService = DocumentService<InMemoryDocumentRepository, InMemoryStorage>;
pub(crate) type ApiComplianceService = ComplianceService<InMemoryComplianceRepository>;
pub(crate) type ApiNotificationService = NotificationService<InMemoryNotificationRepository>;

pub(crate) fn with_workflow_routes(
    documents: Arc<ApiDocumentService>,
    compliance: Arc<ApiComplianceService>,
    notifications: Arc<ApiNotificationService>,
) -> axum::Router {
    document_router(documents)
        .merge(compliance_router(compliance))
        .merge(notification_router(notifications))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    fn build_router() -> axum::Router {
        let documents = Arc::new(ApiDocumentService::new(
            Arc::new(InMemoryDocumentRepository::default()),
            Arc::new(InMemoryStorage::default()),
            "fleet-documents",
        ));
        let compliance = Arc::new(ApiComplianceService::new(Arc::new(
            InMemoryComplianceRepository::default(),
        )));
        let notifications = Arc::new(ApiNotificationService::new(Arc::new(
            InMemoryNotificationRepository::default(),
        )));
        with_workflow_routes(documents, compliance, notifications)
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let router = build_router();
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn document_upload_round_trips_through_router() {
        let router = build_router();
        let payload = json!({
            "context": {
                "org_id": "org-1",
                "user_id": "user-1",
                "user_name": "Avery Chen",
                "role": "fleet_manager"
            },
            "document": {
                "name": "Operator licence",
                "category": "compliance",
                "expiry_date": "2027-01-31"
            },
            "file_name": "operator-licence.pdf",
            "content": "licence bytes"
        });

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/documents")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let document: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(
            document.get("status").and_then(Value::as_str),
            Some("draft")
        );

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/documents?org_id=org-1&user_id=user-1&user_name=Avery%20Chen&role=fleet_manager")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let documents: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(documents.as_array().map(Vec::len), Some(1));
    }
}
