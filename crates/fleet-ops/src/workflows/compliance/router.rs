use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::backend::RepositoryError;
use crate::tenancy::OrgContext;

use super::domain::{ComplianceRecord, ComplianceRecordId, ComplianceSubmission};
use super::repository::ComplianceRepository;
use super::service::{ComplianceService, ComplianceServiceError};

/// Router builder exposing the compliance intake endpoint.
pub fn compliance_router<R>(service: Arc<ComplianceService<R>>) -> Router
where
    R: ComplianceRepository + 'static,
{
    Router::new()
        .route("/api/v1/compliance/records", post(submit_handler::<R>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct SubmitRequest {
    pub(crate) context: OrgContext,
    pub(crate) record: ComplianceSubmission,
}

/// Acknowledgement returned after a successful submission.
#[derive(Debug, Clone, Serialize)]
pub struct ComplianceReceipt {
    pub record_id: ComplianceRecordId,
    pub kind: &'static str,
    pub title: String,
    pub status: &'static str,
}

impl ComplianceReceipt {
    fn from_record(record: &ComplianceRecord) -> Self {
        Self {
            record_id: record.id().clone(),
            kind: record.kind(),
            title: record.title().to_string(),
            status: record.status().label(),
        }
    }
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<ComplianceService<R>>>,
    axum::Json(request): axum::Json<SubmitRequest>,
) -> Response
where
    R: ComplianceRepository + 'static,
{
    match service.submit(&request.context, request.record) {
        Ok(record) => {
            let receipt = ComplianceReceipt::from_record(&record);
            (StatusCode::CREATED, axum::Json(receipt)).into_response()
        }
        Err(ComplianceServiceError::Intake(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(ComplianceServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({ "error": "record already exists" });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
        }
    }
}
