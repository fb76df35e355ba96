use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use crate::backend::RepositoryError;
use crate::tenancy::{DocumentId, OrgContext, OrgContextQuery};

use super::domain::NewDocument;
use super::repository::DocumentRepository;
use super::service::{DocumentService, DocumentServiceError};
use super::storage::{StorageGateway, UploadedFile};

/// Router builder exposing HTTP endpoints for the document lifecycle.
pub fn document_router<R, S>(service: Arc<DocumentService<R, S>>) -> Router
where
    R: DocumentRepository + 'static,
    S: StorageGateway + 'static,
{
    Router::new()
        .route("/api/v1/documents", get(list_handler::<R, S>))
        .route("/api/v1/documents", post(upload_handler::<R, S>))
        .route("/api/v1/documents/stats", get(stats_handler::<R, S>))
        .route(
            "/api/v1/documents/:document_id/favorite",
            post(favorite_handler::<R, S>),
        )
        .route(
            "/api/v1/documents/:document_id/archive",
            post(archive_handler::<R, S>),
        )
        .route(
            "/api/v1/documents/:document_id/download",
            post(download_handler::<R, S>),
        )
        .route(
            "/api/v1/documents/:document_id",
            delete(delete_handler::<R, S>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct UploadDocumentRequest {
    pub(crate) context: OrgContext,
    pub(crate) document: NewDocument,
    pub(crate) file_name: String,
    #[serde(default)]
    pub(crate) content_type: Option<String>,
    pub(crate) content: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FavoriteRequest {
    pub(crate) context: OrgContext,
    pub(crate) favorite: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArchiveRequest {
    pub(crate) context: OrgContext,
    pub(crate) archived: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DownloadRequest {
    pub(crate) context: OrgContext,
}

pub(crate) async fn list_handler<R, S>(
    State(service): State<Arc<DocumentService<R, S>>>,
    Query(query): Query<OrgContextQuery>,
) -> Response
where
    R: DocumentRepository + 'static,
    S: StorageGateway + 'static,
{
    let context = OrgContext::from(query);
    match service.list(&context) {
        Ok(documents) => (StatusCode::OK, axum::Json(documents)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn stats_handler<R, S>(
    State(service): State<Arc<DocumentService<R, S>>>,
    Query(query): Query<OrgContextQuery>,
) -> Response
where
    R: DocumentRepository + 'static,
    S: StorageGateway + 'static,
{
    let context = OrgContext::from(query);
    match service.stats(&context, Utc::now()) {
        Ok(stats) => (StatusCode::OK, axum::Json(stats.summary())).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn upload_handler<R, S>(
    State(service): State<Arc<DocumentService<R, S>>>,
    axum::Json(request): axum::Json<UploadDocumentRequest>,
) -> Response
where
    R: DocumentRepository + 'static,
    S: StorageGateway + 'static,
{
    let UploadDocumentRequest {
        context,
        document,
        file_name,
        content_type,
        content,
    } = request;

    let file = UploadedFile {
        file_name,
        content_type: content_type.unwrap_or_else(|| "application/octet-stream".to_string()),
        bytes: content.into_bytes(),
    };

    match service.upload(&context, document, file) {
        Ok(created) => (StatusCode::CREATED, axum::Json(created)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn favorite_handler<R, S>(
    State(service): State<Arc<DocumentService<R, S>>>,
    Path(document_id): Path<String>,
    axum::Json(request): axum::Json<FavoriteRequest>,
) -> Response
where
    R: DocumentRepository + 'static,
    S: StorageGateway + 'static,
{
    let id = DocumentId(document_id);
    match service.set_favorite(&request.context, &id, request.favorite) {
        Ok(updated) => (StatusCode::OK, axum::Json(updated)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn archive_handler<R, S>(
    State(service): State<Arc<DocumentService<R, S>>>,
    Path(document_id): Path<String>,
    axum::Json(request): axum::Json<ArchiveRequest>,
) -> Response
where
    R: DocumentRepository + 'static,
    S: StorageGateway + 'static,
{
    let id = DocumentId(document_id);
    match service.set_archived(&request.context, &id, request.archived) {
        Ok(updated) => (StatusCode::OK, axum::Json(updated)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn download_handler<R, S>(
    State(service): State<Arc<DocumentService<R, S>>>,
    Path(document_id): Path<String>,
    axum::Json(request): axum::Json<DownloadRequest>,
) -> Response
where
    R: DocumentRepository + 'static,
    S: StorageGateway + 'static,
{
    let id = DocumentId(document_id);
    match service.record_download(&request.context, &id) {
        Ok(updated) => (StatusCode::OK, axum::Json(updated)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn delete_handler<R, S>(
    State(service): State<Arc<DocumentService<R, S>>>,
    Path(document_id): Path<String>,
    Query(query): Query<OrgContextQuery>,
) -> Response
where
    R: DocumentRepository + 'static,
    S: StorageGateway + 'static,
{
    let context = OrgContext::from(query);
    let id = DocumentId(document_id);
    match service.delete(&context, &id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: DocumentServiceError) -> Response {
    let status = match &err {
        DocumentServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DocumentServiceError::Upload(_) => StatusCode::BAD_GATEWAY,
        DocumentServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        DocumentServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        DocumentServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::BAD_GATEWAY
        }
    };

    let payload = json!({ "error": err.to_string() });
    (status, axum::Json(payload)).into_response()
}
