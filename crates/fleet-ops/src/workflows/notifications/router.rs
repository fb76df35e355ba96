use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::backend::RepositoryError;
use crate::tenancy::{NotificationId, OrgContext, OrgContextQuery};

use super::domain::ComposeRequest;
use super::repository::NotificationRepository;
use super::service::{NotificationService, NotificationServiceError};

/// Router builder exposing HTTP endpoints for notifications.
pub fn notification_router<R>(service: Arc<NotificationService<R>>) -> Router
where
    R: NotificationRepository + 'static,
{
    Router::new()
        .route("/api/v1/notifications", get(inbox_handler::<R>))
        .route("/api/v1/notifications", post(compose_handler::<R>))
        .route("/api/v1/notifications/stats", get(stats_handler::<R>))
        .route(
            "/api/v1/notifications/templates",
            get(templates_handler::<R>),
        )
        .route(
            "/api/v1/notifications/read",
            post(mark_read_bulk_handler::<R>),
        )
        .route(
            "/api/v1/notifications/discard",
            post(delete_bulk_handler::<R>),
        )
        .route(
            "/api/v1/notifications/:notification_id/read",
            post(mark_read_handler::<R>),
        )
        .route(
            "/api/v1/notifications/:notification_id",
            delete(delete_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ComposeBody {
    pub(crate) context: OrgContext,
    pub(crate) message: ComposeRequest,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContextBody {
    pub(crate) context: OrgContext,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BulkBody {
    pub(crate) context: OrgContext,
    pub(crate) ids: Vec<NotificationId>,
}

pub(crate) async fn inbox_handler<R>(
    State(service): State<Arc<NotificationService<R>>>,
    Query(query): Query<OrgContextQuery>,
) -> Response
where
    R: NotificationRepository + 'static,
{
    let context = OrgContext::from(query);
    match service.inbox(&context) {
        Ok(messages) => (StatusCode::OK, axum::Json(messages)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn compose_handler<R>(
    State(service): State<Arc<NotificationService<R>>>,
    axum::Json(body): axum::Json<ComposeBody>,
) -> Response
where
    R: NotificationRepository + 'static,
{
    match service.send(&body.context, body.message) {
        Ok(message) => (StatusCode::CREATED, axum::Json(message)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn stats_handler<R>(
    State(service): State<Arc<NotificationService<R>>>,
    Query(query): Query<OrgContextQuery>,
) -> Response
where
    R: NotificationRepository + 'static,
{
    let context = OrgContext::from(query);
    match service.stats(&context) {
        Ok(stats) => (StatusCode::OK, axum::Json(stats.summary())).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn templates_handler<R>(
    State(service): State<Arc<NotificationService<R>>>,
) -> Response
where
    R: NotificationRepository + 'static,
{
    (StatusCode::OK, axum::Json(service.templates().to_vec())).into_response()
}

pub(crate) async fn mark_read_handler<R>(
    State(service): State<Arc<NotificationService<R>>>,
    Path(notification_id): Path<String>,
    axum::Json(body): axum::Json<ContextBody>,
) -> Response
where
    R: NotificationRepository + 'static,
{
    let id = NotificationId(notification_id);
    match service.mark_read(&body.context, &id) {
        Ok(message) => (StatusCode::OK, axum::Json(message)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn mark_read_bulk_handler<R>(
    State(service): State<Arc<NotificationService<R>>>,
    axum::Json(body): axum::Json<BulkBody>,
) -> Response
where
    R: NotificationRepository + 'static,
{
    match service.mark_read_bulk(&body.context, &body.ids) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn delete_bulk_handler<R>(
    State(service): State<Arc<NotificationService<R>>>,
    axum::Json(body): axum::Json<BulkBody>,
) -> Response
where
    R: NotificationRepository + 'static,
{
    match service.delete_bulk(&body.context, &body.ids) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn delete_handler<R>(
    State(service): State<Arc<NotificationService<R>>>,
    Path(notification_id): Path<String>,
    Query(query): Query<OrgContextQuery>,
) -> Response
where
    R: NotificationRepository + 'static,
{
    let context = OrgContext::from(query);
    let id = NotificationId(notification_id);
    match service.delete(&context, &id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: NotificationServiceError) -> Response {
    let status = match &err {
        NotificationServiceError::Compose(_) => StatusCode::UNPROCESSABLE_ENTITY,
        NotificationServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        NotificationServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        NotificationServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::BAD_GATEWAY
        }
    };

    let payload = json!({ "error": err.to_string() });
    (status, axum::Json(payload)).into_response()
}
