use crate::cli::ServeArgs;
use crate::infra::{
    AppState, InMemoryComplianceRepository, InMemoryDocumentRepository,
    InMemoryNotificationRepository, InMemoryStorage,
};
use crate::routes::{
    with_workflow_routes, ApiComplianceService, ApiDocumentService, ApiNotificationService,
};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use fleet_ops::config::AppConfig;
use fleet_ops::error::AppError;
use fleet_ops::telemetry;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let documents = Arc::new(ApiDocumentService::new(
        Arc::new(InMemoryDocumentRepository::default()),
        Arc::new(InMemoryStorage::default()),
        config.storage.document_folder.clone(),
    ));
    let compliance = Arc::new(ApiComplianceService::new(Arc::new(
        InMemoryComplianceRepository::default(),
    )));
    let notifications = Arc::new(ApiNotificationService::new(Arc::new(
        InMemoryNotificationRepository::default(),
    )));

    let app = with_workflow_routes(documents, compliance, notifications)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "fleet operations service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
