use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;

use condo_inspect::catalog::catalog_router;
use condo_inspect::checklist::checklist_router;
use condo_inspect::inspection::{inspection_router, pending_report_router};
use condo_inspect::inventory::inventory_router;

use crate::infra::{AppState, Services};

/// Compose every area router with the operational endpoints.
pub(crate) fn api_router(services: &Services) -> axum::Router {
    catalog_router(services.catalog.clone())
        .merge(inventory_router(services.inventory.clone()))
        .merge(checklist_router(services.checklists.clone()))
        .merge(inspection_router(services.inspections.clone()))
        .merge(pending_report_router(services.report.clone()))
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
