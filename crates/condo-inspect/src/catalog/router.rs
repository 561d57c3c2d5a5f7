use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;

use super::registry::CatalogRegistry;

/// Read-only routes over the condition-state and category catalogs.
pub fn catalog_router<C>(registry: Arc<C>) -> Router
where
    C: CatalogRegistry + 'static,
{
    Router::new()
        .route(
            "/api/v1/catalog/condition-states",
            get(condition_states_handler::<C>),
        )
        .route("/api/v1/catalog/categories", get(categories_handler::<C>))
        .with_state(registry)
}

pub(crate) async fn condition_states_handler<C>(State(registry): State<Arc<C>>) -> Response
where
    C: CatalogRegistry + 'static,
{
    match registry.condition_states() {
        Ok(states) => (StatusCode::OK, axum::Json(states)).into_response(),
        Err(err) => unavailable(err),
    }
}

pub(crate) async fn categories_handler<C>(State(registry): State<Arc<C>>) -> Response
where
    C: CatalogRegistry + 'static,
{
    match registry.categories() {
        Ok(categories) => (StatusCode::OK, axum::Json(categories)).into_response(),
        Err(err) => unavailable(err),
    }
}

fn unavailable(err: super::registry::CatalogError) -> Response {
    let payload = json!({ "error": err.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
