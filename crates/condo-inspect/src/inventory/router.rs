use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{NewItem, NewZone, UnitFilter, UnitId, UnitKey, ZoneFilter, ZoneId};
use super::repository::InventoryStore;
use super::service::{InventoryError, InventoryService};

/// HTTP surface over the inventory graph.
pub fn inventory_router<S>(service: Arc<InventoryService<S>>) -> Router
where
    S: InventoryStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/units",
            post(create_unit_handler::<S>).get(list_units_handler::<S>),
        )
        .route(
            "/api/v1/units/:unit_id",
            get(get_unit_handler::<S>).delete(delete_unit_handler::<S>),
        )
        .route(
            "/api/v1/units/:unit_id/items",
            post(add_unit_item_handler::<S>).get(list_unit_items_handler::<S>),
        )
        .route(
            "/api/v1/zones",
            post(create_zone_handler::<S>).get(list_zones_handler::<S>),
        )
        .route(
            "/api/v1/zones/:zone_id",
            get(get_zone_handler::<S>).delete(delete_zone_handler::<S>),
        )
        .route(
            "/api/v1/zones/:zone_id/items",
            post(add_zone_item_handler::<S>).get(list_zone_items_handler::<S>),
        )
        .with_state(service)
}

pub(crate) async fn create_unit_handler<S>(
    State(service): State<Arc<InventoryService<S>>>,
    axum::Json(key): axum::Json<UnitKey>,
) -> Response
where
    S: InventoryStore + 'static,
{
    match service.create_unit(key) {
        Ok(unit) => (StatusCode::CREATED, axum::Json(unit)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn list_units_handler<S>(
    State(service): State<Arc<InventoryService<S>>>,
    Query(filter): Query<UnitFilter>,
) -> Response
where
    S: InventoryStore + 'static,
{
    match service.list_units(&filter) {
        Ok(units) => (StatusCode::OK, axum::Json(units)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn get_unit_handler<S>(
    State(service): State<Arc<InventoryService<S>>>,
    Path(unit_id): Path<u64>,
) -> Response
where
    S: InventoryStore + 'static,
{
    match service.get_unit(UnitId(unit_id)) {
        Ok(unit) => (StatusCode::OK, axum::Json(unit)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn delete_unit_handler<S>(
    State(service): State<Arc<InventoryService<S>>>,
    Path(unit_id): Path<u64>,
) -> Response
where
    S: InventoryStore + 'static,
{
    match service.delete_unit(UnitId(unit_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn add_unit_item_handler<S>(
    State(service): State<Arc<InventoryService<S>>>,
    Path(unit_id): Path<u64>,
    axum::Json(item): axum::Json<NewItem>,
) -> Response
where
    S: InventoryStore + 'static,
{
    match service.add_unit_item(UnitId(unit_id), item) {
        Ok(item) => (StatusCode::CREATED, axum::Json(item)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn list_unit_items_handler<S>(
    State(service): State<Arc<InventoryService<S>>>,
    Path(unit_id): Path<u64>,
) -> Response
where
    S: InventoryStore + 'static,
{
    match service.unit_items(UnitId(unit_id)) {
        Ok(items) => (StatusCode::OK, axum::Json(items)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn create_zone_handler<S>(
    State(service): State<Arc<InventoryService<S>>>,
    axum::Json(zone): axum::Json<NewZone>,
) -> Response
where
    S: InventoryStore + 'static,
{
    match service.create_zone(zone) {
        Ok(zone) => (StatusCode::CREATED, axum::Json(zone)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn list_zones_handler<S>(
    State(service): State<Arc<InventoryService<S>>>,
    Query(filter): Query<ZoneFilter>,
) -> Response
where
    S: InventoryStore + 'static,
{
    match service.list_zones(&filter) {
        Ok(zones) => (StatusCode::OK, axum::Json(zones)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn get_zone_handler<S>(
    State(service): State<Arc<InventoryService<S>>>,
    Path(zone_id): Path<u64>,
) -> Response
where
    S: InventoryStore + 'static,
{
    match service.get_zone(ZoneId(zone_id)) {
        Ok(zone) => (StatusCode::OK, axum::Json(zone)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn delete_zone_handler<S>(
    State(service): State<Arc<InventoryService<S>>>,
    Path(zone_id): Path<u64>,
) -> Response
where
    S: InventoryStore + 'static,
{
    match service.delete_zone(ZoneId(zone_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn add_zone_item_handler<S>(
    State(service): State<Arc<InventoryService<S>>>,
    Path(zone_id): Path<u64>,
    axum::Json(item): axum::Json<NewItem>,
) -> Response
where
    S: InventoryStore + 'static,
{
    match service.add_zone_item(ZoneId(zone_id), item) {
        Ok(item) => (StatusCode::CREATED, axum::Json(item)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn list_zone_items_handler<S>(
    State(service): State<Arc<InventoryService<S>>>,
    Path(zone_id): Path<u64>,
) -> Response
where
    S: InventoryStore + 'static,
{
    match service.zone_items(ZoneId(zone_id)) {
        Ok(items) => (StatusCode::OK, axum::Json(items)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: InventoryError) -> Response {
    let status = match &err {
        InventoryError::DuplicateUnit(_) => StatusCode::CONFLICT,
        InventoryError::UnitNotFound(_) | InventoryError::ZoneNotFound(_) => StatusCode::NOT_FOUND,
        InventoryError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": err.to_string() });
    (status, axum::Json(payload)).into_response()
}
