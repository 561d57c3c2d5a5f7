use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::body::Body;
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::catalog::InMemoryCatalog;
use crate::checklist::{ChecklistScope, InMemoryChecklistStore, NewChecklist};
use crate::checklist::repository::ChecklistStore;
use crate::inspection::domain::{AddDetail, CreateInspection, DetailItemRef, InspectionTarget};
use crate::inspection::report::PendingPolicy;
use crate::inspection::router::{
    inspection_router, pending_report_router, CreateInspectionRequest,
};
use crate::inspection::service::InspectionService;
use crate::inventory::{inventory_router, InMemoryInventoryStore, InventoryService};

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn create_inspection_route_rejects_both_targets() {
    let harness = Harness::new();
    let (unit, _) = harness.unit_with_item("A", 5, "501", "Kitchen");
    let (zone, _) = harness.zone_with_item("BBQ Terrace", "Grill");
    let checklist = harness.checklist(ChecklistScope::Unit);
    let router = inspection_router(Arc::new(harness.engine()));

    let response = router
        .oneshot(post_json(
            "/api/v1/inspections",
            json!({
                "inspector": "R. Vargas",
                "checklist_id": checklist.id,
                "unit_id": unit.id,
                "zone_id": zone.id,
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .expect("error message")
        .contains("exactly one"));
}

#[tokio::test]
async fn create_inspection_route_rejects_neither_target() {
    let harness = Harness::new();
    let checklist = harness.checklist(ChecklistScope::Unit);
    let router = inspection_router(Arc::new(harness.engine()));

    let response = router
        .oneshot(post_json(
            "/api/v1/inspections",
            json!({
                "inspector": "R. Vargas",
                "checklist_id": checklist.id,
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn add_detail_route_rejects_both_item_refs() {
    let harness = Harness::new();
    let engine = harness.engine();
    let (unit, unit_item) = harness.unit_with_item("A", 5, "501", "Kitchen");
    let (_, zone_item) = harness.zone_with_item("BBQ Terrace", "Grill");
    let checklist = harness.checklist(ChecklistScope::Unit);
    let inspection = engine
        .create_inspection(CreateInspection {
            inspector: "R. Vargas".to_string(),
            checklist_id: checklist.id,
            target: InspectionTarget::Unit(unit.id),
            at: None,
        })
        .expect("inspection created");
    let router = inspection_router(Arc::new(engine));

    let response = router
        .oneshot(post_json(
            &format!("/api/v1/inspections/{}/details", inspection.id),
            json!({
                "unit_item_id": unit_item.id,
                "zone_item_id": zone_item.id,
                "condition_id": GOOD,
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn add_detail_route_maps_inconsistent_target_to_bad_request() {
    let harness = Harness::new();
    let engine = harness.engine();
    let (unit, _) = harness.unit_with_item("A", 5, "501", "Kitchen");
    let (_, zone_item) = harness.zone_with_item("BBQ Terrace", "Grill");
    let checklist = harness.checklist(ChecklistScope::Unit);
    let inspection = engine
        .create_inspection(CreateInspection {
            inspector: "R. Vargas".to_string(),
            checklist_id: checklist.id,
            target: InspectionTarget::Unit(unit.id),
            at: None,
        })
        .expect("inspection created");
    let router = inspection_router(Arc::new(engine));

    let response = router
        .oneshot(post_json(
            &format!("/api/v1/inspections/{}/details", inspection.id),
            json!({
                "zone_item_id": zone_item.id,
                "condition_id": NEEDS_MAINTENANCE,
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .expect("error message")
        .contains("does not belong"));
}

#[tokio::test]
async fn get_inspection_route_returns_not_found_for_missing_id() {
    let harness = Harness::new();
    let router = inspection_router(Arc::new(harness.engine()));

    let response = router
        .oneshot(
            Request::get("/api/v1/inspections/42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_unit_route_returns_conflict() {
    let store = Arc::new(InMemoryInventoryStore::default());
    let router = inventory_router(Arc::new(InventoryService::new(store)));
    let body = json!({ "tower": "A", "floor": 5, "number": "501" });

    let created = router
        .clone()
        .oneshot(post_json("/api/v1/units", body.clone()))
        .await
        .expect("route executes");
    assert_eq!(created.status(), StatusCode::CREATED);

    let duplicate = router
        .oneshot(post_json("/api/v1/units", body))
        .await
        .expect("route executes");
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn pending_report_route_serves_flattened_entries() {
    let harness = Harness::new();
    let engine = harness.engine();
    let (unit, item) = harness.unit_with_item("A", 5, "501", "Kitchen");
    let checklist = harness.checklist(ChecklistScope::Unit);
    let inspection = engine
        .create_inspection(CreateInspection {
            inspector: "R. Vargas".to_string(),
            checklist_id: checklist.id,
            target: InspectionTarget::Unit(unit.id),
            at: None,
        })
        .expect("inspection created");
    engine
        .add_detail(
            inspection.id,
            AddDetail {
                item: DetailItemRef::UnitItem(item.id),
                condition_id: NEEDS_MAINTENANCE,
                note: Some("Leaking faucet".to_string()),
                payload: None,
            },
        )
        .expect("detail recorded");

    let router = pending_report_router(Arc::new(harness.aggregator(PendingPolicy::default())));
    let response = router
        .oneshot(
            Request::get("/api/v1/reports/pending")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["total"], 1);
    let entry = &payload["pending"][0];
    assert_eq!(entry["scope"], "UNIT");
    assert_eq!(entry["unit_id"], json!(unit.id.0));
    assert_eq!(entry["item_name"], "Kitchen");
    assert!(entry.get("zone_id").is_none());
}

#[tokio::test]
async fn unavailable_store_maps_to_internal_error() {
    let checklists = Arc::new(InMemoryChecklistStore::default());
    let checklist = checklists
        .insert_checklist(NewChecklist {
            name: "Move-out walkthrough".to_string(),
            version: "1.0".to_string(),
            scope: ChecklistScope::Unit,
        })
        .expect("checklist created");
    let service = Arc::new(InspectionService::new(
        Arc::new(UnavailableInspectionStore),
        Arc::new(InMemoryInventoryStore::default()),
        checklists,
        Arc::new(InMemoryCatalog::default()),
    ));

    let response = crate::inspection::router::create_inspection_handler::<
        UnavailableInspectionStore,
        InMemoryInventoryStore,
        InMemoryChecklistStore,
        InMemoryCatalog,
    >(
        State(service),
        axum::Json(CreateInspectionRequest {
            inspector: "R. Vargas".to_string(),
            checklist_id: checklist.id,
            unit_id: Some(crate::inventory::UnitId(1)),
            zone_id: None,
            at: None,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
