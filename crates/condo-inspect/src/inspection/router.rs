use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::catalog::{CatalogRegistry, ConditionStateId};
use crate::checklist::{ChecklistId, ChecklistStore};
use crate::inventory::{InventoryStore, UnitId, UnitItemId, ZoneId, ZoneItemId};

use super::domain::{
    AddDetail, CreateInspection, DetailItemRef, Inspection, InspectionDetail, InspectionId,
    InspectionTarget,
};
use super::report::{PendingEntry, PendingReport, PendingReportAggregator};
use super::repository::InspectionStore;
use super::service::{InspectionError, InspectionService};

/// HTTP surface over the inspection engine.
pub fn inspection_router<S, I, K, C>(service: Arc<InspectionService<S, I, K, C>>) -> Router
where
    S: InspectionStore + 'static,
    I: InventoryStore + 'static,
    K: ChecklistStore + 'static,
    C: CatalogRegistry + 'static,
{
    Router::new()
        .route("/api/v1/inspections", post(create_inspection_handler::<S, I, K, C>))
        .route(
            "/api/v1/inspections/:inspection_id",
            get(get_inspection_handler::<S, I, K, C>)
                .delete(delete_inspection_handler::<S, I, K, C>),
        )
        .route(
            "/api/v1/inspections/:inspection_id/details",
            post(add_detail_handler::<S, I, K, C>),
        )
        .with_state(service)
}

/// HTTP surface over the pending-report aggregator.
pub fn pending_report_router<S, I, C>(aggregator: Arc<PendingReportAggregator<S, I, C>>) -> Router
where
    S: InspectionStore + 'static,
    I: InventoryStore + 'static,
    C: CatalogRegistry + 'static,
{
    Router::new()
        .route("/api/v1/reports/pending", get(pending_report_handler::<S, I, C>))
        .with_state(aggregator)
}

/// Wire shape for creating an inspection: two nullable target columns,
/// collapsed to the sum type before the engine sees them.
#[derive(Debug, Deserialize)]
pub struct CreateInspectionRequest {
    pub inspector: String,
    pub checklist_id: ChecklistId,
    #[serde(default)]
    pub unit_id: Option<UnitId>,
    #[serde(default)]
    pub zone_id: Option<ZoneId>,
    #[serde(default)]
    pub at: Option<DateTime<Utc>>,
}

/// Wire shape for recording a detail.
#[derive(Debug, Deserialize)]
pub struct AddDetailRequest {
    #[serde(default)]
    pub unit_item_id: Option<UnitItemId>,
    #[serde(default)]
    pub zone_item_id: Option<ZoneItemId>,
    pub condition_id: ConditionStateId,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub payload: Option<Value>,
}

/// Inspection as served over the wire, with the target expanded back
/// into its two nullable columns.
#[derive(Debug, Serialize)]
pub struct InspectionView {
    pub id: InspectionId,
    pub at: DateTime<Utc>,
    pub inspector: String,
    pub checklist_id: ChecklistId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<UnitId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<ZoneId>,
}

impl From<Inspection> for InspectionView {
    fn from(inspection: Inspection) -> Self {
        Self {
            id: inspection.id,
            at: inspection.at,
            inspector: inspection.inspector,
            checklist_id: inspection.checklist_id,
            unit_id: inspection.target.unit_id(),
            zone_id: inspection.target.zone_id(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DetailView {
    pub id: super::domain::InspectionDetailId,
    pub inspection_id: InspectionId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_item_id: Option<UnitItemId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_item_id: Option<ZoneItemId>,
    pub condition_id: ConditionStateId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl From<InspectionDetail> for DetailView {
    fn from(detail: InspectionDetail) -> Self {
        Self {
            id: detail.id,
            inspection_id: detail.inspection_id,
            unit_item_id: detail.item.unit_item_id(),
            zone_item_id: detail.item.zone_item_id(),
            condition_id: detail.condition_id,
            note: detail.note,
            payload: detail.payload,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InspectionWithDetails {
    pub inspection: InspectionView,
    pub details: Vec<DetailView>,
}

#[derive(Debug, Serialize)]
pub struct PendingEntryView {
    pub scope: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<UnitId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<ZoneId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_item_id: Option<UnitItemId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_item_id: Option<ZoneItemId>,
    pub item_name: String,
    pub inspection_id: InspectionId,
    pub condition_id: ConditionStateId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl From<PendingEntry> for PendingEntryView {
    fn from(entry: PendingEntry) -> Self {
        let scope = match entry.owner {
            InspectionTarget::Unit(_) => "UNIT",
            InspectionTarget::Zone(_) => "ZONE",
        };
        Self {
            scope,
            unit_id: entry.owner.unit_id(),
            zone_id: entry.owner.zone_id(),
            unit_item_id: entry.item.unit_item_id(),
            zone_item_id: entry.item.zone_item_id(),
            item_name: entry.item_name,
            inspection_id: entry.inspection_id,
            condition_id: entry.condition_id,
            note: entry.note,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PendingReportView {
    pub total: usize,
    pub pending: Vec<PendingEntryView>,
    pub orphaned: Vec<super::domain::InspectionDetailId>,
}

impl From<PendingReport> for PendingReportView {
    fn from(report: PendingReport) -> Self {
        Self {
            total: report.total,
            pending: report.entries.into_iter().map(PendingEntryView::from).collect(),
            orphaned: report.orphaned,
        }
    }
}

pub(crate) async fn create_inspection_handler<S, I, K, C>(
    State(service): State<Arc<InspectionService<S, I, K, C>>>,
    axum::Json(request): axum::Json<CreateInspectionRequest>,
) -> Response
where
    S: InspectionStore + 'static,
    I: InventoryStore + 'static,
    K: ChecklistStore + 'static,
    C: CatalogRegistry + 'static,
{
    let target = match InspectionTarget::from_columns(request.unit_id, request.zone_id) {
        Ok(target) => target,
        Err(err) => return error_response(err.into()),
    };
    let input = CreateInspection {
        inspector: request.inspector,
        checklist_id: request.checklist_id,
        target,
        at: request.at,
    };
    match service.create_inspection(input) {
        Ok(inspection) => {
            (StatusCode::CREATED, axum::Json(InspectionView::from(inspection))).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn add_detail_handler<S, I, K, C>(
    State(service): State<Arc<InspectionService<S, I, K, C>>>,
    Path(inspection_id): Path<u64>,
    axum::Json(request): axum::Json<AddDetailRequest>,
) -> Response
where
    S: InspectionStore + 'static,
    I: InventoryStore + 'static,
    K: ChecklistStore + 'static,
    C: CatalogRegistry + 'static,
{
    let item = match DetailItemRef::from_columns(request.unit_item_id, request.zone_item_id) {
        Ok(item) => item,
        Err(err) => return error_response(err.into()),
    };
    let input = AddDetail {
        item,
        condition_id: request.condition_id,
        note: request.note,
        payload: request.payload,
    };
    match service.add_detail(InspectionId(inspection_id), input) {
        Ok(detail) => {
            (StatusCode::CREATED, axum::Json(DetailView::from(detail))).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn get_inspection_handler<S, I, K, C>(
    State(service): State<Arc<InspectionService<S, I, K, C>>>,
    Path(inspection_id): Path<u64>,
) -> Response
where
    S: InspectionStore + 'static,
    I: InventoryStore + 'static,
    K: ChecklistStore + 'static,
    C: CatalogRegistry + 'static,
{
    match service.get_inspection(InspectionId(inspection_id)) {
        Ok((inspection, details)) => {
            let view = InspectionWithDetails {
                inspection: InspectionView::from(inspection),
                details: details.into_iter().map(DetailView::from).collect(),
            };
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn delete_inspection_handler<S, I, K, C>(
    State(service): State<Arc<InspectionService<S, I, K, C>>>,
    Path(inspection_id): Path<u64>,
) -> Response
where
    S: InspectionStore + 'static,
    I: InventoryStore + 'static,
    K: ChecklistStore + 'static,
    C: CatalogRegistry + 'static,
{
    match service.delete_inspection(InspectionId(inspection_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn pending_report_handler<S, I, C>(
    State(aggregator): State<Arc<PendingReportAggregator<S, I, C>>>,
) -> Response
where
    S: InspectionStore + 'static,
    I: InventoryStore + 'static,
    C: CatalogRegistry + 'static,
{
    match aggregator.list_pending() {
        Ok(report) => {
            (StatusCode::OK, axum::Json(PendingReportView::from(report))).into_response()
        }
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

fn error_response(err: InspectionError) -> Response {
    let status = match &err {
        InspectionError::ChecklistNotFound(_) | InspectionError::InspectionNotFound(_) => {
            StatusCode::NOT_FOUND
        }
        InspectionError::ConditionNotFound(_)
        | InspectionError::InconsistentTarget { .. }
        | InspectionError::InvalidTarget(_)
        | InspectionError::InvalidReference(_) => StatusCode::BAD_REQUEST,
        InspectionError::Store(_)
        | InspectionError::Inventory(_)
        | InspectionError::Checklist(_)
        | InspectionError::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": err.to_string() });
    (status, axum::Json(payload)).into_response()
}
