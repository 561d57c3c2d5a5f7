use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use condo_inspect::catalog::{Category, CategoryId, ConditionState, ConditionStateId, InMemoryCatalog};
use condo_inspect::checklist::{ChecklistService, InMemoryChecklistStore};
use condo_inspect::inspection::{
    InMemoryInspectionStore, InspectionService, PendingPolicy, PendingReportAggregator,
};
use condo_inspect::inventory::{InMemoryInventoryStore, InventoryService};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type ApiInspectionService = InspectionService<
    InMemoryInspectionStore,
    InMemoryInventoryStore,
    InMemoryChecklistStore,
    InMemoryCatalog,
>;

pub(crate) type ApiReportAggregator = PendingReportAggregator<
    InMemoryInspectionStore,
    InMemoryInventoryStore,
    InMemoryCatalog,
>;

/// The full in-memory service stack behind the HTTP surface.
pub(crate) struct Services {
    pub(crate) catalog: Arc<InMemoryCatalog>,
    pub(crate) inventory: Arc<InventoryService<InMemoryInventoryStore>>,
    pub(crate) checklists: Arc<ChecklistService<InMemoryChecklistStore>>,
    pub(crate) inspections: Arc<ApiInspectionService>,
    pub(crate) report: Arc<ApiReportAggregator>,
}

pub(crate) fn build_services(policy: PendingPolicy) -> Services {
    let catalog = Arc::new(default_catalog());
    let inventory_store = Arc::new(InMemoryInventoryStore::default());
    let checklist_store = Arc::new(InMemoryChecklistStore::default());
    let inspection_store = Arc::new(InMemoryInspectionStore::default());

    Services {
        catalog: catalog.clone(),
        inventory: Arc::new(InventoryService::new(inventory_store.clone())),
        checklists: Arc::new(ChecklistService::new(checklist_store.clone())),
        inspections: Arc::new(InspectionService::new(
            inspection_store.clone(),
            inventory_store.clone(),
            checklist_store,
            catalog.clone(),
        )),
        report: Arc::new(PendingReportAggregator::new(
            inspection_store,
            inventory_store,
            catalog,
            policy,
        )),
    }
}

/// Default reference data, mirroring the catalogs the complex actually
/// runs with.
pub(crate) fn default_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new(
        [
            ConditionState {
                id: ConditionStateId(1),
                name: "Good".to_string(),
                severity_rank: 1,
            },
            ConditionState {
                id: ConditionStateId(2),
                name: "Requires maintenance".to_string(),
                severity_rank: 3,
            },
            ConditionState {
                id: ConditionStateId(3),
                name: "Non-operational".to_string(),
                severity_rank: 4,
            },
        ],
        [
            Category {
                id: CategoryId(1),
                name: "Space".to_string(),
                description: Some("Physical space (kitchen, bathroom, ...)".to_string()),
            },
            Category {
                id: CategoryId(2),
                name: "Supplies".to_string(),
                description: Some("Consumables and implements".to_string()),
            },
            Category {
                id: CategoryId(3),
                name: "Furniture".to_string(),
                description: Some("Furniture and equipment".to_string()),
            },
        ],
    )
}
