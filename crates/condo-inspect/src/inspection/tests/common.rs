use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::catalog::{
    Category, CategoryId, ConditionState, ConditionStateId, InMemoryCatalog,
};
use crate::checklist::{
    Checklist, ChecklistScope, ChecklistService, InMemoryChecklistStore, NewChecklist,
};
use crate::inspection::memory::InMemoryInspectionStore;
use crate::inspection::report::{PendingPolicy, PendingReportAggregator};
use crate::inspection::repository::{
    InspectionStore, InspectionStoreError, NewDetail, NewInspection,
};
use crate::inspection::service::InspectionService;
use crate::inspection::{Inspection, InspectionDetail, InspectionId};
use crate::inventory::{
    InMemoryInventoryStore, InventoryService, NewItem, NewZone, Unit, UnitItem, UnitKey, Zone,
    ZoneItem,
};

pub(super) const GOOD: ConditionStateId = ConditionStateId(1);
pub(super) const NEEDS_MAINTENANCE: ConditionStateId = ConditionStateId(2);
pub(super) const NON_OPERATIONAL: ConditionStateId = ConditionStateId(3);

pub(super) type MemoryEngine = InspectionService<
    InMemoryInspectionStore,
    InMemoryInventoryStore,
    InMemoryChecklistStore,
    InMemoryCatalog,
>;

pub(super) type MemoryAggregator = PendingReportAggregator<
    InMemoryInspectionStore,
    InMemoryInventoryStore,
    InMemoryCatalog,
>;

pub(super) fn seeded_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new(
        [
            ConditionState {
                id: GOOD,
                name: "Good".to_string(),
                severity_rank: 1,
            },
            ConditionState {
                id: NEEDS_MAINTENANCE,
                name: "Requires maintenance".to_string(),
                severity_rank: 3,
            },
            ConditionState {
                id: NON_OPERATIONAL,
                name: "Non-operational".to_string(),
                severity_rank: 4,
            },
        ],
        [Category {
            id: CategoryId(1),
            name: "Space".to_string(),
            description: Some("Physical space (kitchen, bathroom, ...)".to_string()),
        }],
    )
}

/// Memory-backed stores plus service constructors over them.
pub(super) struct Harness {
    pub(super) inspections: Arc<InMemoryInspectionStore>,
    pub(super) inventory: Arc<InMemoryInventoryStore>,
    pub(super) checklists: Arc<InMemoryChecklistStore>,
    pub(super) catalog: Arc<InMemoryCatalog>,
}

impl Harness {
    pub(super) fn new() -> Self {
        Self::with_catalog(seeded_catalog())
    }

    pub(super) fn with_catalog(catalog: InMemoryCatalog) -> Self {
        Self {
            inspections: Arc::new(InMemoryInspectionStore::default()),
            inventory: Arc::new(InMemoryInventoryStore::default()),
            checklists: Arc::new(InMemoryChecklistStore::default()),
            catalog: Arc::new(catalog),
        }
    }

    pub(super) fn engine(&self) -> MemoryEngine {
        InspectionService::new(
            self.inspections.clone(),
            self.inventory.clone(),
            self.checklists.clone(),
            self.catalog.clone(),
        )
    }

    pub(super) fn inventory_service(&self) -> InventoryService<InMemoryInventoryStore> {
        InventoryService::new(self.inventory.clone())
    }

    pub(super) fn checklist_service(&self) -> ChecklistService<InMemoryChecklistStore> {
        ChecklistService::new(self.checklists.clone())
    }

    pub(super) fn aggregator(&self, policy: PendingPolicy) -> MemoryAggregator {
        PendingReportAggregator::new(
            self.inspections.clone(),
            self.inventory.clone(),
            self.catalog.clone(),
            policy,
        )
    }

    pub(super) fn unit_with_item(
        &self,
        tower: &str,
        floor: i32,
        number: &str,
        item_name: &str,
    ) -> (Unit, UnitItem) {
        let service = self.inventory_service();
        let unit = service
            .create_unit(UnitKey {
                tower: tower.to_string(),
                floor,
                number: number.to_string(),
            })
            .expect("unit created");
        let item = service
            .add_unit_item(
                unit.id,
                NewItem {
                    name: item_name.to_string(),
                    ..NewItem::default()
                },
            )
            .expect("unit item created");
        (unit, item)
    }

    pub(super) fn zone_with_item(&self, name: &str, item_name: &str) -> (Zone, ZoneItem) {
        let service = self.inventory_service();
        let zone = service
            .create_zone(NewZone {
                name: name.to_string(),
                location: Some("Floor 15".to_string()),
                kind: Some("Recreation".to_string()),
            })
            .expect("zone created");
        let item = service
            .add_zone_item(
                zone.id,
                NewItem {
                    name: item_name.to_string(),
                    ..NewItem::default()
                },
            )
            .expect("zone item created");
        (zone, item)
    }

    pub(super) fn checklist(&self, scope: ChecklistScope) -> Checklist {
        self.checklist_service()
            .create_checklist(NewChecklist {
                name: "Move-out walkthrough".to_string(),
                version: "1.0".to_string(),
                scope,
            })
            .expect("checklist created")
    }
}

/// Store fake whose every operation fails, for surfacing 500s.
pub(super) struct UnavailableInspectionStore;

impl InspectionStore for UnavailableInspectionStore {
    fn insert_inspection(
        &self,
        _inspection: NewInspection,
    ) -> Result<Inspection, InspectionStoreError> {
        Err(InspectionStoreError::Unavailable("database offline".to_string()))
    }

    fn fetch_inspection(
        &self,
        _id: InspectionId,
    ) -> Result<Option<Inspection>, InspectionStoreError> {
        Err(InspectionStoreError::Unavailable("database offline".to_string()))
    }

    fn delete_inspection(&self, _id: InspectionId) -> Result<bool, InspectionStoreError> {
        Err(InspectionStoreError::Unavailable("database offline".to_string()))
    }

    fn insert_detail(&self, _detail: NewDetail) -> Result<InspectionDetail, InspectionStoreError> {
        Err(InspectionStoreError::Unavailable("database offline".to_string()))
    }

    fn list_details(
        &self,
        _inspection_id: InspectionId,
    ) -> Result<Vec<InspectionDetail>, InspectionStoreError> {
        Err(InspectionStoreError::Unavailable("database offline".to_string()))
    }

    fn list_all_details(&self) -> Result<Vec<InspectionDetail>, InspectionStoreError> {
        Err(InspectionStoreError::Unavailable("database offline".to_string()))
    }

    fn delete_details(&self, _inspection_id: InspectionId) -> Result<usize, InspectionStoreError> {
        Err(InspectionStoreError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
