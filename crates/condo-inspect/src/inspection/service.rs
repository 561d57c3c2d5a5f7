use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::catalog::{CatalogError, CatalogRegistry, ConditionStateId};
use crate::checklist::{ChecklistId, ChecklistStore, ChecklistStoreError};
use crate::inventory::{InventoryStore, InventoryStoreError};

use super::domain::{
    AddDetail, CreateInspection, DetailItemRef, Inspection, InspectionDetail, InspectionId,
    InspectionTarget, InvalidReference, InvalidTarget,
};
use super::repository::{InspectionStore, InspectionStoreError, NewDetail, NewInspection};

/// The inspection engine: the single place where cross-entity
/// referential rules are enforced.
///
/// Creates inspections bound to exactly one inventory target and
/// validates every detail record against that target and against the
/// catalog before anything is written.
pub struct InspectionService<S, I, K, C> {
    store: Arc<S>,
    inventory: Arc<I>,
    checklists: Arc<K>,
    catalog: Arc<C>,
}

impl<S, I, K, C> InspectionService<S, I, K, C>
where
    S: InspectionStore + 'static,
    I: InventoryStore + 'static,
    K: ChecklistStore + 'static,
    C: CatalogRegistry + 'static,
{
    pub fn new(store: Arc<S>, inventory: Arc<I>, checklists: Arc<K>, catalog: Arc<C>) -> Self {
        Self {
            store,
            inventory,
            checklists,
            catalog,
        }
    }

    /// Create an inspection against exactly one unit or zone.
    ///
    /// The checklist must resolve; the timestamp defaults to now. The
    /// checklist's scope tag is not cross-checked against the target
    /// kind, matching the recorded behavior of the system this engine
    /// replaces.
    pub fn create_inspection(
        &self,
        input: CreateInspection,
    ) -> Result<Inspection, InspectionError> {
        if self.checklists.fetch_checklist(input.checklist_id)?.is_none() {
            return Err(InspectionError::ChecklistNotFound(input.checklist_id));
        }

        let inspection = self.store.insert_inspection(NewInspection {
            at: input.at.unwrap_or_else(Utc::now),
            inspector: input.inspector,
            checklist_id: input.checklist_id,
            target: input.target,
        })?;
        info!(
            inspection = %inspection.id,
            target = %inspection.target,
            checklist = %inspection.checklist_id,
            "inspection created"
        );
        Ok(inspection)
    }

    /// Record an observation against an inspection.
    ///
    /// The referenced item must resolve and belong to the inspection's
    /// bound unit or zone, and the observed condition must resolve in
    /// the catalog. All checks complete before the single insert.
    pub fn add_detail(
        &self,
        inspection_id: InspectionId,
        input: AddDetail,
    ) -> Result<InspectionDetail, InspectionError> {
        let inspection = self
            .store
            .fetch_inspection(inspection_id)?
            .ok_or(InspectionError::InspectionNotFound(inspection_id))?;

        self.check_ownership(&inspection, input.item)?;

        if self.catalog.condition_state(input.condition_id)?.is_none() {
            return Err(InspectionError::ConditionNotFound(input.condition_id));
        }

        let detail = self.store.insert_detail(NewDetail {
            inspection_id,
            item: input.item,
            condition_id: input.condition_id,
            note: input.note,
            payload: input.payload,
        })?;
        info!(
            inspection = %inspection_id,
            detail = %detail.id,
            item = %detail.item,
            "detail recorded"
        );
        Ok(detail)
    }

    /// The inspection plus all its details in creation order.
    pub fn get_inspection(
        &self,
        id: InspectionId,
    ) -> Result<(Inspection, Vec<InspectionDetail>), InspectionError> {
        let inspection = self
            .store
            .fetch_inspection(id)?
            .ok_or(InspectionError::InspectionNotFound(id))?;
        let details = self.store.list_details(id)?;
        Ok((inspection, details))
    }

    /// Delete an inspection and its details. Details go first; a second
    /// delete of the same id is `InspectionNotFound`.
    pub fn delete_inspection(&self, id: InspectionId) -> Result<(), InspectionError> {
        if self.store.fetch_inspection(id)?.is_none() {
            return Err(InspectionError::InspectionNotFound(id));
        }
        let removed = self.store.delete_details(id)?;
        self.store.delete_inspection(id)?;
        info!(inspection = %id, details = removed, "inspection deleted with its details");
        Ok(())
    }

    /// The item must exist and its owner must be the inspection's bound
    /// unit/zone. A missing item and a foreign item fail the same way:
    /// the reference does not correspond to this inspection.
    fn check_ownership(
        &self,
        inspection: &Inspection,
        item: DetailItemRef,
    ) -> Result<(), InspectionError> {
        let inconsistent = || InspectionError::InconsistentTarget {
            item,
            target: inspection.target,
        };

        match (item, inspection.target) {
            (DetailItemRef::UnitItem(item_id), InspectionTarget::Unit(unit_id)) => {
                match self.inventory.fetch_unit_item(item_id)? {
                    Some(owned) if owned.unit_id == unit_id => Ok(()),
                    _ => Err(inconsistent()),
                }
            }
            (DetailItemRef::ZoneItem(item_id), InspectionTarget::Zone(zone_id)) => {
                match self.inventory.fetch_zone_item(item_id)? {
                    Some(owned) if owned.zone_id == zone_id => Ok(()),
                    _ => Err(inconsistent()),
                }
            }
            _ => Err(inconsistent()),
        }
    }
}

/// Error raised by the inspection engine.
#[derive(Debug, thiserror::Error)]
pub enum InspectionError {
    #[error("checklist {0} not found")]
    ChecklistNotFound(ChecklistId),
    #[error("inspection {0} not found")]
    InspectionNotFound(InspectionId),
    #[error("condition state {0} not found")]
    ConditionNotFound(ConditionStateId),
    #[error("{item} does not belong to the inspection's {target}")]
    InconsistentTarget {
        item: DetailItemRef,
        target: InspectionTarget,
    },
    #[error(transparent)]
    InvalidTarget(#[from] InvalidTarget),
    #[error(transparent)]
    InvalidReference(#[from] InvalidReference),
    #[error(transparent)]
    Store(#[from] InspectionStoreError),
    #[error(transparent)]
    Inventory(#[from] InventoryStoreError),
    #[error(transparent)]
    Checklist(#[from] ChecklistStoreError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
