use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use super::domain::{Inspection, InspectionDetail, InspectionDetailId, InspectionId};
use super::repository::{InspectionStore, InspectionStoreError, NewDetail, NewInspection};

#[derive(Debug, Default)]
struct Tables {
    inspections: Vec<Inspection>,
    details: Vec<InspectionDetail>,
}

/// In-memory reference implementation of [`InspectionStore`].
#[derive(Default, Clone)]
pub struct InMemoryInspectionStore {
    tables: Arc<Mutex<Tables>>,
    sequence: Arc<AtomicU64>,
}

impl InMemoryInspectionStore {
    fn next_id(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::Relaxed) + 1
    }
}

impl InspectionStore for InMemoryInspectionStore {
    fn insert_inspection(
        &self,
        inspection: NewInspection,
    ) -> Result<Inspection, InspectionStoreError> {
        let mut tables = self.tables.lock().expect("inspection mutex poisoned");
        let inspection = Inspection {
            id: InspectionId(self.next_id()),
            at: inspection.at,
            inspector: inspection.inspector,
            checklist_id: inspection.checklist_id,
            target: inspection.target,
        };
        tables.inspections.push(inspection.clone());
        Ok(inspection)
    }

    fn fetch_inspection(
        &self,
        id: InspectionId,
    ) -> Result<Option<Inspection>, InspectionStoreError> {
        let tables = self.tables.lock().expect("inspection mutex poisoned");
        Ok(tables.inspections.iter().find(|i| i.id == id).cloned())
    }

    fn delete_inspection(&self, id: InspectionId) -> Result<bool, InspectionStoreError> {
        let mut tables = self.tables.lock().expect("inspection mutex poisoned");
        let before = tables.inspections.len();
        tables.inspections.retain(|inspection| inspection.id != id);
        Ok(tables.inspections.len() < before)
    }

    fn insert_detail(&self, detail: NewDetail) -> Result<InspectionDetail, InspectionStoreError> {
        let mut tables = self.tables.lock().expect("inspection mutex poisoned");
        let detail = InspectionDetail {
            id: InspectionDetailId(self.next_id()),
            inspection_id: detail.inspection_id,
            item: detail.item,
            condition_id: detail.condition_id,
            note: detail.note,
            payload: detail.payload,
        };
        tables.details.push(detail.clone());
        Ok(detail)
    }

    fn list_details(
        &self,
        inspection_id: InspectionId,
    ) -> Result<Vec<InspectionDetail>, InspectionStoreError> {
        let tables = self.tables.lock().expect("inspection mutex poisoned");
        Ok(tables
            .details
            .iter()
            .filter(|detail| detail.inspection_id == inspection_id)
            .cloned()
            .collect())
    }

    fn list_all_details(&self) -> Result<Vec<InspectionDetail>, InspectionStoreError> {
        let tables = self.tables.lock().expect("inspection mutex poisoned");
        Ok(tables.details.clone())
    }

    fn delete_details(&self, inspection_id: InspectionId) -> Result<usize, InspectionStoreError> {
        let mut tables = self.tables.lock().expect("inspection mutex poisoned");
        let before = tables.details.len();
        tables
            .details
            .retain(|detail| detail.inspection_id != inspection_id);
        Ok(before - tables.details.len())
    }
}
