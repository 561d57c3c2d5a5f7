use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::catalog::ConditionStateId;
use crate::checklist::ChecklistId;

use super::domain::{
    DetailItemRef, Inspection, InspectionDetail, InspectionId, InspectionTarget,
};

/// Fully validated inspection row, ready for storage to assign identity.
#[derive(Debug, Clone)]
pub struct NewInspection {
    pub at: DateTime<Utc>,
    pub inspector: String,
    pub checklist_id: ChecklistId,
    pub target: InspectionTarget,
}

/// Fully validated detail row.
#[derive(Debug, Clone)]
pub struct NewDetail {
    pub inspection_id: InspectionId,
    pub item: DetailItemRef,
    pub condition_id: ConditionStateId,
    pub note: Option<String>,
    pub payload: Option<Value>,
}

/// Storage collaborator for inspections and their detail records.
///
/// The engine performs every validation before calling an insert; the
/// store only persists and retrieves. Detail listings come back in
/// creation order.
pub trait InspectionStore: Send + Sync {
    fn insert_inspection(&self, inspection: NewInspection)
        -> Result<Inspection, InspectionStoreError>;
    fn fetch_inspection(&self, id: InspectionId)
        -> Result<Option<Inspection>, InspectionStoreError>;
    /// Returns whether a row was removed.
    fn delete_inspection(&self, id: InspectionId) -> Result<bool, InspectionStoreError>;

    fn insert_detail(&self, detail: NewDetail) -> Result<InspectionDetail, InspectionStoreError>;
    fn list_details(
        &self,
        inspection_id: InspectionId,
    ) -> Result<Vec<InspectionDetail>, InspectionStoreError>;
    /// Every detail across all inspections, for report aggregation.
    fn list_all_details(&self) -> Result<Vec<InspectionDetail>, InspectionStoreError>;
    /// Remove every detail owned by the inspection.
    fn delete_details(&self, inspection_id: InspectionId) -> Result<usize, InspectionStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum InspectionStoreError {
    #[error("inspection store unavailable: {0}")]
    Unavailable(String),
}
