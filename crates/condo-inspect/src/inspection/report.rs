use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use crate::catalog::{CatalogError, CatalogRegistry, ConditionState, ConditionStateId};
use crate::inventory::{InventoryStore, InventoryStoreError};

use super::domain::{DetailItemRef, InspectionDetailId, InspectionId, InspectionTarget};
use super::repository::{InspectionStore, InspectionStoreError};

/// How the aggregator decides that a condition state means "all clear".
///
/// `ByName` reproduces the behavior of the system this engine replaces:
/// the distinguished display name is compared literally, so renaming
/// that state silently changes the report. `BySeverityRank` keys off
/// the rank field instead (rank 1 is clear). The default is name-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingPolicy {
    ByName(String),
    BySeverityRank,
}

impl PendingPolicy {
    /// Severity rank that marks the single "no action needed" state.
    pub const CLEAR_RANK: i32 = 1;

    pub fn by_name(name: impl Into<String>) -> Self {
        Self::ByName(name.into())
    }

    fn is_clear(&self, state: &ConditionState) -> bool {
        match self {
            Self::ByName(name) => state.name == *name,
            Self::BySeverityRank => state.severity_rank == Self::CLEAR_RANK,
        }
    }
}

impl Default for PendingPolicy {
    fn default() -> Self {
        Self::ByName("Good".to_string())
    }
}

/// A detail classified as requiring remediation, enriched with its
/// item and owner context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingEntry {
    pub inspection_id: InspectionId,
    pub detail_id: InspectionDetailId,
    pub owner: InspectionTarget,
    pub item: DetailItemRef,
    pub item_name: String,
    pub condition_id: ConditionStateId,
    pub note: Option<String>,
}

/// The pending-remediation report.
///
/// `orphaned` lists details whose item reference no longer resolves;
/// they are excluded from `entries` but reported rather than silently
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingReport {
    pub total: usize,
    pub entries: Vec<PendingEntry>,
    pub orphaned: Vec<InspectionDetailId>,
}

/// Scans detail records, joins them back to their owning item and
/// unit/zone, and classifies them against the pending policy. Pure
/// read; writes nothing anywhere.
pub struct PendingReportAggregator<S, I, C> {
    store: Arc<S>,
    inventory: Arc<I>,
    catalog: Arc<C>,
    policy: PendingPolicy,
}

impl<S, I, C> PendingReportAggregator<S, I, C>
where
    S: InspectionStore + 'static,
    I: InventoryStore + 'static,
    C: CatalogRegistry + 'static,
{
    pub fn new(store: Arc<S>, inventory: Arc<I>, catalog: Arc<C>, policy: PendingPolicy) -> Self {
        Self {
            store,
            inventory,
            catalog,
            policy,
        }
    }

    /// Every detail whose observed condition is not "all clear",
    /// ordered by (inspection id, detail id) for reproducible output.
    pub fn list_pending(&self) -> Result<PendingReport, ReportError> {
        let pending_states: HashSet<ConditionStateId> = self
            .catalog
            .condition_states()?
            .into_iter()
            .filter(|state| !self.policy.is_clear(state))
            .map(|state| state.id)
            .collect();

        let mut entries = Vec::new();
        let mut orphaned = Vec::new();
        for detail in self.store.list_all_details()? {
            if !pending_states.contains(&detail.condition_id) {
                continue;
            }
            match self.resolve_item(detail.item)? {
                Some((owner, item_name)) => entries.push(PendingEntry {
                    inspection_id: detail.inspection_id,
                    detail_id: detail.id,
                    owner,
                    item: detail.item,
                    item_name,
                    condition_id: detail.condition_id,
                    note: detail.note,
                }),
                None => {
                    warn!(
                        detail = %detail.id,
                        item = %detail.item,
                        "pending detail references an item that no longer resolves"
                    );
                    orphaned.push(detail.id);
                }
            }
        }

        entries.sort_by_key(|entry| (entry.inspection_id, entry.detail_id));
        Ok(PendingReport {
            total: entries.len(),
            entries,
            orphaned,
        })
    }

    fn resolve_item(
        &self,
        item: DetailItemRef,
    ) -> Result<Option<(InspectionTarget, String)>, ReportError> {
        Ok(match item {
            DetailItemRef::UnitItem(id) => self
                .inventory
                .fetch_unit_item(id)?
                .map(|item| (InspectionTarget::Unit(item.unit_id), item.name)),
            DetailItemRef::ZoneItem(id) => self
                .inventory
                .fetch_zone_item(id)?
                .map(|item| (InspectionTarget::Zone(item.zone_id), item.name)),
        })
    }
}

/// Error raised by the pending-report aggregator.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error(transparent)]
    Store(#[from] InspectionStoreError),
    #[error(transparent)]
    Inventory(#[from] InventoryStoreError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
