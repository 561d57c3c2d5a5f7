use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::ConditionStateId;
use crate::checklist::ChecklistId;
use crate::inventory::{UnitId, UnitItemId, ZoneId, ZoneItemId};

/// Identifier for an inspection visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InspectionId(pub u64);

impl fmt::Display for InspectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a detail record within an inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InspectionDetailId(pub u64);

impl fmt::Display for InspectionDetailId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What an inspection is bound to: exactly one unit or one zone.
///
/// The exclusive-or lives in the type; calling layers that receive two
/// nullable ids rebuild the sum with [`InspectionTarget::from_columns`]
/// and surface [`InvalidTarget`] when the payload breaks the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InspectionTarget {
    Unit(UnitId),
    Zone(ZoneId),
}

impl InspectionTarget {
    /// Rebuild the sum from two nullable storage columns.
    pub fn from_columns(
        unit_id: Option<UnitId>,
        zone_id: Option<ZoneId>,
    ) -> Result<Self, InvalidTarget> {
        match (unit_id, zone_id) {
            (Some(unit), None) => Ok(Self::Unit(unit)),
            (None, Some(zone)) => Ok(Self::Zone(zone)),
            _ => Err(InvalidTarget),
        }
    }

    pub fn unit_id(&self) -> Option<UnitId> {
        match self {
            Self::Unit(id) => Some(*id),
            Self::Zone(_) => None,
        }
    }

    pub fn zone_id(&self) -> Option<ZoneId> {
        match self {
            Self::Unit(_) => None,
            Self::Zone(id) => Some(*id),
        }
    }
}

impl fmt::Display for InspectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit(id) => write!(f, "unit {id}"),
            Self::Zone(id) => write!(f, "zone {id}"),
        }
    }
}

/// What a detail record observes: exactly one unit item or one zone item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailItemRef {
    UnitItem(UnitItemId),
    ZoneItem(ZoneItemId),
}

impl DetailItemRef {
    /// Rebuild the sum from two nullable storage columns.
    pub fn from_columns(
        unit_item_id: Option<UnitItemId>,
        zone_item_id: Option<ZoneItemId>,
    ) -> Result<Self, InvalidReference> {
        match (unit_item_id, zone_item_id) {
            (Some(item), None) => Ok(Self::UnitItem(item)),
            (None, Some(item)) => Ok(Self::ZoneItem(item)),
            _ => Err(InvalidReference),
        }
    }

    pub fn unit_item_id(&self) -> Option<UnitItemId> {
        match self {
            Self::UnitItem(id) => Some(*id),
            Self::ZoneItem(_) => None,
        }
    }

    pub fn zone_item_id(&self) -> Option<ZoneItemId> {
        match self {
            Self::UnitItem(_) => None,
            Self::ZoneItem(id) => Some(*id),
        }
    }
}

impl fmt::Display for DetailItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnitItem(id) => write!(f, "unit item {id}"),
            Self::ZoneItem(id) => write!(f, "zone item {id}"),
        }
    }
}

/// An inspection must reference exactly one of unit or zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("inspection must reference exactly one of unit or zone")]
pub struct InvalidTarget;

/// A detail must reference exactly one of unit item or zone item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("detail must reference exactly one of unit item or zone item")]
pub struct InvalidReference;

/// One inspection visit against one unit or zone, using one checklist.
///
/// Append-only once created: details may be added at any later point,
/// and there is no update, close, or finalize transition. Remediation is
/// a new inspection, never a mutation of history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inspection {
    pub id: InspectionId,
    pub at: DateTime<Utc>,
    pub inspector: String,
    pub checklist_id: ChecklistId,
    pub target: InspectionTarget,
}

/// One recorded observation inside an inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionDetail {
    pub id: InspectionDetailId,
    pub inspection_id: InspectionId,
    pub item: DetailItemRef,
    pub condition_id: ConditionStateId,
    pub note: Option<String>,
    /// Structured payload for complex answers (e.g. a multiple-choice
    /// selection or a measured value).
    pub payload: Option<Value>,
}

/// Inputs for creating an inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateInspection {
    pub inspector: String,
    pub checklist_id: ChecklistId,
    pub target: InspectionTarget,
    /// Defaults to the current time when absent.
    pub at: Option<DateTime<Utc>>,
}

/// Inputs for recording a detail against an inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct AddDetail {
    pub item: DetailItemRef,
    pub condition_id: ConditionStateId,
    pub note: Option<String>,
    pub payload: Option<Value>,
}
