use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{CategoryId, ConditionStateId};

/// Identifier for a privately owned unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(pub u64);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for an item owned by a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitItemId(pub u64);

impl fmt::Display for UnitItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a shared common zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ZoneId(pub u64);

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for an item owned by a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ZoneItemId(pub u64);

impl fmt::Display for ZoneItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Natural key identifying a unit within the complex.
///
/// Unique across all units; the storage collaborator rejects a second
/// insert carrying the same triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitKey {
    pub tower: String,
    pub floor: i32,
    pub number: String,
}

impl fmt::Display for UnitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.tower, self.floor, self.number)
    }
}

/// A privately owned dwelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    #[serde(flatten)]
    pub key: UnitKey,
}

/// An inspectable fixture or object owned by exactly one unit.
///
/// Catalog references are optional and deliberately unchecked at this
/// layer; they are only validated once a detail record observes the item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitItem {
    pub id: UnitItemId,
    pub unit_id: UnitId,
    pub name: String,
    pub category_id: Option<CategoryId>,
    pub condition_id: Option<ConditionStateId>,
    pub note: Option<String>,
}

/// A shared common-use space (terrace, game room, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub id: ZoneId,
    pub name: String,
    pub location: Option<String>,
    pub kind: Option<String>,
}

/// An inspectable fixture or object owned by exactly one zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneItem {
    pub id: ZoneItemId,
    pub zone_id: ZoneId,
    pub name: String,
    pub category_id: Option<CategoryId>,
    pub condition_id: Option<ConditionStateId>,
    pub note: Option<String>,
}

/// Fields for an item prior to storage assigning an identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub condition_id: Option<ConditionStateId>,
    #[serde(default)]
    pub note: Option<String>,
}

/// Fields for a zone prior to storage assigning an identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewZone {
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
}

/// Equality filters for unit listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UnitFilter {
    pub tower: Option<String>,
    pub floor: Option<i32>,
}

impl UnitFilter {
    pub fn matches(&self, unit: &Unit) -> bool {
        if let Some(tower) = &self.tower {
            if &unit.key.tower != tower {
                return false;
            }
        }
        if let Some(floor) = self.floor {
            if unit.key.floor != floor {
                return false;
            }
        }
        true
    }
}

/// Equality filters for zone listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ZoneFilter {
    pub kind: Option<String>,
}

impl ZoneFilter {
    pub fn matches(&self, zone: &Zone) -> bool {
        match &self.kind {
            Some(kind) => zone.kind.as_deref() == Some(kind.as_str()),
            None => true,
        }
    }
}
