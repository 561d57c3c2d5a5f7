//! The inventory graph: units, zones, and the items they exclusively own.
//!
//! Units carry a (tower, floor, number) natural key that is unique across
//! the complex; zones have no uniqueness constraint. Deleting an owner
//! cascades over its items at the application level.

pub mod domain;
pub mod memory;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    NewItem, NewZone, Unit, UnitFilter, UnitId, UnitItem, UnitItemId, UnitKey, Zone, ZoneFilter,
    ZoneId, ZoneItem, ZoneItemId,
};
pub use memory::InMemoryInventoryStore;
pub use repository::{InventoryStore, InventoryStoreError};
pub use router::inventory_router;
pub use service::{InventoryError, InventoryService};
