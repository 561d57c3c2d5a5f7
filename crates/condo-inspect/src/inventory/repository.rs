use super::domain::{
    NewItem, NewZone, Unit, UnitFilter, UnitId, UnitItem, UnitItemId, UnitKey, Zone, ZoneFilter,
    ZoneId, ZoneItem, ZoneItemId,
};

/// Storage collaborator for the inventory graph.
///
/// Plain per-entity CRUD plus filtered listings; identities are assigned
/// by the store on insert and listings come back in persistence order.
/// Cascades are NOT a storage concern: the service deletes children
/// explicitly before the owner.
pub trait InventoryStore: Send + Sync {
    /// Insert a unit, enforcing natural-key uniqueness.
    fn insert_unit(&self, key: UnitKey) -> Result<Unit, InventoryStoreError>;
    fn fetch_unit(&self, id: UnitId) -> Result<Option<Unit>, InventoryStoreError>;
    fn list_units(&self, filter: &UnitFilter) -> Result<Vec<Unit>, InventoryStoreError>;
    /// Returns whether a row was removed.
    fn delete_unit(&self, id: UnitId) -> Result<bool, InventoryStoreError>;

    fn insert_unit_item(&self, unit_id: UnitId, item: NewItem)
        -> Result<UnitItem, InventoryStoreError>;
    fn fetch_unit_item(&self, id: UnitItemId) -> Result<Option<UnitItem>, InventoryStoreError>;
    fn list_unit_items(&self, unit_id: UnitId) -> Result<Vec<UnitItem>, InventoryStoreError>;
    /// Remove every item owned by the unit, returning how many went away.
    fn delete_unit_items(&self, unit_id: UnitId) -> Result<usize, InventoryStoreError>;

    fn insert_zone(&self, zone: NewZone) -> Result<Zone, InventoryStoreError>;
    fn fetch_zone(&self, id: ZoneId) -> Result<Option<Zone>, InventoryStoreError>;
    fn list_zones(&self, filter: &ZoneFilter) -> Result<Vec<Zone>, InventoryStoreError>;
    fn delete_zone(&self, id: ZoneId) -> Result<bool, InventoryStoreError>;

    fn insert_zone_item(&self, zone_id: ZoneId, item: NewItem)
        -> Result<ZoneItem, InventoryStoreError>;
    fn fetch_zone_item(&self, id: ZoneItemId) -> Result<Option<ZoneItem>, InventoryStoreError>;
    fn list_zone_items(&self, zone_id: ZoneId) -> Result<Vec<ZoneItem>, InventoryStoreError>;
    fn delete_zone_items(&self, zone_id: ZoneId) -> Result<usize, InventoryStoreError>;
}

/// Error enumeration for inventory storage failures.
#[derive(Debug, thiserror::Error)]
pub enum InventoryStoreError {
    #[error("unit natural key already exists")]
    Conflict,
    #[error("inventory store unavailable: {0}")]
    Unavailable(String),
}
