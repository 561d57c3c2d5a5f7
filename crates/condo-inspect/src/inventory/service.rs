use std::sync::Arc;

use tracing::info;

use super::domain::{
    NewItem, NewZone, Unit, UnitFilter, UnitId, UnitItem, UnitKey, Zone, ZoneFilter, ZoneId,
    ZoneItem,
};
use super::repository::{InventoryStore, InventoryStoreError};

/// Operations over units, zones, and the items they own.
pub struct InventoryService<S> {
    store: Arc<S>,
}

impl<S> InventoryService<S>
where
    S: InventoryStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Create a unit, rejecting a second (tower, floor, number) triple.
    pub fn create_unit(&self, key: UnitKey) -> Result<Unit, InventoryError> {
        match self.store.insert_unit(key.clone()) {
            Ok(unit) => {
                info!(unit = %unit.id, key = %unit.key, "unit created");
                Ok(unit)
            }
            Err(InventoryStoreError::Conflict) => Err(InventoryError::DuplicateUnit(key)),
            Err(err) => Err(err.into()),
        }
    }

    pub fn get_unit(&self, id: UnitId) -> Result<Unit, InventoryError> {
        self.store
            .fetch_unit(id)?
            .ok_or(InventoryError::UnitNotFound(id))
    }

    pub fn list_units(&self, filter: &UnitFilter) -> Result<Vec<Unit>, InventoryError> {
        Ok(self.store.list_units(filter)?)
    }

    /// Attach an item to an existing unit.
    ///
    /// Category and condition references are accepted as-is here; they
    /// are validated only when an inspection detail later observes the
    /// item.
    pub fn add_unit_item(&self, unit_id: UnitId, item: NewItem) -> Result<UnitItem, InventoryError> {
        if self.store.fetch_unit(unit_id)?.is_none() {
            return Err(InventoryError::UnitNotFound(unit_id));
        }
        Ok(self.store.insert_unit_item(unit_id, item)?)
    }

    pub fn unit_items(&self, unit_id: UnitId) -> Result<Vec<UnitItem>, InventoryError> {
        if self.store.fetch_unit(unit_id)?.is_none() {
            return Err(InventoryError::UnitNotFound(unit_id));
        }
        Ok(self.store.list_unit_items(unit_id)?)
    }

    /// Delete a unit and everything it owns. Items are removed first,
    /// then the owner. Deleting an absent unit is `UnitNotFound`.
    pub fn delete_unit(&self, id: UnitId) -> Result<(), InventoryError> {
        if self.store.fetch_unit(id)?.is_none() {
            return Err(InventoryError::UnitNotFound(id));
        }
        let removed = self.store.delete_unit_items(id)?;
        self.store.delete_unit(id)?;
        info!(unit = %id, items = removed, "unit deleted with its items");
        Ok(())
    }

    pub fn create_zone(&self, zone: NewZone) -> Result<Zone, InventoryError> {
        let zone = self.store.insert_zone(zone)?;
        info!(zone = %zone.id, name = %zone.name, "zone created");
        Ok(zone)
    }

    pub fn get_zone(&self, id: ZoneId) -> Result<Zone, InventoryError> {
        self.store
            .fetch_zone(id)?
            .ok_or(InventoryError::ZoneNotFound(id))
    }

    pub fn list_zones(&self, filter: &ZoneFilter) -> Result<Vec<Zone>, InventoryError> {
        Ok(self.store.list_zones(filter)?)
    }

    pub fn add_zone_item(&self, zone_id: ZoneId, item: NewItem) -> Result<ZoneItem, InventoryError> {
        if self.store.fetch_zone(zone_id)?.is_none() {
            return Err(InventoryError::ZoneNotFound(zone_id));
        }
        Ok(self.store.insert_zone_item(zone_id, item)?)
    }

    pub fn zone_items(&self, zone_id: ZoneId) -> Result<Vec<ZoneItem>, InventoryError> {
        if self.store.fetch_zone(zone_id)?.is_none() {
            return Err(InventoryError::ZoneNotFound(zone_id));
        }
        Ok(self.store.list_zone_items(zone_id)?)
    }

    /// Delete a zone and its items, mirroring [`Self::delete_unit`].
    pub fn delete_zone(&self, id: ZoneId) -> Result<(), InventoryError> {
        if self.store.fetch_zone(id)?.is_none() {
            return Err(InventoryError::ZoneNotFound(id));
        }
        let removed = self.store.delete_zone_items(id)?;
        self.store.delete_zone(id)?;
        info!(zone = %id, items = removed, "zone deleted with its items");
        Ok(())
    }
}

/// Error raised by the inventory service.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("unit {0} already exists")]
    DuplicateUnit(UnitKey),
    #[error("unit {0} not found")]
    UnitNotFound(UnitId),
    #[error("zone {0} not found")]
    ZoneNotFound(ZoneId),
    #[error(transparent)]
    Store(#[from] InventoryStoreError),
}
