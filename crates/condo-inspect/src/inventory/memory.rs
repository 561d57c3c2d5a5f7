use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use super::domain::{
    NewItem, NewZone, Unit, UnitFilter, UnitId, UnitItem, UnitItemId, UnitKey, Zone, ZoneFilter,
    ZoneId, ZoneItem, ZoneItemId,
};
use super::repository::{InventoryStore, InventoryStoreError};

#[derive(Debug, Default)]
struct Tables {
    units: Vec<Unit>,
    unit_items: Vec<UnitItem>,
    zones: Vec<Zone>,
    zone_items: Vec<ZoneItem>,
}

/// In-memory reference implementation of [`InventoryStore`].
///
/// One mutex guards the full table set, so check-then-act sequences and
/// cascades observe a consistent snapshot. Natural-key uniqueness for
/// units is enforced inside the critical section.
#[derive(Default, Clone)]
pub struct InMemoryInventoryStore {
    tables: Arc<Mutex<Tables>>,
    sequence: Arc<AtomicU64>,
}

impl InMemoryInventoryStore {
    fn next_id(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::Relaxed) + 1
    }
}

impl InventoryStore for InMemoryInventoryStore {
    fn insert_unit(&self, key: UnitKey) -> Result<Unit, InventoryStoreError> {
        let mut tables = self.tables.lock().expect("inventory mutex poisoned");
        if tables.units.iter().any(|unit| unit.key == key) {
            return Err(InventoryStoreError::Conflict);
        }
        let unit = Unit {
            id: UnitId(self.next_id()),
            key,
        };
        tables.units.push(unit.clone());
        Ok(unit)
    }

    fn fetch_unit(&self, id: UnitId) -> Result<Option<Unit>, InventoryStoreError> {
        let tables = self.tables.lock().expect("inventory mutex poisoned");
        Ok(tables.units.iter().find(|unit| unit.id == id).cloned())
    }

    fn list_units(&self, filter: &UnitFilter) -> Result<Vec<Unit>, InventoryStoreError> {
        let tables = self.tables.lock().expect("inventory mutex poisoned");
        Ok(tables
            .units
            .iter()
            .filter(|unit| filter.matches(unit))
            .cloned()
            .collect())
    }

    fn delete_unit(&self, id: UnitId) -> Result<bool, InventoryStoreError> {
        let mut tables = self.tables.lock().expect("inventory mutex poisoned");
        let before = tables.units.len();
        tables.units.retain(|unit| unit.id != id);
        Ok(tables.units.len() < before)
    }

    fn insert_unit_item(
        &self,
        unit_id: UnitId,
        item: NewItem,
    ) -> Result<UnitItem, InventoryStoreError> {
        let mut tables = self.tables.lock().expect("inventory mutex poisoned");
        let item = UnitItem {
            id: UnitItemId(self.next_id()),
            unit_id,
            name: item.name,
            category_id: item.category_id,
            condition_id: item.condition_id,
            note: item.note,
        };
        tables.unit_items.push(item.clone());
        Ok(item)
    }

    fn fetch_unit_item(&self, id: UnitItemId) -> Result<Option<UnitItem>, InventoryStoreError> {
        let tables = self.tables.lock().expect("inventory mutex poisoned");
        Ok(tables.unit_items.iter().find(|item| item.id == id).cloned())
    }

    fn list_unit_items(&self, unit_id: UnitId) -> Result<Vec<UnitItem>, InventoryStoreError> {
        let tables = self.tables.lock().expect("inventory mutex poisoned");
        Ok(tables
            .unit_items
            .iter()
            .filter(|item| item.unit_id == unit_id)
            .cloned()
            .collect())
    }

    fn delete_unit_items(&self, unit_id: UnitId) -> Result<usize, InventoryStoreError> {
        let mut tables = self.tables.lock().expect("inventory mutex poisoned");
        let before = tables.unit_items.len();
        tables.unit_items.retain(|item| item.unit_id != unit_id);
        Ok(before - tables.unit_items.len())
    }

    fn insert_zone(&self, zone: NewZone) -> Result<Zone, InventoryStoreError> {
        let mut tables = self.tables.lock().expect("inventory mutex poisoned");
        let zone = Zone {
            id: ZoneId(self.next_id()),
            name: zone.name,
            location: zone.location,
            kind: zone.kind,
        };
        tables.zones.push(zone.clone());
        Ok(zone)
    }

    fn fetch_zone(&self, id: ZoneId) -> Result<Option<Zone>, InventoryStoreError> {
        let tables = self.tables.lock().expect("inventory mutex poisoned");
        Ok(tables.zones.iter().find(|zone| zone.id == id).cloned())
    }

    fn list_zones(&self, filter: &ZoneFilter) -> Result<Vec<Zone>, InventoryStoreError> {
        let tables = self.tables.lock().expect("inventory mutex poisoned");
        Ok(tables
            .zones
            .iter()
            .filter(|zone| filter.matches(zone))
            .cloned()
            .collect())
    }

    fn delete_zone(&self, id: ZoneId) -> Result<bool, InventoryStoreError> {
        let mut tables = self.tables.lock().expect("inventory mutex poisoned");
        let before = tables.zones.len();
        tables.zones.retain(|zone| zone.id != id);
        Ok(tables.zones.len() < before)
    }

    fn insert_zone_item(
        &self,
        zone_id: ZoneId,
        item: NewItem,
    ) -> Result<ZoneItem, InventoryStoreError> {
        let mut tables = self.tables.lock().expect("inventory mutex poisoned");
        let item = ZoneItem {
            id: ZoneItemId(self.next_id()),
            zone_id,
            name: item.name,
            category_id: item.category_id,
            condition_id: item.condition_id,
            note: item.note,
        };
        tables.zone_items.push(item.clone());
        Ok(item)
    }

    fn fetch_zone_item(&self, id: ZoneItemId) -> Result<Option<ZoneItem>, InventoryStoreError> {
        let tables = self.tables.lock().expect("inventory mutex poisoned");
        Ok(tables.zone_items.iter().find(|item| item.id == id).cloned())
    }

    fn list_zone_items(&self, zone_id: ZoneId) -> Result<Vec<ZoneItem>, InventoryStoreError> {
        let tables = self.tables.lock().expect("inventory mutex poisoned");
        Ok(tables
            .zone_items
            .iter()
            .filter(|item| item.zone_id == zone_id)
            .cloned()
            .collect())
    }

    fn delete_zone_items(&self, zone_id: ZoneId) -> Result<usize, InventoryStoreError> {
        let mut tables = self.tables.lock().expect("inventory mutex poisoned");
        let before = tables.zone_items.len();
        tables.zone_items.retain(|item| item.zone_id != zone_id);
        Ok(before - tables.zone_items.len())
    }
}
