use std::collections::BTreeMap;

use super::domain::{Category, CategoryId, ConditionState, ConditionStateId};
use super::registry::{CatalogError, CatalogRegistry};

/// Immutable in-memory catalog.
///
/// Reference data is fixed at construction; later ids win when a seed
/// repeats an id.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalog {
    states: BTreeMap<ConditionStateId, ConditionState>,
    categories: BTreeMap<CategoryId, Category>,
}

impl InMemoryCatalog {
    pub fn new(
        states: impl IntoIterator<Item = ConditionState>,
        categories: impl IntoIterator<Item = Category>,
    ) -> Self {
        Self {
            states: states.into_iter().map(|s| (s.id, s)).collect(),
            categories: categories.into_iter().map(|c| (c.id, c)).collect(),
        }
    }
}

impl CatalogRegistry for InMemoryCatalog {
    fn condition_state(
        &self,
        id: ConditionStateId,
    ) -> Result<Option<ConditionState>, CatalogError> {
        Ok(self.states.get(&id).cloned())
    }

    fn condition_states(&self) -> Result<Vec<ConditionState>, CatalogError> {
        let mut states: Vec<ConditionState> = self.states.values().cloned().collect();
        states.sort_by_key(|state| state.severity_rank);
        Ok(states)
    }

    fn category(&self, id: CategoryId) -> Result<Option<Category>, CatalogError> {
        Ok(self.categories.get(&id).cloned())
    }

    fn categories(&self) -> Result<Vec<Category>, CatalogError> {
        let mut categories: Vec<Category> = self.categories.values().cloned().collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }
}
