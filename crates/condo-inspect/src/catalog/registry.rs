use super::domain::{Category, CategoryId, ConditionState, ConditionStateId};

/// Read-only lookup over the condition-state and category catalogs.
///
/// Handed to the inspection engine and the pending-report aggregator as
/// an injected collaborator; neither ever writes through it.
pub trait CatalogRegistry: Send + Sync {
    fn condition_state(&self, id: ConditionStateId)
        -> Result<Option<ConditionState>, CatalogError>;

    /// All condition states, ascending by severity rank.
    fn condition_states(&self) -> Result<Vec<ConditionState>, CatalogError>;

    fn category(&self, id: CategoryId) -> Result<Option<Category>, CatalogError>;

    /// All categories, ordered by name.
    fn categories(&self) -> Result<Vec<Category>, CatalogError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}
