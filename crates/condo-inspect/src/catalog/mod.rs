//! Read-only reference data: condition states and item categories.
//!
//! Consulted, never mutated, by the inspection engine and the pending
//! report; both receive the registry as an injected collaborator.

pub mod domain;
pub mod memory;
pub mod registry;
pub mod router;

pub use domain::{Category, CategoryId, ConditionState, ConditionStateId};
pub use memory::InMemoryCatalog;
pub use registry::{CatalogError, CatalogRegistry};
pub use router::catalog_router;
