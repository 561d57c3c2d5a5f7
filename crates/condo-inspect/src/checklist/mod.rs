//! Checklist templates: named, versioned question sets scoped to unit or
//! zone inspections.

pub mod domain;
pub mod memory;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AnswerKind, Checklist, ChecklistId, ChecklistQuestion, ChecklistQuestionId, ChecklistScope,
    NewChecklist, NewQuestion,
};
pub use memory::InMemoryChecklistStore;
pub use repository::{ChecklistStore, ChecklistStoreError};
pub use router::checklist_router;
pub use service::{ChecklistError, ChecklistService};
