use std::sync::Arc;

use tracing::info;

use super::domain::{
    Checklist, ChecklistId, ChecklistQuestion, NewChecklist, NewQuestion,
};
use super::repository::{ChecklistStore, ChecklistStoreError};

/// Operations over checklist templates.
pub struct ChecklistService<S> {
    store: Arc<S>,
}

impl<S> ChecklistService<S>
where
    S: ChecklistStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn create_checklist(&self, checklist: NewChecklist) -> Result<Checklist, ChecklistError> {
        let checklist = self.store.insert_checklist(checklist)?;
        info!(checklist = %checklist.id, name = %checklist.name, "checklist created");
        Ok(checklist)
    }

    /// Append a question to an existing checklist.
    pub fn add_question(
        &self,
        checklist_id: ChecklistId,
        question: NewQuestion,
    ) -> Result<ChecklistQuestion, ChecklistError> {
        if self.store.fetch_checklist(checklist_id)?.is_none() {
            return Err(ChecklistError::ChecklistNotFound(checklist_id));
        }
        Ok(self.store.insert_question(checklist_id, question)?)
    }

    /// A checklist plus its questions in creation order.
    pub fn get_checklist(
        &self,
        id: ChecklistId,
    ) -> Result<(Checklist, Vec<ChecklistQuestion>), ChecklistError> {
        let checklist = self
            .store
            .fetch_checklist(id)?
            .ok_or(ChecklistError::ChecklistNotFound(id))?;
        let questions = self.store.list_questions(id)?;
        Ok((checklist, questions))
    }

    pub fn list_checklists(&self) -> Result<Vec<Checklist>, ChecklistError> {
        Ok(self.store.list_checklists()?)
    }
}

/// Error raised by the checklist service.
#[derive(Debug, thiserror::Error)]
pub enum ChecklistError {
    #[error("checklist {0} not found")]
    ChecklistNotFound(ChecklistId),
    #[error(transparent)]
    Store(#[from] ChecklistStoreError),
}
