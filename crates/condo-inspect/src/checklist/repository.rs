use super::domain::{Checklist, ChecklistId, ChecklistQuestion, NewChecklist, NewQuestion};

/// Storage collaborator for checklist templates and their questions.
pub trait ChecklistStore: Send + Sync {
    fn insert_checklist(&self, checklist: NewChecklist) -> Result<Checklist, ChecklistStoreError>;
    fn fetch_checklist(&self, id: ChecklistId) -> Result<Option<Checklist>, ChecklistStoreError>;
    fn list_checklists(&self) -> Result<Vec<Checklist>, ChecklistStoreError>;

    fn insert_question(
        &self,
        checklist_id: ChecklistId,
        question: NewQuestion,
    ) -> Result<ChecklistQuestion, ChecklistStoreError>;
    /// Questions for a checklist, in creation order.
    fn list_questions(
        &self,
        checklist_id: ChecklistId,
    ) -> Result<Vec<ChecklistQuestion>, ChecklistStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ChecklistStoreError {
    #[error("checklist store unavailable: {0}")]
    Unavailable(String),
}
