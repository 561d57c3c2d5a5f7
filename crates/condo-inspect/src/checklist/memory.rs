use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use super::domain::{
    Checklist, ChecklistId, ChecklistQuestion, ChecklistQuestionId, NewChecklist, NewQuestion,
};
use super::repository::{ChecklistStore, ChecklistStoreError};

#[derive(Debug, Default)]
struct Tables {
    checklists: Vec<Checklist>,
    questions: Vec<ChecklistQuestion>,
}

/// In-memory reference implementation of [`ChecklistStore`].
#[derive(Default, Clone)]
pub struct InMemoryChecklistStore {
    tables: Arc<Mutex<Tables>>,
    sequence: Arc<AtomicU64>,
}

impl InMemoryChecklistStore {
    fn next_id(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::Relaxed) + 1
    }
}

impl ChecklistStore for InMemoryChecklistStore {
    fn insert_checklist(&self, checklist: NewChecklist) -> Result<Checklist, ChecklistStoreError> {
        let mut tables = self.tables.lock().expect("checklist mutex poisoned");
        let checklist = Checklist {
            id: ChecklistId(self.next_id()),
            name: checklist.name,
            version: checklist.version,
            scope: checklist.scope,
        };
        tables.checklists.push(checklist.clone());
        Ok(checklist)
    }

    fn fetch_checklist(&self, id: ChecklistId) -> Result<Option<Checklist>, ChecklistStoreError> {
        let tables = self.tables.lock().expect("checklist mutex poisoned");
        Ok(tables.checklists.iter().find(|c| c.id == id).cloned())
    }

    fn list_checklists(&self) -> Result<Vec<Checklist>, ChecklistStoreError> {
        let tables = self.tables.lock().expect("checklist mutex poisoned");
        Ok(tables.checklists.clone())
    }

    fn insert_question(
        &self,
        checklist_id: ChecklistId,
        question: NewQuestion,
    ) -> Result<ChecklistQuestion, ChecklistStoreError> {
        let mut tables = self.tables.lock().expect("checklist mutex poisoned");
        let question = ChecklistQuestion {
            id: ChecklistQuestionId(self.next_id()),
            checklist_id,
            text: question.text,
            answer_kind: question.answer_kind,
            options: question.options,
        };
        tables.questions.push(question.clone());
        Ok(question)
    }

    fn list_questions(
        &self,
        checklist_id: ChecklistId,
    ) -> Result<Vec<ChecklistQuestion>, ChecklistStoreError> {
        let tables = self.tables.lock().expect("checklist mutex poisoned");
        Ok(tables
            .questions
            .iter()
            .filter(|question| question.checklist_id == checklist_id)
            .cloned()
            .collect())
    }
}
