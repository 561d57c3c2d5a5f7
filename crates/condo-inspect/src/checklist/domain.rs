use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for a checklist template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChecklistId(pub u64);

impl fmt::Display for ChecklistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a question within a checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChecklistQuestionId(pub u64);

impl fmt::Display for ChecklistQuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a checklist is meant for unit or zone inspections.
///
/// Fixed at creation. Nothing cross-checks this tag against the target
/// of an inspection using the checklist; the tag is advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChecklistScope {
    Unit,
    Zone,
}

/// How a question expects its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKind {
    YesNo,
    MultipleChoice,
    Numeric,
    FreeText,
}

/// A reusable inspection template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    pub id: ChecklistId,
    pub name: String,
    pub version: String,
    pub scope: ChecklistScope,
}

/// One question inside a checklist.
///
/// `options` is a comma-delimited list, meaningful only when
/// `answer_kind` is [`AnswerKind::MultipleChoice`]. Its presence and
/// non-emptiness are the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistQuestion {
    pub id: ChecklistQuestionId,
    pub checklist_id: ChecklistId,
    pub text: String,
    pub answer_kind: AnswerKind,
    pub options: Option<String>,
}

impl ChecklistQuestion {
    /// Split the option list, trimming whitespace around each choice.
    pub fn option_list(&self) -> Vec<&str> {
        self.options
            .as_deref()
            .map(|raw| raw.split(',').map(str::trim).filter(|s| !s.is_empty()).collect())
            .unwrap_or_default()
    }
}

/// Fields for a checklist prior to storage assigning an identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewChecklist {
    pub name: String,
    pub version: String,
    pub scope: ChecklistScope,
}

/// Fields for a question prior to storage assigning an identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub text: String,
    pub answer_kind: AnswerKind,
    #[serde(default)]
    pub options: Option<String>,
}
