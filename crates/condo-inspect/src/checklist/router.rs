use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::domain::{Checklist, ChecklistId, ChecklistQuestion, NewChecklist, NewQuestion};
use super::repository::ChecklistStore;
use super::service::{ChecklistError, ChecklistService};

/// HTTP surface over checklist templates.
pub fn checklist_router<S>(service: Arc<ChecklistService<S>>) -> Router
where
    S: ChecklistStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/checklists",
            post(create_checklist_handler::<S>).get(list_checklists_handler::<S>),
        )
        .route("/api/v1/checklists/:checklist_id", get(get_checklist_handler::<S>))
        .route(
            "/api/v1/checklists/:checklist_id/questions",
            post(add_question_handler::<S>),
        )
        .with_state(service)
}

/// A checklist and its ordered questions, as served by the read endpoint.
#[derive(Debug, Serialize)]
pub struct ChecklistView {
    #[serde(flatten)]
    pub checklist: Checklist,
    pub questions: Vec<ChecklistQuestion>,
}

pub(crate) async fn create_checklist_handler<S>(
    State(service): State<Arc<ChecklistService<S>>>,
    axum::Json(checklist): axum::Json<NewChecklist>,
) -> Response
where
    S: ChecklistStore + 'static,
{
    match service.create_checklist(checklist) {
        Ok(checklist) => (StatusCode::CREATED, axum::Json(checklist)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn list_checklists_handler<S>(
    State(service): State<Arc<ChecklistService<S>>>,
) -> Response
where
    S: ChecklistStore + 'static,
{
    match service.list_checklists() {
        Ok(checklists) => (StatusCode::OK, axum::Json(checklists)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn get_checklist_handler<S>(
    State(service): State<Arc<ChecklistService<S>>>,
    Path(checklist_id): Path<u64>,
) -> Response
where
    S: ChecklistStore + 'static,
{
    match service.get_checklist(ChecklistId(checklist_id)) {
        Ok((checklist, questions)) => {
            let view = ChecklistView {
                checklist,
                questions,
            };
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn add_question_handler<S>(
    State(service): State<Arc<ChecklistService<S>>>,
    Path(checklist_id): Path<u64>,
    axum::Json(question): axum::Json<NewQuestion>,
) -> Response
where
    S: ChecklistStore + 'static,
{
    match service.add_question(ChecklistId(checklist_id), question) {
        Ok(question) => (StatusCode::CREATED, axum::Json(question)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: ChecklistError) -> Response {
    let status = match &err {
        ChecklistError::ChecklistNotFound(_) => StatusCode::NOT_FOUND,
        ChecklistError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": err.to_string() });
    (status, axum::Json(payload)).into_response()
}
