//! Task API endpoints
//!
//! RESTful API for task CRUD operations. Listing runs the shared query
//! pipeline; creation and edits go through the core validators. Records are
//! returned in their core serialized form.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use taskboard_core::query::{run_query, QueryResult};
use taskboard_core::task::{CreateTaskInput, Task, TaskPatch, TaskRepository};
use taskboard_core::validation::FieldError;
use taskboard_core::Error;

use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldError>,
}

type RouteError = (StatusCode, Json<ErrorResponse>);

fn error_response(status: StatusCode, message: impl Into<String>) -> RouteError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
            details: Vec::new(),
        }),
    )
}

/// Map a core error onto a status code and error body
fn core_error(err: Error) -> RouteError {
    match err {
        Error::InvalidQuery(errors) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Invalid query parameters".to_string(),
                details: errors.into_iter().collect(),
            }),
        ),
        Error::InvalidTask(errors) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Invalid task".to_string(),
                details: errors.into_iter().collect(),
            }),
        ),
        Error::InvalidInput(msg) => error_response(StatusCode::BAD_REQUEST, msg),
        Error::TaskNotFound(id) => {
            error_response(StatusCode::NOT_FOUND, format!("Task {} not found", id))
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/tasks - Filter, sort and summarize tasks
async fn list_tasks(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<QueryResult>, RouteError> {
    let tasks = state.task_store().list().await.map_err(core_error)?;

    let result = run_query(&tasks, &params).map_err(|e| {
        warn!("Rejected task query: {}", e);
        core_error(e)
    })?;

    Ok(Json(result))
}

/// POST /api/tasks - Create a new task
async fn create_task(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Task>), RouteError> {
    let input = CreateTaskInput::parse(&body).map_err(|errors| {
        warn!("Rejected task creation: {}", errors);
        core_error(Error::InvalidTask(errors))
    })?;

    let created = state
        .task_store()
        .create(input.into_task())
        .await
        .map_err(core_error)?;

    info!(task_id = %created.id, "Created task {:?}", created.title);
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/tasks/{id} - Get a single task
async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Task>, RouteError> {
    let task = state.task_store().get(id).await.map_err(core_error)?;

    match task {
        Some(t) => Ok(Json(t)),
        None => Err(core_error(Error::TaskNotFound(id.to_string()))),
    }
}

/// PATCH /api/tasks/{id} - Edit a task
async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Result<Json<Task>, RouteError> {
    let patch = TaskPatch::parse(&body).map_err(|errors| {
        warn!(task_id = %id, "Rejected task update: {}", errors);
        core_error(Error::InvalidTask(errors))
    })?;

    let updated = state
        .task_store()
        .apply_patch(id, patch)
        .await
        .map_err(core_error)?;

    info!(task_id = %id, "Updated task");
    Ok(Json(updated))
}

/// POST /api/tasks/{id}/toggle - Flip a task's completion flag
async fn toggle_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Task>, RouteError> {
    let toggled = state
        .task_store()
        .toggle_completed(id)
        .await
        .map_err(core_error)?;

    info!(task_id = %id, completed = toggled.completed, "Toggled task");
    Ok(Json(toggled))
}

/// DELETE /api/tasks/{id} - Delete a task
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, RouteError> {
    let deleted = state.task_store().delete(id).await.map_err(core_error)?;

    if deleted {
        info!(task_id = %id, "Deleted task");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(core_error(Error::TaskNotFound(id.to_string())))
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route(
            "/api/tasks/{id}",
            get(get_task).patch(update_task).delete(delete_task),
        )
        .route("/api/tasks/{id}/toggle", post(toggle_task))
}
