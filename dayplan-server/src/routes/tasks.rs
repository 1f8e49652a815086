//! Task endpoints

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::Deserialize;

use dayplan_core::{Task, TaskDraft, TaskPatch};

use crate::routes::{ApiResponse, AppError};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route(
            "/api/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTasksQuery {
    /// Restrict to tasks belonging to one goal
    pub goal_id: Option<String>,
}

/// GET /api/tasks - List tasks, optionally filtered by goal
async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<ListTasksQuery>,
) -> Result<Json<ApiResponse<Vec<Task>>>, AppError> {
    let tasks = match query.goal_id {
        Some(goal_id) => state.store.tasks_for_goal(&goal_id)?,
        None => state.store.list_tasks()?,
    };
    Ok(Json(ApiResponse::list(tasks)))
}

/// GET /api/tasks/:id - Get a single task
async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Task>>, AppError> {
    let task = state.store.get_task(&id)?;
    Ok(Json(ApiResponse::new(task)))
}

/// POST /api/tasks - Create a new task (color inherited from its goal)
async fn create_task(
    State(state): State<AppState>,
    Json(draft): Json<TaskDraft>,
) -> Result<(axum::http::StatusCode, Json<ApiResponse<Task>>), AppError> {
    let task = state.store.create_task(draft)?;
    Ok((axum::http::StatusCode::CREATED, Json(ApiResponse::new(task))))
}

/// PUT /api/tasks/:id - Update a task (color re-resolved on goal change)
async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<TaskPatch>,
) -> Result<Json<ApiResponse<Task>>, AppError> {
    let task = state.store.update_task(&id, patch)?;
    Ok(Json(ApiResponse::new(task)))
}

/// DELETE /api/tasks/:id - Delete a task
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    state.store.delete_task(&id)?;
    Ok(Json(ApiResponse::new(serde_json::json!({}))))
}
