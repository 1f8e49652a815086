//! Goal endpoints

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use serde::Serialize;

use dayplan_core::{Goal, GoalDraft, GoalPatch, Task};

use crate::routes::{ApiResponse, AppError};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/goals", get(list_goals).post(create_goal))
        .route(
            "/api/goals/{id}",
            get(get_goal).put(update_goal).delete(delete_goal),
        )
}

/// A goal together with the tasks it owns
#[derive(Serialize)]
pub struct GoalWithTasks {
    #[serde(flatten)]
    pub goal: Goal,
    pub tasks: Vec<Task>,
}

/// GET /api/goals - List all goals
async fn list_goals(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Goal>>>, AppError> {
    let goals = state.store.list_goals()?;
    Ok(Json(ApiResponse::list(goals)))
}

/// GET /api/goals/:id - Get a single goal with its tasks
async fn get_goal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<GoalWithTasks>>, AppError> {
    let goal = state.store.get_goal(&id)?;
    let tasks = state.store.tasks_for_goal(&goal.id)?;
    Ok(Json(ApiResponse::new(GoalWithTasks { goal, tasks })))
}

/// POST /api/goals - Create a new goal
async fn create_goal(
    State(state): State<AppState>,
    Json(draft): Json<GoalDraft>,
) -> Result<(axum::http::StatusCode, Json<ApiResponse<Goal>>), AppError> {
    let goal = state.store.create_goal(draft)?;
    Ok((axum::http::StatusCode::CREATED, Json(ApiResponse::new(goal))))
}

/// PUT /api/goals/:id - Update a goal
async fn update_goal(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<GoalPatch>,
) -> Result<Json<ApiResponse<Goal>>, AppError> {
    let goal = state.store.update_goal(&id, patch)?;
    Ok(Json(ApiResponse::new(goal)))
}

/// DELETE /api/goals/:id - Delete a goal (tasks are not cascaded)
async fn delete_goal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    state.store.delete_goal(&id)?;
    Ok(Json(ApiResponse::new(serde_json::json!({}))))
}
