//! Event endpoints

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use chrono::NaiveDate;
use serde::Deserialize;

use dayplan_core::{Event, EventDraft, EventPatch};

use crate::routes::{ApiResponse, AppError};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/events", get(list_events).post(create_event))
        .route(
            "/api/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
}

#[derive(Deserialize)]
pub struct ListEventsQuery {
    /// Restrict to one calendar day (YYYY-MM-DD)
    pub date: Option<NaiveDate>,
}

/// GET /api/events - List events, optionally for a single day
async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListEventsQuery>,
) -> Result<Json<ApiResponse<Vec<Event>>>, AppError> {
    let events = match query.date {
        Some(day) => state.store.events_for_day(day)?,
        None => state.store.list_events()?,
    };
    Ok(Json(ApiResponse::list(events)))
}

/// GET /api/events/:id - Get a single event
async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Event>>, AppError> {
    let event = state.store.get_event(&id)?;
    Ok(Json(ApiResponse::new(event)))
}

/// POST /api/events - Create a new event
async fn create_event(
    State(state): State<AppState>,
    Json(draft): Json<EventDraft>,
) -> Result<(axum::http::StatusCode, Json<ApiResponse<Event>>), AppError> {
    let event = state.store.create_event(draft)?;
    Ok((axum::http::StatusCode::CREATED, Json(ApiResponse::new(event))))
}

/// PUT /api/events/:id - Update an event
async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<EventPatch>,
) -> Result<Json<ApiResponse<Event>>, AppError> {
    let event = state.store.update_event(&id, patch)?;
    Ok(Json(ApiResponse::new(event)))
}

/// DELETE /api/events/:id - Delete an event
async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    state.store.delete_event(&id)?;
    Ok(Json(ApiResponse::new(serde_json::json!({}))))
}
