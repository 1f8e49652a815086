pub mod events;
pub mod goals;
pub mod tasks;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use dayplan_core::PlannerError;

/// Standard success envelope: `{success, count?, data}`
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        ApiResponse {
            success: true,
            count: None,
            data,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    pub fn list(data: Vec<T>) -> Self {
        ApiResponse {
            success: true,
            count: Some(data.len()),
            data,
        }
    }
}

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

/// Convert planner errors to HTTP responses
pub struct AppError(PlannerError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            PlannerError::Validation(_) => StatusCode::BAD_REQUEST,
            PlannerError::EventNotFound(_)
            | PlannerError::GoalNotFound(_)
            | PlannerError::TaskNotFound(_)
            | PlannerError::ReferenceNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(ErrorResponse {
            success: false,
            error: self.0.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<PlannerError> for AppError {
    fn from(err: PlannerError) -> Self {
        AppError(err)
    }
}
