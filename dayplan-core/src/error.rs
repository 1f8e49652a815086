//! Error types for the dayplan ecosystem.

use thiserror::Error;

/// Errors that can occur in planner operations.
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Goal not found: {0}")]
    GoalNotFound(String),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    /// A task write referenced a goal that does not exist.
    #[error("Referenced goal not found: {0}")]
    ReferenceNotFound(String),

    /// A time fell outside the grid's visible window in strict mode.
    #[error("Time {time} is outside the visible grid range {start_hour}:00-{end_hour}:00")]
    OutOfRange {
        time: String,
        start_hour: u32,
        end_hour: u32,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for planner operations.
pub type PlannerResult<T> = Result<T, PlannerError>;
