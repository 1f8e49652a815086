//! Core types and calendar logic for the dayplan ecosystem.
//!
//! This crate provides everything shared by dayplan-server and dayplan-cli:
//! - `Event`, `Goal` and `Task` entities with their write-side validation
//! - `grid` for time-grid geometry (time <-> pixel offset, slot generation)
//! - `calendar` for week/month grid arithmetic
//! - `store` for the on-disk JSON document store

pub mod calendar;
pub mod category;
pub mod config;
pub mod error;
pub mod event;
pub mod goal;
pub mod grid;
pub mod store;
pub mod task;

// Re-export the main types at crate root for convenience
pub use calendar::{MonthCell, month_grid, week_days, week_start};
pub use category::{Category, FALLBACK_COLOR, default_color_for_category};
pub use error::{PlannerError, PlannerResult};
pub use event::{Event, EventDraft, EventPatch, bucket_events_by_day};
pub use goal::{Goal, GoalDraft, GoalPatch, parse_hex_color, validate_hex_color};
pub use grid::{GridConfig, MIN_EVENT_HEIGHT, TimeSlot, generate_slots};
pub use store::Store;
pub use task::{GoalLookup, Task, TaskDraft, TaskPatch, resolve_task_color};
