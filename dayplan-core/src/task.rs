//! Task entity and goal color inheritance.

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, PlannerResult};
use crate::goal::Goal;

/// Lookup capability for resolving a task's goal.
///
/// Supplied by the persistence layer, so color resolution stays a pure
/// function over its inputs.
pub trait GoalLookup {
    fn lookup(&self, goal_id: &str) -> Option<Goal>;
}

/// An unscheduled to-do item belonging to exactly one goal.
///
/// `color` is a denormalized copy of the goal's color so the calendar can
/// render tasks without joining to goals. Only [`resolve_task_color`] may
/// set it, synchronously within the same write.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub name: String,
    pub goal_id: String,
    pub color: String,
}

/// Input for creating a task.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub name: String,
    pub goal_id: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// Partial update for a task. Missing fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    pub name: Option<String>,
    pub goal_id: Option<String>,
    pub color: Option<String>,
}

/// Resolve the color a task must carry after a write.
///
/// An explicit `requested` color is kept only when the goal reference is
/// unchanged. Whenever `goal_id` is newly set or changed, the referenced
/// goal's color wins, so the denormalized copy cannot go stale across a
/// re-parenting. A lookup miss rejects the write with `ReferenceNotFound`
/// rather than persisting a stale or empty color.
pub fn resolve_task_color<L: GoalLookup>(
    requested: Option<&str>,
    goal_id: &str,
    previous_goal_id: Option<&str>,
    goals: &L,
) -> PlannerResult<String> {
    let goal_unchanged = previous_goal_id == Some(goal_id);
    if let Some(color) = requested {
        if goal_unchanged {
            return Ok(color.to_string());
        }
    }

    match goals.lookup(goal_id) {
        Some(goal) => Ok(goal.color),
        None => Err(PlannerError::ReferenceNotFound(goal_id.to_string())),
    }
}
