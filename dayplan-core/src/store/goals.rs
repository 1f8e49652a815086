//! Goal persistence. The store enforces name uniqueness and implements the
//! goal lookup capability used by task color resolution.

use super::Store;
use crate::error::{PlannerError, PlannerResult};
use crate::goal::{Goal, GoalDraft, GoalPatch};
use crate::task::GoalLookup;

const KIND: &str = "goals";

impl Store {
    /// All goals, sorted by name.
    pub fn list_goals(&self) -> PlannerResult<Vec<Goal>> {
        let mut goals: Vec<Goal> = self.list_docs(KIND)?;
        goals.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(goals)
    }

    pub fn get_goal(&self, id: &str) -> PlannerResult<Goal> {
        self.read_doc(KIND, id)?
            .ok_or_else(|| PlannerError::GoalNotFound(id.to_string()))
    }

    pub fn create_goal(&self, draft: GoalDraft) -> PlannerResult<Goal> {
        let goal = Goal::from_draft(draft)?;
        self.ensure_unique_name(&goal.name, None)?;
        self.write_doc(KIND, &goal.id, &goal)?;
        Ok(goal)
    }

    pub fn update_goal(&self, id: &str, patch: GoalPatch) -> PlannerResult<Goal> {
        let mut goal = self.get_goal(id)?;
        goal.apply(patch)?;
        self.ensure_unique_name(&goal.name, Some(id))?;
        self.write_doc(KIND, id, &goal)?;
        Ok(goal)
    }

    /// Delete a goal. Does not cascade: the goal's tasks keep their
    /// dangling reference, and readers tolerate the miss.
    pub fn delete_goal(&self, id: &str) -> PlannerResult<()> {
        if !self.delete_doc(KIND, id)? {
            return Err(PlannerError::GoalNotFound(id.to_string()));
        }
        Ok(())
    }

    fn ensure_unique_name(&self, name: &str, exclude_id: Option<&str>) -> PlannerResult<()> {
        let clash = self
            .list_goals()?
            .into_iter()
            .any(|goal| goal.name == name && exclude_id != Some(goal.id.as_str()));
        if clash {
            return Err(PlannerError::Validation(format!(
                "A goal named '{}' already exists",
                name
            )));
        }
        Ok(())
    }
}

impl GoalLookup for Store {
    fn lookup(&self, goal_id: &str) -> Option<Goal> {
        self.read_doc(KIND, goal_id).ok().flatten()
    }
}
