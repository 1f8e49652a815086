//! Task persistence. Color resolution against the owning goal happens
//! inside every write, never as a background correction.

use uuid::Uuid;

use super::Store;
use crate::error::{PlannerError, PlannerResult};
use crate::task::{Task, TaskDraft, TaskPatch, resolve_task_color};

const KIND: &str = "tasks";

impl Store {
    /// All tasks, sorted by name.
    pub fn list_tasks(&self) -> PlannerResult<Vec<Task>> {
        let mut tasks: Vec<Task> = self.list_docs(KIND)?;
        tasks.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tasks)
    }

    /// Tasks belonging to `goal_id`, sorted by name.
    pub fn tasks_for_goal(&self, goal_id: &str) -> PlannerResult<Vec<Task>> {
        Ok(self
            .list_tasks()?
            .into_iter()
            .filter(|task| task.goal_id == goal_id)
            .collect())
    }

    pub fn get_task(&self, id: &str) -> PlannerResult<Task> {
        self.read_doc(KIND, id)?
            .ok_or_else(|| PlannerError::TaskNotFound(id.to_string()))
    }

    pub fn create_task(&self, draft: TaskDraft) -> PlannerResult<Task> {
        let name = draft.name.trim().to_string();
        if name.is_empty() {
            return Err(PlannerError::Validation("Task name is required".to_string()));
        }

        let color = resolve_task_color(draft.color.as_deref(), &draft.goal_id, None, self)?;
        let task = Task {
            id: Uuid::new_v4().to_string(),
            name,
            goal_id: draft.goal_id,
            color,
        };
        self.write_doc(KIND, &task.id, &task)?;
        Ok(task)
    }

    pub fn update_task(&self, id: &str, patch: TaskPatch) -> PlannerResult<Task> {
        let mut task = self.get_task(id)?;
        let previous_goal_id = task.goal_id.clone();

        if let Some(name) = patch.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(PlannerError::Validation("Task name is required".to_string()));
            }
            task.name = name;
        }
        if let Some(goal_id) = patch.goal_id {
            task.goal_id = goal_id;
        }

        let requested = patch.color.unwrap_or_else(|| task.color.clone());
        task.color = resolve_task_color(
            Some(&requested),
            &task.goal_id,
            Some(&previous_goal_id),
            self,
        )?;

        self.write_doc(KIND, id, &task)?;
        Ok(task)
    }

    pub fn delete_task(&self, id: &str) -> PlannerResult<()> {
        if !self.delete_doc(KIND, id)? {
            return Err(PlannerError::TaskNotFound(id.to_string()));
        }
        Ok(())
    }
}
