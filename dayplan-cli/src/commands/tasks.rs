use anyhow::Result;
use owo_colors::OwoColorize;

use dayplan_core::{Store, TaskDraft};

use crate::render::Render;

pub fn run(store: &Store, goal_id: Option<&str>) -> Result<()> {
    let tasks = match goal_id {
        Some(goal_id) => store.tasks_for_goal(goal_id)?,
        None => store.list_tasks()?,
    };

    if tasks.is_empty() {
        println!("{}", "No tasks found".dimmed());
        return Ok(());
    }
    for task in &tasks {
        println!("{}", task.render());
    }
    Ok(())
}

pub fn run_new(store: &Store, name: String, goal_id: String) -> Result<()> {
    let task = store.create_task(TaskDraft {
        name,
        goal_id,
        color: None,
    })?;
    println!("{} Created task {}", "✓".green(), task.render());
    Ok(())
}
