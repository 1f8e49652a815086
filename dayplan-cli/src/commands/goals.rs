use anyhow::Result;
use owo_colors::OwoColorize;

use dayplan_core::{GoalDraft, Store};

use crate::render::Render;

pub fn run(store: &Store) -> Result<()> {
    let goals = store.list_goals()?;
    if goals.is_empty() {
        println!("{}", "No goals yet".dimmed());
        return Ok(());
    }

    for goal in &goals {
        println!("{}", goal.render());
        for task in store.tasks_for_goal(&goal.id)? {
            println!("   {}", task.render());
        }
    }
    Ok(())
}

pub fn run_new(store: &Store, name: String, color: String) -> Result<()> {
    let goal = store.create_goal(GoalDraft { name, color })?;
    println!("{} Created goal {}", "✓".green(), goal.render());
    Ok(())
}
