use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use dayplan_core::{Event, GridConfig, Store, generate_slots};

use crate::render::Render;

/// Rows per hour in the terminal grid: one row per half-hour slot.
const ROWS_PER_HOUR: f64 = 2.0;
const SLOT_MINUTES: u32 = 30;

pub fn run(store: &Store, day: NaiveDate, from: u32, to: u32) -> Result<()> {
    let grid = GridConfig::new(ROWS_PER_HOUR, from, to)?;
    let slots = generate_slots(SLOT_MINUTES, from, to)?;
    let events = store.events_for_day(day)?;

    println!("{}", day.format("%A, %B %-d").to_string().bold());

    // Place each event on its slot row; events outside the visible window
    // are listed separately rather than clamped to the grid edge.
    let mut rows: Vec<Vec<&Event>> = vec![Vec::new(); slots.len()];
    let mut outside: Vec<&Event> = Vec::new();
    for event in &events {
        match grid.visible_offset(event.start_time.time()) {
            Some(offset) => {
                let row = (offset.floor() as usize).min(rows.len() - 1);
                rows[row].push(event);
            }
            None => outside.push(event),
        }
    }

    for (slot, slot_events) in slots.iter().zip(&rows) {
        let label = format!("{:>8}", slot.label);
        if slot_events.is_empty() {
            println!("  {} │", label.dimmed());
        } else {
            for (i, event) in slot_events.iter().enumerate() {
                let label = if i == 0 {
                    label.clone()
                } else {
                    " ".repeat(8)
                };
                println!("  {} │ {}", label.dimmed(), event.render());
            }
        }
    }

    if !outside.is_empty() {
        println!();
        println!(
            "{}",
            format!("Outside the {}:00-{}:00 window:", from, to).dimmed()
        );
        for event in &outside {
            println!("  {}", event.render());
        }
    }

    Ok(())
}
