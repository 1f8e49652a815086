use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use owo_colors::OwoColorize;

use dayplan_core::{EventDraft, Store};

use crate::render::Render;

pub fn run(
    store: &Store,
    title: String,
    category: String,
    day: NaiveDate,
    start: &str,
    end: &str,
    color: Option<String>,
) -> Result<()> {
    let start_time = parse_time(start)?;
    let end_time = parse_time(end)?;

    let draft = EventDraft {
        title,
        category,
        start_time: day.and_time(start_time).and_utc(),
        end_time: day.and_time(end_time).and_utc(),
        date: day,
        color,
    };

    let event = store.create_event(draft)?;
    println!("{} Created {}", "✓".green(), event.render());
    Ok(())
}

/// Parse an HH:MM time argument.
fn parse_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|_| anyhow::anyhow!("Invalid time '{}'. Expected HH:MM", s))
}
