use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;

use dayplan_core::{Store, bucket_events_by_day, month_grid};

pub fn run(store: &Store, day: NaiveDate) -> Result<()> {
    let cells = month_grid(day);
    let events = store.list_events()?;

    println!("{}", day.format("%B %Y").to_string().bold());
    println!("{}", "   Sun    Mon    Tue    Wed    Thu    Fri    Sat".dimmed());

    for week in cells.chunks(7) {
        let mut line = String::new();
        for cell in week {
            let count = bucket_events_by_day(&events, cell.date).len();
            let label = if count > 0 {
                format!("{:>4}({})", cell.date.day(), count)
            } else {
                format!("{:>4}   ", cell.date.day())
            };
            if cell.is_current_month {
                line.push_str(&label);
            } else {
                line.push_str(&label.dimmed().to_string());
            }
        }
        println!("{}", line);
    }

    Ok(())
}
