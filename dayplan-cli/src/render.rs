//! TUI rendering traits for dayplan types.
//!
//! Extension traits that add colored terminal rendering to dayplan-core
//! types using owo_colors. Entity colors are shown as truecolor swatches.

use owo_colors::OwoColorize;

use dayplan_core::{Event, Goal, Task, parse_hex_color};
use dayplan_core::grid::format_time_range;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// A colored block matching the entity's hex color, when the terminal
/// supports truecolor; a plain block otherwise.
pub fn swatch(color: &str) -> String {
    match parse_hex_color(color) {
        Some((r, g, b)) => "■".truecolor(r, g, b).to_string(),
        None => "■".to_string(),
    }
}

impl Render for Event {
    fn render(&self) -> String {
        let time = format_time_range(self.start_time.time(), self.end_time.time());
        format!(
            "{} {} {} {}",
            swatch(&self.color),
            self.title,
            time.dimmed(),
            format!("[{}]", self.category).dimmed()
        )
    }
}

impl Render for Goal {
    fn render(&self) -> String {
        format!("{} {} {}", swatch(&self.color), self.name, self.id.dimmed())
    }
}

impl Render for Task {
    fn render(&self) -> String {
        format!("{} {}", swatch(&self.color), self.name)
    }
}
