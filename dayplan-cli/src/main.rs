mod commands;
mod render;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use dayplan_core::Store;
use dayplan_core::config::GlobalConfig;

#[derive(Parser)]
#[command(name = "dayplan")]
#[command(about = "Interact with your dayplan events, goals and tasks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the time-grid schedule for one day
    Day {
        /// Day to show (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// First visible hour
        #[arg(long, default_value_t = 7)]
        from: u32,

        /// First hour past the visible window
        #[arg(long, default_value_t = 21)]
        to: u32,
    },
    /// Show the month grid with per-day event counts
    Month {
        /// Any day inside the month (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Create a new event
    New {
        title: String,

        /// Category: exercise, eating, work, relax, family or social
        #[arg(short, long)]
        category: String,

        /// Day the event belongs to (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Start time (HH:MM)
        #[arg(short, long)]
        start: String,

        /// End time (HH:MM)
        #[arg(short, long)]
        end: String,

        /// Override the category's default color (hex)
        #[arg(long)]
        color: Option<String>,
    },
    /// List goals with their tasks
    Goals,
    /// Create a new goal
    NewGoal {
        name: String,

        /// Goal color (hex, e.g. #00CED1)
        color: String,
    },
    /// List tasks, optionally for one goal
    Tasks {
        /// Only tasks belonging to this goal id
        #[arg(short, long)]
        goal: Option<String>,
    },
    /// Create a new task under a goal
    NewTask {
        name: String,

        /// Id of the goal this task belongs to
        goal_id: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GlobalConfig::load()?;
    let store = Store::open(&config.data_dir)?;

    match cli.command {
        Commands::Day { date, from, to } => {
            let day = parse_day(date.as_deref())?;
            commands::day::run(&store, day, from, to)
        }
        Commands::Month { date } => {
            let day = parse_day(date.as_deref())?;
            commands::month::run(&store, day)
        }
        Commands::New {
            title,
            category,
            date,
            start,
            end,
            color,
        } => {
            let day = parse_day(date.as_deref())?;
            commands::new::run(&store, title, category, day, &start, &end, color)
        }
        Commands::Goals => commands::goals::run(&store),
        Commands::NewGoal { name, color } => commands::goals::run_new(&store, name, color),
        Commands::Tasks { goal } => commands::tasks::run(&store, goal.as_deref()),
        Commands::NewTask { name, goal_id } => commands::tasks::run_new(&store, name, goal_id),
    }
}

/// Parse a YYYY-MM-DD argument, defaulting to today.
fn parse_day(arg: Option<&str>) -> Result<NaiveDate> {
    match arg {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| anyhow::anyhow!("Invalid date format '{}'. Expected YYYY-MM-DD", s)),
        None => Ok(Local::now().date_naive()),
    }
}
