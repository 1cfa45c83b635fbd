mod commands;
mod render;

use anyhow::Result;
use calnote_core::config::CalnoteConfig;
use calnote_core::{CalendarController, CalendarDate};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "calnote")]
#[command(about = "A month calendar with a note for any day")]
struct Cli {
    /// Month to open (YYYY-MM), defaults to the current month
    #[arg(short, long, global = true)]
    month: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the month grid, highlighting days that have a note
    Show,
    /// Print the note for a day
    Get {
        /// Day (YYYY-MM-DD)
        date: String,
    },
    /// Replace the note for a day
    Set {
        /// Day (YYYY-MM-DD)
        date: String,

        /// Note text
        text: String,
    },
    /// List the month's notes
    List,
    /// Browse months and edit notes interactively
    Edit,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = CalnoteConfig::load()?;

    let start = match cli.month.as_deref() {
        Some(month) => commands::parse_month(month)?,
        None => CalendarDate::today(),
    };

    let controller =
        CalendarController::new(config.note_store(), start).with_week_start(config.week_start);

    match cli.command.unwrap_or(Commands::Show) {
        Commands::Show => commands::show::run(&controller),
        Commands::Get { date } => commands::get::run(&controller, &date),
        Commands::Set { date, text } => commands::set::run(controller, &date, text),
        Commands::List => commands::list::run(&controller),
        Commands::Edit => commands::edit::run(controller),
    }
}
