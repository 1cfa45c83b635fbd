use anyhow::Result;
use calnote_core::{CalendarController, Intent, KeyValueStore, PersistOutcome};
use owo_colors::OwoColorize;

use super::parse_date;

/// Select the day, replace its draft and save, the same way the
/// interactive editor does.
pub fn run<S: KeyValueStore>(
    mut controller: CalendarController<S>,
    date: &str,
    text: String,
) -> Result<()> {
    let date = parse_date(date)?;

    controller.dispatch(Intent::SelectDay(date));
    controller.dispatch(Intent::EditDraft(text));

    match controller.dispatch(Intent::Save) {
        Some(PersistOutcome::Written) => {
            println!("{}", format!("  Saved note for {}", date).green())
        }
        Some(PersistOutcome::SkippedEmpty) => {
            println!("{}", "  Nothing to save".dimmed())
        }
        // Storage failures are logged by the note store
        Some(PersistOutcome::Failed) | None => {}
    }

    Ok(())
}
