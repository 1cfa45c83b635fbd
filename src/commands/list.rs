use anyhow::Result;
use calnote_core::month_grid::month_label;
use calnote_core::{CalendarController, KeyValueStore};
use owo_colors::OwoColorize;

pub fn run<S: KeyValueStore>(controller: &CalendarController<S>) -> Result<()> {
    let month = controller.active_month();
    let notes = controller.notes().notes_in_month(month);

    if notes.is_empty() {
        println!("{}", format!("No notes in {}", month_label(month)).dimmed());
        return Ok(());
    }

    println!("{}", month_label(month).bold());
    for (date, note) in notes {
        let day = date.naive().format("%a %b %-d").to_string();
        println!("  {} {}", format!("{:<11}", day).dimmed(), note);
    }

    Ok(())
}
