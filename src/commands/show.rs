use anyhow::Result;
use calnote_core::{CalendarController, KeyValueStore};
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run<S: KeyValueStore>(controller: &CalendarController<S>) -> Result<()> {
    let view = controller.view();
    println!("{}", view.render());

    let count = view.days_with_notes.len();
    if count > 0 {
        println!();
        let label = format!("{} day{} with notes", count, if count == 1 { "" } else { "s" });
        println!("{}", label.dimmed());
    }

    Ok(())
}
