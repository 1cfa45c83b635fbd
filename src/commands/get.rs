use anyhow::Result;
use calnote_core::{CalendarController, KeyValueStore};

use super::parse_date;

pub fn run<S: KeyValueStore>(controller: &CalendarController<S>, date: &str) -> Result<()> {
    let date = parse_date(date)?;
    let note = controller.notes().get_note(date);

    if !note.is_empty() {
        println!("{}", note);
    }

    Ok(())
}
