use anyhow::Result;
use calnote_core::{CalendarController, CalendarDate, Intent, KeyValueStore, PersistOutcome};
use dialoguer::Input;
use owo_colors::OwoColorize;

use crate::render::Render;

const HELP: &str = "\
  p, prev     previous month
  n, next     next month
  <day>       select a day of the shown month (e.g. 15)
  e, edit     write the selected day's note
  s, save     save the note
  q, quit     leave";

/// One line of input to the interactive editor.
#[derive(Debug, PartialEq, Eq)]
enum Action {
    Apply(Intent),
    PromptDraft,
    Help,
    Quit,
}

/// Turn a line of input into an action. Day numbers are resolved against
/// the month currently shown.
fn parse_action(input: &str, active_month: CalendarDate) -> Result<Action, String> {
    let input = input.trim().to_lowercase();

    let action = match input.as_str() {
        "p" | "prev" => Action::Apply(Intent::PrevMonth),
        "n" | "next" => Action::Apply(Intent::NextMonth),
        "e" | "edit" => Action::PromptDraft,
        "s" | "save" => Action::Apply(Intent::Save),
        "q" | "quit" | "exit" => Action::Quit,
        "" | "?" | "h" | "help" => Action::Help,
        other => {
            let day: u32 = other
                .parse()
                .map_err(|_| format!("Unknown command \"{}\" (? for help)", other))?;
            let date = CalendarDate::from_ymd(active_month.year(), active_month.month(), day)
                .map_err(|_| format!("There is no day {} in this month", day))?;
            Action::Apply(Intent::SelectDay(date))
        }
    };

    Ok(action)
}

fn draw<S: KeyValueStore>(controller: &CalendarController<S>) {
    let view = controller.view();
    println!();
    println!("{}", view.render());

    if let Some(selection) = &view.selection {
        println!();
        println!("{}", selection.render());
    }
}

pub fn run<S: KeyValueStore>(mut controller: CalendarController<S>) -> Result<()> {
    println!("{}", HELP.dimmed());
    draw(&controller);

    loop {
        let input: String = Input::new()
            .with_prompt("  calnote")
            .allow_empty(true)
            .interact_text()?;

        let action = match parse_action(&input, controller.active_month()) {
            Ok(action) => action,
            Err(e) => {
                eprintln!("  {}", e.red());
                continue;
            }
        };

        match action {
            Action::Quit => break,
            Action::Help => {
                println!("{}", HELP.dimmed());
                continue;
            }
            Action::PromptDraft => {
                let Some(selection) = controller.selection() else {
                    eprintln!("  {}", "Select a day first".red());
                    continue;
                };

                let draft: String = Input::new()
                    .with_prompt(format!("  Note for {}", selection.date))
                    .with_initial_text(selection.draft.clone())
                    .allow_empty(true)
                    .interact_text()?;

                controller.dispatch(Intent::EditDraft(draft));
            }
            Action::Apply(Intent::Save) if !controller.is_editing() => {
                eprintln!("  {}", "Nothing selected".red());
                continue;
            }
            Action::Apply(intent) => {
                if controller.dispatch(intent) == Some(PersistOutcome::Written) {
                    println!("{}", "  Saved".green());
                }
            }
        }

        draw(&controller);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan_2024() -> CalendarDate {
        CalendarDate::from_ymd(2024, 1, 20).unwrap()
    }

    #[test]
    fn navigation_commands() {
        assert_eq!(parse_action("p", jan_2024()), Ok(Action::Apply(Intent::PrevMonth)));
        assert_eq!(parse_action(" Next ", jan_2024()), Ok(Action::Apply(Intent::NextMonth)));
        assert_eq!(parse_action("q", jan_2024()), Ok(Action::Quit));
        assert_eq!(parse_action("", jan_2024()), Ok(Action::Help));
    }

    #[test]
    fn day_number_selects_in_shown_month() {
        assert_eq!(
            parse_action("15", jan_2024()),
            Ok(Action::Apply(Intent::SelectDay(
                CalendarDate::from_ymd(2024, 1, 15).unwrap()
            )))
        );
    }

    #[test]
    fn day_outside_month_is_rejected() {
        let feb = CalendarDate::from_ymd(2023, 2, 1).unwrap();
        assert!(parse_action("29", feb).is_err());
        assert!(parse_action("0", feb).is_err());
        assert!(parse_action("tomorrow", feb).is_err());
    }
}
