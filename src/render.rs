//! Terminal rendering for calnote-core types.
//!
//! This module provides an extension trait that draws the calendar view
//! with owo_colors.

use calnote_core::{CalendarDate, CalendarView, Selection};
use owo_colors::OwoColorize;

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Width of one day cell, including its trailing space.
const CELL_WIDTH: usize = 4;

/// Lay the month out in weeks; `None` is an empty cell before day 1 or after the last day.
pub fn weeks(view: &CalendarView) -> Vec<[Option<CalendarDate>; 7]> {
    let cells: Vec<Option<CalendarDate>> = std::iter::repeat_n(None, view.leading_blanks)
        .chain(view.days.iter().copied().map(Some))
        .collect();

    cells
        .chunks(7)
        .map(|chunk| {
            let mut week = [None; 7];
            week[..chunk.len()].copy_from_slice(chunk);
            week
        })
        .collect()
}

fn render_cell(view: &CalendarView, day: Option<CalendarDate>) -> String {
    let Some(day) = day else {
        return " ".repeat(CELL_WIDTH);
    };

    let number = format!("{:>3}", day.day());
    let selected = view.selection.as_ref().is_some_and(|s| s.date == day);

    let styled = if selected {
        number.reversed().to_string()
    } else if view.days_with_notes.contains(&day) {
        number.yellow().bold().to_string()
    } else {
        number
    };

    format!("{} ", styled)
}

impl Render for CalendarView {
    fn render(&self) -> String {
        let width = CELL_WIDTH * 7;
        let mut lines = vec![format!("{:^width$}", self.label).bold().to_string()];

        let header: String = self
            .week_start
            .headers()
            .iter()
            .map(|h| format!("{:>3} ", h))
            .collect();
        lines.push(header.dimmed().to_string());

        for week in weeks(self) {
            let row: String = week.iter().map(|day| render_cell(self, *day)).collect();
            lines.push(row.trim_end().to_string());
        }

        lines.join("\n")
    }
}

impl Render for Selection {
    fn render(&self) -> String {
        let title = format!("Note for {}", self.date.naive().format("%B %d, %Y"));
        let body = if self.draft.is_empty() {
            "(empty)".dimmed().to_string()
        } else {
            self.draft.clone()
        };

        format!("{}\n{}", title.bold(), body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calnote_core::month_grid::{WeekStart, build_month_grid, leading_blank_cells};
    use std::collections::BTreeSet;

    fn view_for(year: i32, month: u32, week_start: WeekStart) -> CalendarView {
        let reference = CalendarDate::from_ymd(year, month, 1).unwrap();
        CalendarView {
            label: String::new(),
            days: build_month_grid(reference),
            leading_blanks: leading_blank_cells(reference, week_start),
            week_start,
            days_with_notes: BTreeSet::new(),
            selection: None,
        }
    }

    #[test]
    fn weeks_pad_before_first_and_after_last_day() {
        // February 2024 starts on a Thursday and has 29 days
        let weeks = weeks(&view_for(2024, 2, WeekStart::Sunday));

        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0][..4], [None, None, None, None]);
        assert_eq!(weeks[0][4].map(|d| d.day()), Some(1));
        assert_eq!(weeks[4][4].map(|d| d.day()), Some(29));
        assert_eq!(weeks[4][5], None);
    }

    #[test]
    fn weeks_without_leading_blanks() {
        // January 2024 starts on a Monday
        let weeks = weeks(&view_for(2024, 1, WeekStart::Monday));

        assert_eq!(weeks[0][0].map(|d| d.day()), Some(1));
        let count = weeks.iter().flatten().filter(|d| d.is_some()).count();
        assert_eq!(count, 31);
    }

    #[test]
    fn empty_selection_renders_placeholder() {
        let selection = Selection {
            date: CalendarDate::from_ymd(2024, 1, 15).unwrap(),
            draft: String::new(),
        };

        let out = selection.render();
        assert!(out.contains("January 15, 2024"));
        assert!(out.contains("(empty)"));
    }
}
