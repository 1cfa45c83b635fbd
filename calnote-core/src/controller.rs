//! The calendar's state: which month is shown and which day is being edited.

use std::collections::BTreeSet;

use crate::date::CalendarDate;
use crate::month_grid::{
    WeekStart, add_months, build_month_grid, leading_blank_cells, month_label, sub_months,
};
use crate::note_store::{NoteMap, NoteStore, PersistOutcome};
use crate::storage::KeyValueStore;

/// The selected day and its in-progress note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub date: CalendarDate,
    pub draft: String,
}

/// A user action emitted by whatever draws the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    PrevMonth,
    NextMonth,
    SelectDay(CalendarDate),
    EditDraft(String),
    Save,
}

/// Everything needed to draw the calendar once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarView {
    pub label: String,
    pub days: Vec<CalendarDate>,
    pub leading_blanks: usize,
    pub week_start: WeekStart,
    pub days_with_notes: BTreeSet<CalendarDate>,
    pub selection: Option<Selection>,
}

pub struct CalendarController<S: KeyValueStore> {
    store: NoteStore<S>,
    notes: NoteMap,
    active_month: CalendarDate,
    selection: Option<Selection>,
    week_start: WeekStart,
}

impl<S: KeyValueStore> CalendarController<S> {
    /// Load the stored notes and show the month containing `today`.
    pub fn new(store: NoteStore<S>, today: CalendarDate) -> Self {
        let notes = store.load();

        CalendarController {
            store,
            notes,
            active_month: today,
            selection: None,
            week_start: WeekStart::default(),
        }
    }

    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    pub fn active_month(&self) -> CalendarDate {
        self.active_month
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn notes(&self) -> &NoteMap {
        &self.notes
    }

    pub fn is_editing(&self) -> bool {
        self.selection.is_some()
    }

    pub fn grid(&self) -> Vec<CalendarDate> {
        build_month_grid(self.active_month)
    }

    /// Show the previous month. The selection, if any, is kept.
    pub fn navigate_prev(&mut self) {
        match sub_months(self.active_month, 1) {
            Some(month) => self.active_month = month,
            None => log::warn!("Cannot navigate before {}", self.active_month),
        }
    }

    /// Show the next month. The selection, if any, is kept.
    pub fn navigate_next(&mut self) {
        match add_months(self.active_month, 1) {
            Some(month) => self.active_month = month,
            None => log::warn!("Cannot navigate past {}", self.active_month),
        }
    }

    /// Start editing `date`, replacing any current selection and its draft.
    pub fn select_day(&mut self, date: CalendarDate) {
        let draft = self.notes.get_note(date);
        log::debug!("Selected {} ({} chars of existing note)", date, draft.len());
        self.selection = Some(Selection { date, draft });
    }

    /// Replace the draft. Ignored when no day is selected.
    pub fn edit_draft(&mut self, text: impl Into<String>) {
        if let Some(selection) = self.selection.as_mut() {
            selection.draft = text.into();
        }
    }

    /// Store the draft as the selected day's note and clear the selection.
    /// Returns `None`, changing nothing, when no day is selected.
    pub fn save_note(&mut self) -> Option<PersistOutcome> {
        let Selection { date, draft } = self.selection.take()?;

        self.notes = self.notes.set_note(date, draft);
        let outcome = self.store.persist(&self.notes);
        log::debug!("Saved note for {}: {:?}", date, outcome);

        Some(outcome)
    }

    /// Apply a user action. Returns the persist outcome for a save.
    pub fn dispatch(&mut self, intent: Intent) -> Option<PersistOutcome> {
        match intent {
            Intent::PrevMonth => self.navigate_prev(),
            Intent::NextMonth => self.navigate_next(),
            Intent::SelectDay(date) => self.select_day(date),
            Intent::EditDraft(text) => self.edit_draft(text),
            Intent::Save => return self.save_note(),
        }
        None
    }

    pub fn view(&self) -> CalendarView {
        let days = self.grid();
        let days_with_notes = days
            .iter()
            .copied()
            .filter(|d| self.notes.has_note(*d))
            .collect();

        CalendarView {
            label: month_label(self.active_month),
            leading_blanks: leading_blank_cells(self.active_month, self.week_start),
            week_start: self.week_start,
            days,
            days_with_notes,
            selection: self.selection.clone(),
        }
    }
}
