//! Core types for calnote.
//!
//! This crate holds everything behind the month calendar, independent of
//! how it is drawn:
//! - `month_grid` computes the days shown for a month
//! - `note_store` loads, updates and persists per-day notes
//! - `controller` owns the displayed month and the current selection
//! - `storage` is the key-value persistence seam (`KeyValueStore`)

pub mod config;
pub mod controller;
pub mod date;
pub mod error;
pub mod month_grid;
pub mod note_store;
pub mod storage;

pub use controller::{CalendarController, CalendarView, Intent, Selection};
pub use date::{CalendarDate, DateKey};
pub use error::{CalNoteError, CalNoteResult};
pub use note_store::{NoteMap, NoteStore, PersistOutcome, PersistPolicy};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
