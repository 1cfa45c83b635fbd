//! Per-day notes and their persistence.
//!
//! The whole note map lives under a single storage key as a JSON object
//! of `"YYYY-MM-DD": "note text"`. Reads fail soft: a missing, unreadable
//! or malformed value loads as an empty map. Writes overwrite the stored
//! value entirely and are best effort.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::date::{CalendarDate, DateKey};
use crate::month_grid::{first_day_of_month, last_day_of_month};
use crate::storage::KeyValueStore;

pub const DEFAULT_STORAGE_KEY: &str = "notes";

/// Notes keyed by day. At most one note per day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteMap(BTreeMap<DateKey, String>);

impl NoteMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The note for `date`, or an empty string if there is none.
    pub fn get_note(&self, date: CalendarDate) -> String {
        self.0.get(&date.key()).cloned().unwrap_or_default()
    }

    pub fn has_note(&self, date: CalendarDate) -> bool {
        self.0.contains_key(&date.key())
    }

    /// A copy of this map with `date`'s note replaced by `text`.
    pub fn set_note(&self, date: CalendarDate, text: impl Into<String>) -> NoteMap {
        let mut next = self.clone();
        next.0.insert(date.key(), text.into());
        next
    }

    /// Notes falling within `reference`'s month, ascending.
    /// Keys that aren't a canonical `YYYY-MM-DD` date are skipped.
    pub fn notes_in_month(&self, reference: CalendarDate) -> Vec<(CalendarDate, &str)> {
        let first = first_day_of_month(reference).key();
        let last = last_day_of_month(reference).key();

        self.0
            .range(first..=last)
            .filter_map(|(key, note)| key.to_date().map(|d| (d, note.as_str())))
            .collect()
    }
}

impl FromIterator<(CalendarDate, String)> for NoteMap {
    fn from_iter<I: IntoIterator<Item = (CalendarDate, String)>>(iter: I) -> Self {
        NoteMap(iter.into_iter().map(|(d, text)| (d.key(), text)).collect())
    }
}

/// What to do when asked to persist an empty map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersistPolicy {
    /// Leave whatever is stored untouched, so an empty in-memory map never
    /// clobbers previously saved notes.
    #[default]
    SkipEmpty,
    /// Always write, even `{}`.
    Always,
}

/// Which path a `persist` call took. Failures are logged, not returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistOutcome {
    Written,
    SkippedEmpty,
    Failed,
}

pub struct NoteStore<S: KeyValueStore> {
    store: S,
    key: String,
    policy: PersistPolicy,
}

impl<S: KeyValueStore> NoteStore<S> {
    pub fn new(store: S) -> Self {
        NoteStore {
            store,
            key: DEFAULT_STORAGE_KEY.to_string(),
            policy: PersistPolicy::default(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_policy(mut self, policy: PersistPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Read the stored map. Never fails: anything unusable loads as empty.
    pub fn load(&self) -> NoteMap {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("No notes stored under '{}'", self.key);
                return NoteMap::new();
            }
            Err(e) => {
                log::warn!("Unable to read notes from '{}': {}", self.key, e);
                return NoteMap::new();
            }
        };

        match serde_json::from_str::<NoteMap>(&raw) {
            Ok(map) => {
                log::debug!("Loaded {} note(s) from '{}'", map.len(), self.key);
                map
            }
            Err(e) => {
                log::warn!("Ignoring malformed notes under '{}': {}", self.key, e);
                NoteMap::new()
            }
        }
    }

    /// Overwrite the stored map with `map`.
    pub fn persist(&mut self, map: &NoteMap) -> PersistOutcome {
        if map.is_empty() && self.policy == PersistPolicy::SkipEmpty {
            log::debug!("Not persisting an empty note map");
            return PersistOutcome::SkippedEmpty;
        }

        let json = match serde_json::to_string(map) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Unable to serialize notes: {}", e);
                return PersistOutcome::Failed;
            }
        };

        match self.store.set(&self.key, &json) {
            Ok(()) => {
                log::debug!("Persisted {} note(s) to '{}'", map.len(), self.key);
                PersistOutcome::Written
            }
            Err(e) => {
                log::warn!("Unable to save notes to '{}': {}", self.key, e);
                PersistOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CalNoteError, CalNoteResult};
    use crate::storage::MemoryStore;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// A store whose every operation fails.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> CalNoteResult<Option<String>> {
            Err(CalNoteError::Io(std::io::Error::other("disk on fire")))
        }

        fn set(&mut self, _key: &str, _value: &str) -> CalNoteResult<()> {
            Err(CalNoteError::Io(std::io::Error::other("disk on fire")))
        }

        fn remove(&mut self, _key: &str) -> CalNoteResult<()> {
            Err(CalNoteError::Io(std::io::Error::other("disk on fire")))
        }
    }

    #[test]
    fn get_note_defaults_to_empty() {
        assert_eq!(NoteMap::new().get_note(date(2024, 1, 1)), "");
    }

    #[test]
    fn set_then_get_returns_text() {
        let d = date(2024, 1, 15);
        let map = NoteMap::new().set_note(d, "Dentist");
        assert_eq!(map.get_note(d), "Dentist");

        let map = map.set_note(d, "");
        assert_eq!(map.get_note(d), "");
        assert!(map.has_note(d));
    }

    #[test]
    fn set_note_is_idempotent() {
        let d = date(2024, 3, 3);
        let base = NoteMap::new().set_note(date(2024, 3, 4), "other");
        let once = base.set_note(d, "gym");
        let twice = once.set_note(d, "gym");
        assert_eq!(once, twice);
    }

    #[test]
    fn set_note_leaves_other_days_and_caller_untouched() {
        let d1 = date(2024, 5, 1);
        let d2 = date(2024, 5, 2);
        let map = NoteMap::new().set_note(d2, "keep");

        let updated = map.set_note(d1, "new");

        assert_eq!(updated.get_note(d2), map.get_note(d2));
        assert_eq!(map.get_note(d1), "");
        assert_eq!(map.len(), 1);
        assert_eq!(updated.len(), 2);
    }

    #[test]
    fn notes_in_month_filters_and_orders() {
        let map: NoteMap = [
            (date(2024, 2, 29), "leap".to_string()),
            (date(2024, 2, 1), "first".to_string()),
            (date(2024, 1, 31), "january".to_string()),
            (date(2024, 3, 1), "march".to_string()),
        ]
        .into_iter()
        .collect();

        let feb = map.notes_in_month(date(2024, 2, 10));
        assert_eq!(
            feb,
            vec![(date(2024, 2, 1), "first"), (date(2024, 2, 29), "leap")]
        );
    }

    #[test]
    fn notes_in_month_skips_non_canonical_keys() {
        let raw = r#"{"2024-02-1":"x","2024-02-10":"real"}"#;
        let map = NoteStore::new(MemoryStore::with_entry("notes", raw)).load();

        assert_eq!(map.len(), 2);
        assert_eq!(
            map.notes_in_month(date(2024, 2, 1)),
            vec![(date(2024, 2, 10), "real")]
        );
        assert_eq!(map.get_note(date(2024, 2, 1)), "");
    }

    #[test]
    fn load_missing_key_is_empty() {
        init_logger();
        let store = NoteStore::new(MemoryStore::new());
        assert!(store.load().is_empty());
    }

    #[test]
    fn load_parses_stored_object() {
        let raw = r#"{"2024-01-15":"Dentist","2024-02-01":"Rent"}"#;
        let store = NoteStore::new(MemoryStore::with_entry("notes", raw));

        let map = store.load();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get_note(date(2024, 1, 15)), "Dentist");
    }

    #[test]
    fn load_malformed_json_is_empty() {
        init_logger();
        for raw in ["{not json", "[1,2,3]", r#"{"2024-01-15": 42}"#, "null", ""] {
            let store = NoteStore::new(MemoryStore::with_entry("notes", raw));
            assert!(store.load().is_empty(), "{raw:?}");
        }
    }

    #[test]
    fn load_read_failure_is_empty() {
        init_logger();
        assert!(NoteStore::new(BrokenStore).load().is_empty());
    }

    #[test]
    fn persist_writes_whole_map() {
        let inspector = MemoryStore::with_entry("notes", r#"{"2020-01-01":"old"}"#);
        let mut store = NoteStore::new(inspector.clone());

        let map = NoteMap::new().set_note(date(2024, 1, 15), "Dentist");
        assert_eq!(store.persist(&map), PersistOutcome::Written);

        let stored: serde_json::Value =
            serde_json::from_str(&inspector.raw("notes").unwrap()).unwrap();
        assert_eq!(stored, serde_json::json!({"2024-01-15": "Dentist"}));
    }

    #[test]
    fn persist_skips_empty_map_by_default() {
        let inspector = MemoryStore::with_entry("notes", r#"{"2024-01-15":"Dentist"}"#);
        let mut store = NoteStore::new(inspector.clone());

        assert_eq!(store.persist(&NoteMap::new()), PersistOutcome::SkippedEmpty);
        assert_eq!(inspector.write_count(), 0);
        assert_eq!(
            inspector.raw("notes").as_deref(),
            Some(r#"{"2024-01-15":"Dentist"}"#)
        );
    }

    #[test]
    fn persist_always_writes_empty_map() {
        let inspector = MemoryStore::with_entry("notes", r#"{"2024-01-15":"Dentist"}"#);
        let mut store = NoteStore::new(inspector.clone()).with_policy(PersistPolicy::Always);

        assert_eq!(store.persist(&NoteMap::new()), PersistOutcome::Written);
        assert_eq!(inspector.raw("notes").as_deref(), Some("{}"));
    }

    #[test]
    fn persist_failure_is_swallowed() {
        init_logger();
        let mut store = NoteStore::new(BrokenStore);
        let map = NoteMap::new().set_note(date(2024, 1, 1), "x");
        assert_eq!(store.persist(&map), PersistOutcome::Failed);
    }

    #[test]
    fn custom_key_is_used() {
        let inspector = MemoryStore::new();
        let mut store = NoteStore::new(inspector.clone()).with_key("work-notes");

        store.persist(&NoteMap::new().set_note(date(2024, 1, 1), "x"));

        assert!(inspector.raw("work-notes").is_some());
        assert!(inspector.raw("notes").is_none());
    }
}
