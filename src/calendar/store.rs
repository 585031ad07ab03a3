use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};

use crate::calendar::{DayKey, MonthCursor};

/// Notes pinned to days.
///
/// Every stored note is trimmed and non-empty. Updates consume the store
/// and hand back the next value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventStore {
    notes: BTreeMap<DayKey, String>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the trimmed `text` under `key`, replacing any previous note.
    ///
    /// Text that is empty after trimming leaves the store unchanged.
    pub fn with_note(mut self, key: DayKey, text: &str) -> Self {
        let text = text.trim();
        if !text.is_empty() {
            self.notes.insert(key, text.to_string());
        }
        self
    }

    /// Removes the note under `key`, if any.
    pub fn without(mut self, key: &DayKey) -> Self {
        self.notes.remove(key);
        self
    }

    pub fn get(&self, key: &DayKey) -> Option<&str> {
        self.notes.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &DayKey) -> bool {
        self.notes.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Notes in date order.
    pub fn iter(&self) -> impl Iterator<Item = (&DayKey, &str)> {
        self.notes.iter().map(|(key, text)| (key, text.as_str()))
    }

    /// Days inside `cursor`'s month that carry a note.
    pub fn marked_in(&self, cursor: MonthCursor) -> BTreeSet<DayKey> {
        self.notes
            .keys()
            .filter(|key| key.cursor() == cursor)
            .copied()
            .collect()
    }
}

impl<'a> IntoIterator for &'a EventStore {
    type Item = (&'a DayKey, &'a String);
    type IntoIter = btree_map::Iter<'a, DayKey, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(year: i32, month: u32, day: u32) -> DayKey {
        DayKey::new(MonthCursor::new(year, month).unwrap(), day).unwrap()
    }

    #[test]
    fn with_note_trims_text() {
        let store = EventStore::new().with_note(key(2024, 3, 5), "  Meeting \n");
        assert_eq!(store.get(&key(2024, 3, 5)), Some("Meeting"));
    }

    #[test]
    fn with_note_ignores_blank_text() {
        let store = EventStore::new().with_note(key(2024, 3, 5), " \t\n ");
        assert!(store.is_empty());
    }

    #[test]
    fn with_note_overwrites() {
        let store = EventStore::new()
            .with_note(key(2024, 3, 5), "first")
            .with_note(key(2024, 3, 5), "second");
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&key(2024, 3, 5)), Some("second"));
    }

    #[test]
    fn without_missing_key_is_noop() {
        let store = EventStore::new().with_note(key(2024, 3, 5), "kept");
        let after = store.clone().without(&key(2024, 3, 6));
        assert_eq!(after, store);
    }

    #[test]
    fn marked_in_filters_by_month() {
        let store = EventStore::new()
            .with_note(key(2024, 3, 5), "a")
            .with_note(key(2024, 3, 20), "b")
            .with_note(key(2024, 4, 5), "c")
            .with_note(key(2025, 3, 5), "d");
        let marked = store.marked_in(MonthCursor::new(2024, 3).unwrap());
        assert_eq!(
            marked.into_iter().collect::<Vec<_>>(),
            vec![key(2024, 3, 5), key(2024, 3, 20)]
        );
    }

    #[test]
    fn iter_is_date_ordered() {
        let store = EventStore::new()
            .with_note(key(2024, 4, 1), "later")
            .with_note(key(2023, 12, 31), "earlier");
        let texts: Vec<_> = store.iter().map(|(_, text)| text).collect();
        assert_eq!(texts, vec!["earlier", "later"]);
    }
}
