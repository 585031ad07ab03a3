use std::collections::BTreeSet;

use crate::calendar::grid::{build_grid, MonthGrid};
use crate::calendar::{DayKey, EventStore, MonthCursor, SelectionState};

/// Snapshot of the whole calendar: displayed month, pinned notes and the
/// current selection.
///
/// Operations take the snapshot by value and return the next one, so the
/// only way state changes is through these methods.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CalendarModel {
    cursor: MonthCursor,
    events: EventStore,
    selection: SelectionState,
}

impl CalendarModel {
    pub fn new(cursor: MonthCursor) -> Self {
        Self {
            cursor,
            events: EventStore::new(),
            selection: SelectionState::None,
        }
    }

    pub fn starting_today() -> Self {
        Self::new(MonthCursor::today())
    }

    pub fn with_events(mut self, events: EventStore) -> Self {
        self.events = events;
        self
    }

    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    pub fn events(&self) -> &EventStore {
        &self.events
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Grid cells of the displayed month.
    pub fn grid(&self) -> MonthGrid {
        build_grid(self.cursor)
    }

    /// Days of the displayed month that have a note.
    pub fn marked_days(&self) -> BTreeSet<DayKey> {
        self.events.marked_in(self.cursor)
    }

    /// Note for `day` of the displayed month.
    pub fn note_for(&self, day: u32) -> Option<&str> {
        DayKey::new(self.cursor, day).and_then(|key| self.events.get(&key))
    }

    /// Moves the displayed month and drops any selection.
    pub fn shift_month(self, delta: i32) -> Self {
        Self {
            cursor: self.cursor.shift(delta),
            events: self.events,
            selection: SelectionState::None,
        }
    }

    /// Selects `day` of the displayed month and loads its note as the draft.
    ///
    /// Days outside the month leave the snapshot untouched.
    pub fn select_day(self, day: u32) -> Self {
        let Some(key) = DayKey::new(self.cursor, day) else {
            return self;
        };
        let draft = self.events.get(&key).unwrap_or_default().to_string();
        Self {
            selection: SelectionState::Editing { key, draft },
            ..self
        }
    }

    /// Replaces the draft of the selected day.
    pub fn edit_draft(self, text: impl Into<String>) -> Self {
        match self.selection {
            SelectionState::Editing { key, .. } => Self {
                selection: SelectionState::Editing {
                    key,
                    draft: text.into(),
                },
                ..self
            },
            SelectionState::None => self,
        }
    }

    /// Pins the trimmed draft to the selected day and clears the selection.
    ///
    /// Without a selection, or with a blank draft, nothing changes.
    pub fn save_event(self) -> Self {
        match self.selection {
            SelectionState::Editing { key, draft } if !draft.trim().is_empty() => Self {
                cursor: self.cursor,
                events: self.events.with_note(key, &draft),
                selection: SelectionState::None,
            },
            selection => Self { selection, ..self },
        }
    }

    /// Removes the note on `key`. Clears the selection if it was that day.
    pub fn delete_event(self, key: DayKey) -> Self {
        let selection = if self.selection.is_selected(&key) {
            SelectionState::None
        } else {
            self.selection
        };
        Self {
            cursor: self.cursor,
            events: self.events.without(&key),
            selection,
        }
    }
}
