use crate::calendar::{CalendarModel, DayKey};
use crate::ui::calendar::{CalendarIntent, CalendarReducer};
use crate::ui::mvi::Reducer;

/// Where keystrokes go.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Grid,
    Editor,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Terminal session state: the calendar snapshot plus presentation-only
/// details (keyboard focus, highlighted day, quit flag).
pub struct App {
    should_quit: bool,
    focus: Focus,
    /// Day under the keyboard highlight; always within the displayed month.
    focused_day: u32,
    calendar: CalendarModel,
}

impl App {
    pub fn new(calendar: CalendarModel) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Grid,
            focused_day: 1,
            calendar,
        }
    }

    /// Starts with `day` highlighted, clamped to the displayed month.
    pub fn with_focused_day(mut self, day: u32) -> Self {
        self.focused_day = day;
        self.clamp_focused_day();
        self
    }

    pub fn calendar(&self) -> &CalendarModel {
        &self.calendar
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn focused_day(&self) -> u32 {
        self.focused_day
    }

    pub fn focused_key(&self) -> Option<DayKey> {
        DayKey::new(self.calendar.cursor(), self.focused_day)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        tracing::info!(notes = self.calendar.events().len(), "quit requested");
        self.should_quit = true;
    }

    pub fn dispatch(&mut self, intent: CalendarIntent) {
        tracing::debug!(?intent, "dispatch");
        let before = self.calendar.events().len();
        dispatch_mvi!(self, calendar, CalendarReducer, intent);
        let after = self.calendar.events().len();
        if before != after {
            tracing::info!(before, after, "note count changed");
        }

        if self.calendar.selection().is_none() {
            self.focus = Focus::Grid;
        }
        self.clamp_focused_day();
    }

    /// Moves the highlight by `delta` days; stops at the month edges.
    pub fn move_focus(&mut self, delta: i32) {
        let target = i64::from(self.focused_day) + i64::from(delta);
        let last = i64::from(self.calendar.cursor().days_in_month());
        if (1..=last).contains(&target) {
            self.focused_day = target as u32;
        }
    }

    pub fn navigate(&mut self, delta: i32) {
        let intent = if delta < 0 {
            CalendarIntent::NavigatePrev
        } else {
            CalendarIntent::NavigateNext
        };
        self.dispatch(intent);
    }

    /// Taps the highlighted day and moves focus into the editor.
    pub fn open_focused_day(&mut self) {
        self.dispatch(CalendarIntent::TapDay(self.focused_day));
        if !self.calendar.selection().is_none() {
            self.focus = Focus::Editor;
        }
    }

    pub fn delete_focused_note(&mut self) {
        if let Some(key) = self.focused_key() {
            self.dispatch(CalendarIntent::Delete(key));
        }
    }

    pub fn push_char(&mut self, ch: char) {
        if let Some(draft) = self.calendar.selection().draft() {
            let mut text = draft.to_string();
            text.push(ch);
            self.dispatch(CalendarIntent::EditDraft(text));
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(draft) = self.calendar.selection().draft() {
            let mut text = draft.to_string();
            text.pop();
            self.dispatch(CalendarIntent::EditDraft(text));
        }
    }

    pub fn save(&mut self) {
        self.dispatch(CalendarIntent::Save);
    }

    /// Returns keyboard focus to the grid. The selection stays open.
    pub fn leave_editor(&mut self) {
        self.focus = Focus::Grid;
    }

    /// Puts focus back into the editor if a day is still selected.
    pub fn resume_editor(&mut self) -> bool {
        if self.calendar.selection().is_none() {
            return false;
        }
        self.focus = Focus::Editor;
        true
    }

    fn clamp_focused_day(&mut self) {
        let last = self.calendar.cursor().days_in_month();
        self.focused_day = self.focused_day.clamp(1, last);
    }
}
