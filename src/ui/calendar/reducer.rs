use crate::calendar::CalendarModel;
use crate::ui::calendar::intent::CalendarIntent;
use crate::ui::mvi::{Reducer, UiState};

impl UiState for CalendarModel {}

pub struct CalendarReducer;

impl Reducer for CalendarReducer {
    type State = CalendarModel;
    type Intent = CalendarIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CalendarIntent::NavigatePrev => state.shift_month(-1),
            CalendarIntent::NavigateNext => state.shift_month(1),
            CalendarIntent::TapDay(day) => state.select_day(day),
            CalendarIntent::EditDraft(text) => state.edit_draft(text),
            CalendarIntent::Save => state.save_event(),
            CalendarIntent::Delete(key) => state.delete_event(key),
        }
    }
}
