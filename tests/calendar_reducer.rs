use daypin::calendar::{CalendarModel, DayKey, MonthCursor};
use daypin::ui::calendar::{CalendarIntent, CalendarReducer};
use daypin::ui::mvi::Reducer;

fn march_2024() -> CalendarModel {
    CalendarModel::new(MonthCursor::new(2024, 3).unwrap())
}

fn reduce_all(state: CalendarModel, intents: Vec<CalendarIntent>) -> CalendarModel {
    intents.into_iter().fold(state, CalendarReducer::reduce)
}

#[test]
fn navigate_next_and_prev() {
    let state = CalendarReducer::reduce(march_2024(), CalendarIntent::NavigateNext);
    assert_eq!(state.cursor(), MonthCursor::new(2024, 4).unwrap());
    let state = CalendarReducer::reduce(state, CalendarIntent::NavigatePrev);
    assert_eq!(state.cursor(), MonthCursor::new(2024, 3).unwrap());
}

#[test]
fn tap_edit_save_pins_note() {
    let state = reduce_all(
        march_2024(),
        vec![
            CalendarIntent::TapDay(5),
            CalendarIntent::EditDraft("  Meeting  ".to_string()),
            CalendarIntent::Save,
        ],
    );
    assert_eq!(state.note_for(5), Some("Meeting"));
    assert!(state.selection().is_none());
}

#[test]
fn save_without_tap_is_noop() {
    let state = reduce_all(
        march_2024(),
        vec![
            CalendarIntent::EditDraft("orphan".to_string()),
            CalendarIntent::Save,
        ],
    );
    assert_eq!(state, march_2024());
}

#[test]
fn delete_intent_removes_note() {
    let key = DayKey::new(MonthCursor::new(2024, 3).unwrap(), 5).unwrap();
    let state = reduce_all(
        march_2024(),
        vec![
            CalendarIntent::TapDay(5),
            CalendarIntent::EditDraft("gone soon".to_string()),
            CalendarIntent::Save,
            CalendarIntent::Delete(key),
        ],
    );
    assert!(state.events().is_empty());
}

#[test]
fn navigation_discards_draft() {
    let state = reduce_all(
        march_2024(),
        vec![
            CalendarIntent::TapDay(5),
            CalendarIntent::EditDraft("unsaved".to_string()),
            CalendarIntent::NavigateNext,
            CalendarIntent::NavigatePrev,
            CalendarIntent::Save,
        ],
    );
    assert!(state.events().is_empty());
    assert!(state.selection().is_none());
}

#[test]
fn default_state_is_empty_placeholder() {
    let state = CalendarModel::default();
    assert_eq!(state.cursor(), MonthCursor::new(1970, 1).unwrap());
    assert!(state.events().is_empty());
    assert!(state.selection().is_none());
}
