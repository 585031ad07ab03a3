use daypin::calendar::{build_grid, CalendarModel, DayKey, EventStore, MonthCursor, SelectionState};

fn cursor(year: i32, month: u32) -> MonthCursor {
    MonthCursor::new(year, month).unwrap()
}

fn key(year: i32, month: u32, day: u32) -> DayKey {
    DayKey::new(cursor(year, month), day).unwrap()
}

#[test]
fn twelve_shifts_advance_one_year_and_back() {
    for month in 1..=12 {
        for year in [-5, 0, 1900, 2023, 2024] {
            let start = CalendarModel::new(cursor(year, month));
            let ahead = (0..12).fold(start.clone(), |model, _| model.shift_month(1));
            assert_eq!(ahead.cursor(), cursor(year + 1, month));
            let back = (0..12).fold(ahead, |model, _| model.shift_month(-1));
            assert_eq!(back.cursor(), start.cursor());
        }
    }
}

#[test]
fn shift_wraps_year() {
    let model = CalendarModel::new(cursor(2023, 12)).shift_month(1);
    assert_eq!(model.cursor(), cursor(2024, 1));
    let model = model.shift_month(-1);
    assert_eq!(model.cursor(), cursor(2023, 12));
}

#[test]
fn days_in_month_respects_leap_years() {
    assert_eq!(cursor(2024, 2).days_in_month(), 29);
    assert_eq!(cursor(2023, 2).days_in_month(), 28);
    assert_eq!(cursor(2000, 2).days_in_month(), 29);
    assert_eq!(cursor(1900, 2).days_in_month(), 28);
}

#[test]
fn grid_length_is_offset_plus_days() {
    for year in [1900, 2000, 2023, 2024] {
        for month in 1..=12 {
            let c = cursor(year, month);
            let expected = (c.first_weekday_offset() + c.days_in_month()) as usize;
            assert_eq!(build_grid(c).len(), expected);
            assert_eq!(build_grid(c).count(), expected);
        }
    }
}

#[test]
fn grid_is_idempotent() {
    let c = cursor(2024, 9);
    let first: Vec<_> = build_grid(c).collect();
    let second: Vec<_> = build_grid(c).collect();
    assert_eq!(first, second);
}

#[test]
fn grid_blanks_precede_day_one() {
    let c = cursor(2024, 3);
    let cells: Vec<_> = build_grid(c).collect();
    let offset = c.first_weekday_offset() as usize;
    assert!(cells[..offset].iter().all(|cell| cell.day.is_none()));
    let days: Vec<u32> = cells[offset..].iter().filter_map(|cell| cell.day).collect();
    assert_eq!(days, (1..=31).collect::<Vec<_>>());
}

#[test]
fn blank_save_changes_nothing() {
    let model = CalendarModel::new(cursor(2024, 3))
        .select_day(5)
        .edit_draft("   ");
    let after = model.clone().save_event();
    assert_eq!(after, model);
    assert!(after.events().is_empty());
    assert_eq!(after.selection().key(), Some(key(2024, 3, 5)));
}

#[test]
fn save_trims_and_clears_selection() {
    let model = CalendarModel::new(cursor(2024, 3))
        .select_day(5)
        .edit_draft(" Meeting ")
        .save_event();
    assert_eq!(model.events().get(&key(2024, 3, 5)), Some("Meeting"));
    assert_eq!(model.selection(), &SelectionState::None);
}

#[test]
fn delete_absent_key_is_idempotent() {
    let model = CalendarModel::new(cursor(2024, 3))
        .select_day(5)
        .edit_draft("keep")
        .save_event();
    let after = model.clone().delete_event(key(2024, 3, 6));
    assert_eq!(after, model);

    let store = EventStore::new();
    assert_eq!(store.clone().without(&key(2024, 3, 6)), store);
}

#[test]
fn delete_selected_day_clears_selection() {
    let model = CalendarModel::new(cursor(2024, 3))
        .select_day(5)
        .edit_draft("note")
        .save_event()
        .select_day(5)
        .delete_event(key(2024, 3, 5));
    assert!(model.events().is_empty());
    assert!(model.selection().is_none());
}

#[test]
fn delete_unsaved_selected_day_clears_selection() {
    let model = CalendarModel::new(cursor(2024, 3))
        .select_day(5)
        .edit_draft("never saved")
        .delete_event(key(2024, 3, 5));
    assert!(model.events().is_empty());
    assert_eq!(model.selection(), &SelectionState::None);
}

#[test]
fn delete_other_day_keeps_selection() {
    let model = CalendarModel::new(cursor(2024, 3))
        .select_day(5)
        .edit_draft("five")
        .save_event()
        .select_day(6)
        .edit_draft("draft")
        .delete_event(key(2024, 3, 5));
    assert!(model.events().is_empty());
    assert_eq!(model.selection().key(), Some(key(2024, 3, 6)));
    assert_eq!(model.selection().draft(), Some("draft"));
}

#[test]
fn reselect_loads_saved_text() {
    let model = CalendarModel::new(cursor(2024, 3))
        .select_day(12)
        .edit_draft("Dinner")
        .save_event()
        .select_day(12);
    assert_eq!(model.selection().draft(), Some("Dinner"));
}

#[test]
fn select_empty_day_starts_with_empty_draft() {
    let model = CalendarModel::new(cursor(2024, 3)).select_day(12);
    assert_eq!(model.selection().draft(), Some(""));
}

#[test]
fn navigation_clears_selection() {
    let model = CalendarModel::new(cursor(2024, 3))
        .select_day(12)
        .edit_draft("unsaved")
        .shift_month(1);
    assert!(model.selection().is_none());
    assert!(model.events().is_empty());
}

#[test]
fn marked_days_follow_cursor() {
    let model = CalendarModel::new(cursor(2024, 3))
        .select_day(1)
        .edit_draft("march")
        .save_event();
    assert_eq!(model.marked_days().len(), 1);
    let model = model.shift_month(1);
    assert!(model.marked_days().is_empty());
    assert_eq!(model.note_for(1), None);
    let model = model.shift_month(-1);
    assert_eq!(model.note_for(1), Some("march"));
}
