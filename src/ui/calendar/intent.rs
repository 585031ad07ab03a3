use crate::calendar::DayKey;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarIntent {
    NavigatePrev,
    NavigateNext,
    /// Day number within the displayed month.
    TapDay(u32),
    EditDraft(String),
    Save,
    Delete(DayKey),
}

impl Intent for CalendarIntent {}
