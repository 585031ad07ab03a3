use std::fmt;

use crate::calendar::MonthCursor;

/// Identifies one calendar day.
///
/// Kept as a structured tuple; the `Display` form is for humans only and is
/// never parsed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey {
    cursor: MonthCursor,
    day: u32,
}

impl DayKey {
    /// Returns `None` if `day` does not exist in the cursor's month.
    pub fn new(cursor: MonthCursor, day: u32) -> Option<Self> {
        (1..=cursor.days_in_month())
            .contains(&day)
            .then_some(Self { cursor, day })
    }

    pub fn year(self) -> i32 {
        self.cursor.year()
    }

    pub fn month(self) -> u32 {
        self.cursor.month()
    }

    pub fn day(self) -> u32 {
        self.day
    }

    /// The month this day belongs to.
    pub fn cursor(self) -> MonthCursor {
        self.cursor
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.cursor.year(),
            self.cursor.month(),
            self.day
        )
    }
}
