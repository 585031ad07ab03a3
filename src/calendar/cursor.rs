use std::fmt;

use chrono::{Datelike, Local, Month, NaiveDate};

use crate::calendar::date;

/// The (month, year) pair currently displayed.
///
/// `month` is always within `1..=12`; the only way to move a cursor is
/// [`MonthCursor::shift`], which carries overflow into the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    /// Returns `None` when `month` is outside `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Month containing the local system date.
    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    /// Moves the cursor by `delta` months.
    ///
    /// Saturates at the first/last representable month instead of
    /// overflowing the year.
    pub fn shift(self, delta: i32) -> Self {
        let index = i64::from(self.year) * 12 + i64::from(self.month - 1) + i64::from(delta);
        let year = index.div_euclid(12);
        if year > i64::from(i32::MAX) {
            return Self {
                year: i32::MAX,
                month: 12,
            };
        }
        if year < i64::from(i32::MIN) {
            return Self {
                year: i32::MIN,
                month: 1,
            };
        }
        Self {
            year: year as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    pub fn next(self) -> Self {
        self.shift(1)
    }

    pub fn prev(self) -> Self {
        self.shift(-1)
    }

    pub fn days_in_month(self) -> u32 {
        date::days_in_month(self.year, self.month)
    }

    /// Weekday index (Sunday = 0) of the 1st, i.e. the number of blank
    /// cells that precede day 1 in the grid.
    pub fn first_weekday_offset(self) -> u32 {
        date::first_weekday_offset(self.year, self.month)
    }

    /// English month name, for display.
    pub fn month_name(self) -> &'static str {
        u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name())
            .unwrap_or("")
    }
}

/// January 1970. A fixed placeholder; use [`MonthCursor::today`] for the
/// real startup month.
impl Default for MonthCursor {
    fn default() -> Self {
        Self {
            year: 1970,
            month: 1,
        }
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}
