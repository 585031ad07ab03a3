//! Proleptic Gregorian date arithmetic for month grids.
//!
//! Kept free of any date library so every function is total over `i32` years.

/// Column headers for a Sunday-first week.
pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Offsets used by Sakamoto's day-of-week method, indexed by month - 1.
const MONTH_OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

/// Gregorian leap rule: every 4th year, except centuries not divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Weekday of the first of `month`, Sunday = 0 through Saturday = 6.
pub(crate) fn first_weekday_offset(year: i32, month: u32) -> u32 {
    let index = month.clamp(1, 12) as usize - 1;
    let y = i64::from(year) - i64::from(month < 3);
    let days = y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400) + MONTH_OFFSETS[index] + 1;
    days.rem_euclid(7) as u32
}
