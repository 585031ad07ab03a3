//! Calendar core: month navigation, day grids and the day → note mapping.
//!
//! Nothing here knows about rendering. A presentation layer feeds user
//! actions into [`CalendarModel`] and draws what it exposes.

mod cursor;
mod date;
mod grid;
mod key;
mod model;
mod selection;
mod store;

pub use cursor::MonthCursor;
pub use date::{is_leap_year, WEEKDAY_LABELS};
pub use grid::{build_grid, GridCell, MonthGrid};
pub use key::DayKey;
pub use model::CalendarModel;
pub use selection::SelectionState;
pub use store::EventStore;
