mod intent;
mod reducer;

pub use intent::CalendarIntent;
pub use reducer::CalendarReducer;
