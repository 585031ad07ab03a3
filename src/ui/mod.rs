//! Terminal front-end: draws the calendar and turns keystrokes into
//! [`calendar::CalendarIntent`]s.

pub mod app;
pub mod calendar;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod plain;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
