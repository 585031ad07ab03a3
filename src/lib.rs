//! Month calendar with notes pinned to days.
//!
//! [`calendar`] holds the framework-free model; [`ui`] drives it from a
//! terminal through the MVI reducer in [`ui::calendar`].

pub mod calendar;
pub mod cli;
pub mod config;
pub mod logging;
pub mod ui;
