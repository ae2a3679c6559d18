pub mod calculator;
pub mod config;
pub mod log;
pub mod report;
pub mod timesheet;

pub use calculator::{Totals, WeekWindow, compute_totals};
pub use timesheet::{LoadOutcome, Timesheet};
