//! Core abstractions for quickcap.
//!
//! This module provides the date/time helpers shared by the parser and the
//! output formatters, and the `Schedulable` trait.

pub mod datetime;
mod traits;

pub use datetime::{end_of_day, format_clock, format_due, month_number, parse_time_of_day, promote_year};
pub use traits::Schedulable;
