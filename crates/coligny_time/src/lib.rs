//! Calendar-date primitives for the coligny engine.
//!
//! This crate provides:
//! - `CalendarDate`, the validated proleptic-Gregorian triple that keys
//!   every computation in the workspace
//! - `Moment`, a sub-day timestamp for syzygy instants and event markers
//! - `Weekday` and civil-day arithmetic (days since 1970-01-01)
//! - The generic first-matching-span lookup shared by every table-driven
//!   classifier in the workspace

pub mod civil;
pub mod error;
pub mod span;

pub use civil::{CalendarDate, Moment, Weekday, days_in_month, is_leap_year, month_name};
pub use error::DateError;
pub use span::{Span, first_containing};
