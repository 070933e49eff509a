//! Wheel-of-the-year mappings: Celtic calendar dates and zodiac signs.
//!
//! This crate provides:
//! - Two alternative Celtic calendar schemes behind one interface: fixed
//!   28-day divisions anchored to the solstice-following Monday, and
//!   explicit solstice-anchored boundary ranges with the Mirabilis wrap day.
//!   The schemes disagree on anchors and month names by design; callers
//!   choose one explicitly.
//! - The 13-sign tree-zodiac resolver over wrap-around month/day ranges.

pub mod celtic;
pub mod celtic_types;
pub mod error;
pub mod zodiac;
pub mod zodiac_types;

pub use celtic::{
    celtic_date, fixed_cycle_start, fixed_division_date, mirabilis_span_days, solstice_cycle,
    solstice_range_date,
};
pub use celtic_types::{
    ALL_DIVISION_MONTHS, ALL_RANGE_MONTHS, CelticDate, CelticScheme, DivisionMonth, RangeMonth,
};
pub use error::WheelError;
pub use zodiac::{ZODIAC_SIGNS, resolve_zodiac, zodiac_by_name, zodiac_for_date};
pub use zodiac_types::{MonthDay, ZodiacSignDef};
