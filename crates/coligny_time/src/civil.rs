//! Proleptic-Gregorian calendar dates with civil-day arithmetic.
//!
//! Provides `CalendarDate`, the canonical date representation used throughout
//! the engine, and `Moment` for sub-day instants. Conversion to/from a civil
//! day number (days since 1970-01-01) uses the standard era-based algorithms,
//! so date differences and weekdays are integer arithmetic, not loops.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::DateError;

/// Whether a Gregorian year is a leap year.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a Gregorian month (1-12). Returns 0 for invalid months.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// English name of a Gregorian month (1-12).
pub const fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Invalid",
    }
}

/// Day of the week, Monday-first (matching ISO-8601 ordering).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// All seven weekdays in order (index 0 = Monday).
pub const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

impl Weekday {
    /// English name of the weekday.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// 0-based index (Monday=0 .. Sunday=6).
    pub const fn index(self) -> u32 {
        match self {
            Self::Monday => 0,
            Self::Tuesday => 1,
            Self::Wednesday => 2,
            Self::Thursday => 3,
            Self::Friday => 4,
            Self::Saturday => 5,
            Self::Sunday => 6,
        }
    }
}

/// Validated proleptic-Gregorian calendar date.
///
/// Ordered by (year, month, day). Construction via [`CalendarDate::new`]
/// rejects triples that do not name a real day; the fields stay public for
/// destructuring but every constructor in this crate validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    /// Construct a validated date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        if month < 1 || month > 12 || day < 1 || day > days_in_month(year, month) {
            return Err(DateError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Civil day number: days since 1970-01-01 (negative before).
    pub fn day_number(&self) -> i64 {
        let y = i64::from(if self.month <= 2 { self.year - 1 } else { self.year });
        let era = if y >= 0 { y } else { y - 399 } / 400;
        let yoe = y - era * 400;
        let m = i64::from(self.month);
        let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + i64::from(self.day) - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * 146_097 + doe - 719_468
    }

    /// Inverse of [`CalendarDate::day_number`].
    pub fn from_day_number(days: i64) -> Self {
        let z = days + 719_468;
        let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
        let doe = z - era * 146_097;
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let y = yoe + era * 400;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
        let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
        let year = (if month <= 2 { y + 1 } else { y }) as i32;
        Self { year, month, day }
    }

    /// The date `delta` days away (negative moves backward).
    pub fn add_days(&self, delta: i64) -> Self {
        Self::from_day_number(self.day_number() + delta)
    }

    /// The next calendar day.
    pub fn succ(&self) -> Self {
        self.add_days(1)
    }

    /// Signed whole days from `self` to `other` (`other - self`).
    pub fn days_until(&self, other: &Self) -> i64 {
        other.day_number() - self.day_number()
    }

    /// Day of the week (1970-01-01 was a Thursday).
    pub fn weekday(&self) -> Weekday {
        let idx = (self.day_number() + 3).rem_euclid(7) as usize;
        ALL_WEEKDAYS[idx]
    }

    /// The first date on/after `self` that falls on `target` (0 days forward
    /// when `self` already does).
    pub fn next_on_or_after(&self, target: Weekday) -> Self {
        let forward =
            (7 + i64::from(target.index()) - i64::from(self.weekday().index())).rem_euclid(7);
        self.add_days(forward)
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || DateError::Parse {
            input: s.to_string(),
        };
        let mut parts = s.splitn(3, '-');
        let year = parts
            .next()
            .and_then(|p| p.parse::<i32>().ok())
            .ok_or_else(parse_err)?;
        let month = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(parse_err)?;
        let day = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(parse_err)?;
        Self::new(year, month, day)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CalendarDate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Calendar date with time of day, for syzygy instants and event markers.
///
/// Ordered field-wise, which matches chronological order. The fractional
/// `second` carries sub-second precision through day-number round trips;
/// display truncates to whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Moment {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl Moment {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight at the start of a calendar date.
    pub fn from_date(date: CalendarDate) -> Self {
        Self::new(date.year, date.month, date.day, 0, 0, 0.0)
    }

    /// The calendar date this moment falls on.
    pub fn date(&self) -> CalendarDate {
        CalendarDate {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }

    /// Fractional civil day number (days since 1970-01-01T00:00:00).
    pub fn day_number(&self) -> f64 {
        let whole = self.date().day_number() as f64;
        whole
            + f64::from(self.hour) / 24.0
            + f64::from(self.minute) / 1440.0
            + self.second / 86_400.0
    }

    /// Inverse of [`Moment::day_number`].
    pub fn from_day_number(dn: f64) -> Self {
        let whole = dn.floor();
        let date = CalendarDate::from_day_number(whole as i64);
        let mut total_seconds = (dn - whole) * 86_400.0;
        // Clamp against floating-point spill into the next day.
        if total_seconds >= 86_400.0 {
            total_seconds = 86_400.0 - 1e-6;
        }
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year: date.year,
            month: date.month,
            day: date.day,
            hour,
            minute,
            second,
        }
    }
}

impl Display for Moment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second.floor() as u32
        )
    }
}
