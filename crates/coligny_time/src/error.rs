//! Error types for calendar-date construction and parsing.

/// Errors from date validation or ISO-8601 parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DateError {
    /// The (year, month, day) triple does not name a real calendar day.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// The input string is not a `YYYY-MM-DD` date.
    #[error("unparseable date '{input}': expected YYYY-MM-DD")]
    Parse { input: String },
}
