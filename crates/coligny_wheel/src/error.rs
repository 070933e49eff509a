//! Error types for wheel lookups.

/// Errors from zodiac input validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum WheelError {
    /// The (month, day) pair does not name a calendar day in any year.
    #[error("invalid month/day pair {month}/{day}")]
    InvalidMonthDay { month: u32, day: u32 },
}
