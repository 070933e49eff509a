//! Error types for phase classification.

use coligny_time::CalendarDate;

/// Errors from phase-timeline queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum PhaseError {
    /// Range query with start after end.
    #[error("invalid range: start {start} is after end {end}")]
    InvalidRange {
        start: CalendarDate,
        end: CalendarDate,
    },
}
