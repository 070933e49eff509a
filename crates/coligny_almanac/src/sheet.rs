//! Per-day sheets: phase timeline merged with Celtic dates.

use coligny_time::CalendarDate;

use coligny_moon::{MoonEphemeris, PhaseError, PhaseSample, classify_range};
use coligny_wheel::{CelticDate, CelticScheme, celtic_date};

/// One calendar day with its phase sample and Celtic date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaySheet {
    pub date: CalendarDate,
    pub celtic: CelticDate,
    pub sample: PhaseSample,
}

/// Sheets for every day from `start` to `end` inclusive, ascending.
///
/// The Celtic scheme is the caller's explicit choice, as everywhere else.
pub fn day_sheets<E: MoonEphemeris>(
    eph: &E,
    start: CalendarDate,
    end: CalendarDate,
    scheme: CelticScheme,
) -> Result<Vec<DaySheet>, PhaseError> {
    let samples = classify_range(eph, start, end)?;
    Ok(samples
        .into_iter()
        .map(|sample| DaySheet {
            date: sample.date,
            celtic: celtic_date(sample.date, scheme),
            sample,
        })
        .collect())
}
