//! Lunar phase classification over the declarative age-interval table.
//!
//! Phase is a pure function of the moon's age: the age is reduced modulo
//! the classification cycle, then looked up in an ordered table of
//! half-open, left-inclusive intervals. The first interval containing the
//! age wins; declaration order, not proximity, breaks any tie. The final
//! [29.53, 30.5) row re-labels ages that drift past the nominal cycle as
//! New Moon; with the modulo in front it cannot fire, so a no-match falls
//! through to `MoonPhase::Unknown` rather than an error.

use coligny_time::{CalendarDate, Span, first_containing};

use crate::ephemeris::MoonEphemeris;
use crate::error::PhaseError;
use crate::phase_types::{MoonPhase, PhaseSample};

/// Classification cycle length. Slightly under the astronomical synodic
/// month; the table's guard row absorbs the difference.
const CLASSIFY_CYCLE_DAYS: f64 = 29.53;

/// Half-open, left-inclusive age interval mapped to a phase.
struct AgeInterval {
    lo: f64,
    hi: f64,
    phase: MoonPhase,
}

impl Span<f64> for AgeInterval {
    fn contains(&self, age: &f64) -> bool {
        self.lo <= *age && *age < self.hi
    }
}

/// Phase boundaries by moon age in days. Evaluated in declaration order.
const AGE_INTERVALS: [AgeInterval; 9] = [
    AgeInterval {
        lo: 0.0,
        hi: 1.5,
        phase: MoonPhase::NewMoon,
    },
    AgeInterval {
        lo: 1.5,
        hi: 7.5,
        phase: MoonPhase::WaxingCrescent,
    },
    AgeInterval {
        lo: 7.5,
        hi: 10.5,
        phase: MoonPhase::FirstQuarter,
    },
    AgeInterval {
        lo: 10.5,
        hi: 13.5,
        phase: MoonPhase::WaxingGibbous,
    },
    AgeInterval {
        lo: 13.5,
        hi: 16.5,
        phase: MoonPhase::FullMoon,
    },
    AgeInterval {
        lo: 16.5,
        hi: 21.5,
        phase: MoonPhase::WaningGibbous,
    },
    AgeInterval {
        lo: 21.5,
        hi: 24.5,
        phase: MoonPhase::LastQuarter,
    },
    AgeInterval {
        lo: 24.5,
        hi: 29.53,
        phase: MoonPhase::WaningCrescent,
    },
    // Rounding guard for ages past the nominal cycle.
    AgeInterval {
        lo: 29.53,
        hi: 30.5,
        phase: MoonPhase::NewMoon,
    },
];

/// Classify a moon age in days.
///
/// Negative ages are admitted (reduced into the cycle) so adapters may
/// report small pre-new-moon offsets without ceremony.
pub fn phase_from_age(age_days: f64) -> MoonPhase {
    let age = age_days.rem_euclid(CLASSIFY_CYCLE_DAYS);
    first_containing(&AGE_INTERVALS, &age)
        .map(|interval| interval.phase)
        .unwrap_or(MoonPhase::Unknown)
}

/// Classify a single calendar day.
pub fn classify<E: MoonEphemeris>(eph: &E, date: CalendarDate) -> PhaseSample {
    let phase = phase_from_age(eph.age_days(date));
    PhaseSample {
        date,
        phase,
        icon: phase.icon(),
        illumination_pct: eph.illumination_pct(date),
    }
}

/// Classify every day from `start` to `end`, both inclusive.
///
/// The output is strictly ascending by date with no gaps; each day's
/// classification is independent of its neighbours.
pub fn classify_range<E: MoonEphemeris>(
    eph: &E,
    start: CalendarDate,
    end: CalendarDate,
) -> Result<Vec<PhaseSample>, PhaseError> {
    if start > end {
        return Err(PhaseError::InvalidRange { start, end });
    }
    let days = start.days_until(&end) + 1;
    let mut samples = Vec::with_capacity(days as usize);
    let mut current = start;
    while current <= end {
        samples.push(classify(eph, current));
        current = current.succ();
    }
    Ok(samples)
}
