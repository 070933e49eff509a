//! Moon ephemeris adapter trait and the bundled mean-lunation model.
//!
//! The engine never computes orbital mechanics itself; it asks an adapter
//! for the moon's age, illuminated fraction, and upcoming syzygy instants.
//! `MeanLunation` is the bundled adapter: a uniform synodic cycle anchored
//! at a reference new moon. It drifts up to ~15 hours from true syzygies
//! (the real lunation varies with orbital eccentricity), which is accurate
//! enough for day-granularity phase classification. A higher-precision
//! source can implement the trait and drop in.

use std::f64::consts::TAU;

use coligny_time::{CalendarDate, Moment};

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_853;

/// Reference new moon: 2000-01-06 18:14 UTC, as a civil day number.
const LUNATION_EPOCH_DN: f64 = 10_962.0 + (18.0 * 60.0 + 14.0) / 1440.0;

/// Source of lunar age, illumination, and syzygy instants.
///
/// Implementations must be total over proleptic-Gregorian dates: these are
/// pure functions of the date, and classification treats them as exact.
pub trait MoonEphemeris {
    /// Days since the previous new moon at 00:00 UTC of `date`,
    /// continuous in `[0, synodic month)`.
    fn age_days(&self, date: CalendarDate) -> f64;

    /// Illuminated fraction of the lunar disc at 00:00 UTC of `date`,
    /// as a percentage in `[0, 100]`.
    fn illumination_pct(&self, date: CalendarDate) -> f64;

    /// Instant of the first new moon strictly after `after`.
    fn next_new_moon(&self, after: Moment) -> Moment;

    /// Instant of the first full moon strictly after `after`.
    fn next_full_moon(&self, after: Moment) -> Moment;
}

/// Uniform-cycle lunation model anchored at the 2000-01-06 new moon.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanLunation;

impl MeanLunation {
    fn age_at(dn: f64) -> f64 {
        (dn - LUNATION_EPOCH_DN).rem_euclid(SYNODIC_MONTH_DAYS)
    }
}

impl MoonEphemeris for MeanLunation {
    fn age_days(&self, date: CalendarDate) -> f64 {
        Self::age_at(date.day_number() as f64)
    }

    fn illumination_pct(&self, date: CalendarDate) -> f64 {
        let age = self.age_days(date);
        (1.0 - (TAU * age / SYNODIC_MONTH_DAYS).cos()) / 2.0 * 100.0
    }

    fn next_new_moon(&self, after: Moment) -> Moment {
        let t = after.day_number();
        let k = ((t - LUNATION_EPOCH_DN) / SYNODIC_MONTH_DAYS).floor() + 1.0;
        Moment::from_day_number(LUNATION_EPOCH_DN + k * SYNODIC_MONTH_DAYS)
    }

    fn next_full_moon(&self, after: Moment) -> Moment {
        let t = after.day_number();
        let k = ((t - LUNATION_EPOCH_DN) / SYNODIC_MONTH_DAYS - 0.5).floor() + 1.0;
        Moment::from_day_number(LUNATION_EPOCH_DN + (k + 0.5) * SYNODIC_MONTH_DAYS)
    }
}
