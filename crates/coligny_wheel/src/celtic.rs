//! Celtic calendar date mapping, both schemes.
//!
//! Scheme A (fixed division): the cycle starts on the first Monday on/after
//! the winter solstice (taken as Dec 21) and runs as thirteen fixed 28-day
//! divisions. Offset 8 in a Gregorian leap year is Leap Day; offset 364 is
//! Floating Day; offsets past the divisions (or before the cycle start)
//! resolve to the `Invalid Date` sentinel.
//!
//! Scheme B (solstice range): the cycle rolls at Dec 23 and is covered by
//! thirteen named ranges with fixed month/day boundaries, then the 1-2 day
//! Mirabilis wrap. The ranges are declared in chronological order and must
//! partition the cycle, which tests verify; the lookup does not enforce it.
//! Note the declared second Mirabilis day of a leap cycle (Dec 23) is
//! shadowed by the roll rule, which hands Dec 23 to the next cycle's Nivis.

use coligny_time::{CalendarDate, Span, Weekday, first_containing, is_leap_year};

use crate::celtic_types::{
    ALL_DIVISION_MONTHS, CelticDate, CelticScheme, FLOATING_DAY, LEAP_DAY, RangeMonth,
};

/// Days per fixed division.
const DIVISION_DAYS: i64 = 28;

/// Map a Gregorian date into the selected Celtic scheme.
pub fn celtic_date(date: CalendarDate, scheme: CelticScheme) -> CelticDate {
    match scheme {
        CelticScheme::FixedDivision => fixed_division_date(date),
        CelticScheme::SolsticeRange => solstice_range_date(date),
    }
}

// ---------------------------------------------------------------------------
// Scheme A: fixed 28-day divisions
// ---------------------------------------------------------------------------

/// Cycle start for the fixed-division scheme: the first Monday on/after the
/// winter solstice (Dec 21) of `year - 1`.
pub fn fixed_cycle_start(year: i32) -> CalendarDate {
    let solstice = CalendarDate {
        year: year - 1,
        month: 12,
        day: 21,
    };
    solstice.next_on_or_after(Weekday::Monday)
}

/// Scheme A mapping.
pub fn fixed_division_date(date: CalendarDate) -> CelticDate {
    let mut start = fixed_cycle_start(date.year);
    let solstice = CalendarDate {
        year: date.year,
        month: 12,
        day: 21,
    };
    // On/after this year's solstice the cycle has already rolled over.
    if date >= solstice {
        start = fixed_cycle_start(date.year + 1);
    }

    let offset = start.days_until(&date);
    if offset < 0 {
        // Post-roll dates before the anchor Monday fall outside every
        // division.
        return CelticDate::invalid();
    }

    // Special days take precedence over division math.
    if is_leap_year(date.year) && offset == 8 {
        return CelticDate {
            month: LEAP_DAY,
            day: Some(1),
        };
    }
    if offset == 364 {
        return CelticDate {
            month: FLOATING_DAY,
            day: Some(1),
        };
    }

    let month_index = offset / DIVISION_DAYS;
    if month_index >= ALL_DIVISION_MONTHS.len() as i64 {
        return CelticDate::invalid();
    }
    CelticDate {
        month: ALL_DIVISION_MONTHS[month_index as usize].name(),
        day: Some((offset % DIVISION_DAYS + 1) as u32),
    }
}

// ---------------------------------------------------------------------------
// Scheme B: solstice-anchored boundary ranges
// ---------------------------------------------------------------------------

/// Month/day boundary within a cycle. `prev_year` anchors the boundary to
/// the Gregorian year before the cycle year (the Nivis start).
struct Boundary {
    month: u32,
    day: u32,
    prev_year: bool,
}

impl Boundary {
    const fn of(month: u32, day: u32) -> Self {
        Self {
            month,
            day,
            prev_year: false,
        }
    }

    fn resolve(&self, cycle: i32) -> CalendarDate {
        CalendarDate {
            year: if self.prev_year { cycle - 1 } else { cycle },
            month: self.month,
            day: self.day,
        }
    }
}

struct RangeDef {
    month: RangeMonth,
    start: Boundary,
    end: Boundary,
}

/// The 13 named ranges, chronological. Each spans 28 days in a common
/// cycle; Imber picks up Feb 29 in leap cycles.
const CYCLE_RANGES: [RangeDef; 13] = [
    RangeDef {
        month: RangeMonth::Nivis,
        start: Boundary {
            month: 12,
            day: 23,
            prev_year: true,
        },
        end: Boundary::of(1, 19),
    },
    RangeDef {
        month: RangeMonth::Gelum,
        start: Boundary::of(1, 20),
        end: Boundary::of(2, 16),
    },
    RangeDef {
        month: RangeMonth::Imber,
        start: Boundary::of(2, 17),
        end: Boundary::of(3, 16),
    },
    RangeDef {
        month: RangeMonth::Ventus,
        start: Boundary::of(3, 17),
        end: Boundary::of(4, 13),
    },
    RangeDef {
        month: RangeMonth::Flora,
        start: Boundary::of(4, 14),
        end: Boundary::of(5, 11),
    },
    RangeDef {
        month: RangeMonth::Lumen,
        start: Boundary::of(5, 12),
        end: Boundary::of(6, 8),
    },
    RangeDef {
        month: RangeMonth::Solis,
        start: Boundary::of(6, 9),
        end: Boundary::of(7, 6),
    },
    RangeDef {
        month: RangeMonth::Fervor,
        start: Boundary::of(7, 7),
        end: Boundary::of(8, 3),
    },
    RangeDef {
        month: RangeMonth::Messis,
        start: Boundary::of(8, 4),
        end: Boundary::of(8, 31),
    },
    RangeDef {
        month: RangeMonth::Pomona,
        start: Boundary::of(9, 1),
        end: Boundary::of(9, 28),
    },
    RangeDef {
        month: RangeMonth::Folium,
        start: Boundary::of(9, 29),
        end: Boundary::of(10, 26),
    },
    RangeDef {
        month: RangeMonth::Umbra,
        start: Boundary::of(10, 27),
        end: Boundary::of(11, 23),
    },
    RangeDef {
        month: RangeMonth::Aether,
        start: Boundary::of(11, 24),
        end: Boundary::of(12, 21),
    },
];

/// A range with its boundaries resolved against a concrete cycle year.
struct ResolvedRange {
    month: RangeMonth,
    start: CalendarDate,
    end: CalendarDate,
}

impl Span<CalendarDate> for ResolvedRange {
    fn contains(&self, date: &CalendarDate) -> bool {
        self.start <= *date && *date <= self.end
    }
}

/// Cycle year owning a date: rolls at Dec 23.
pub fn solstice_cycle(date: CalendarDate) -> i32 {
    if (date.month, date.day) >= (12, 23) {
        date.year + 1
    } else {
        date.year
    }
}

/// Declared length of a cycle's Mirabilis wrap: 2 days when the cycle year
/// is leap, else 1.
pub fn mirabilis_span_days(cycle: i32) -> i64 {
    if is_leap_year(cycle) { 2 } else { 1 }
}

fn resolve_cycle(cycle: i32) -> Vec<ResolvedRange> {
    let mut table: Vec<ResolvedRange> = CYCLE_RANGES
        .iter()
        .map(|def| ResolvedRange {
            month: def.month,
            start: def.start.resolve(cycle),
            end: def.end.resolve(cycle),
        })
        .collect();
    let mirabilis_start = CalendarDate {
        year: cycle,
        month: 12,
        day: 22,
    };
    table.push(ResolvedRange {
        month: RangeMonth::Mirabilis,
        start: mirabilis_start,
        end: mirabilis_start.add_days(mirabilis_span_days(cycle) - 1),
    });
    table
}

/// Scheme B mapping.
pub fn solstice_range_date(date: CalendarDate) -> CelticDate {
    let table = resolve_cycle(solstice_cycle(date));
    match first_containing(&table, &date) {
        Some(range) => CelticDate {
            month: range.month.name(),
            day: Some((range.start.days_until(&date) + 1) as u32),
        },
        None => CelticDate::invalid(),
    }
}
