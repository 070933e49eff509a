//! Tree-zodiac resolution over the declared sign table.
//!
//! Thirteen signs cover the year with inclusive ranges; Birch wraps across
//! the year end (Dec 24 - Jan 20). Signs are tested in declaration order
//! and the first containing range wins. The table is expected to be
//! exhaustive and non-overlapping over every (month, day) including Feb 29,
//! which tests verify; the lookup itself does not enforce it.

use coligny_time::{CalendarDate, days_in_month, first_containing};

use crate::error::WheelError;
use crate::zodiac_types::{MonthDay, ZodiacSignDef};

/// The 13 tree signs, Birch first. Declaration order is lookup order.
pub const ZODIAC_SIGNS: [ZodiacSignDef; 13] = [
    ZodiacSignDef {
        name: "Birch",
        start: MonthDay::new(12, 24),
        end: MonthDay::new(1, 20),
        symbolism: "Renewal and fresh beginnings after the longest night.",
        animal: "Stag",
        mythical_creature: "White Hart",
    },
    ZodiacSignDef {
        name: "Rowan",
        start: MonthDay::new(1, 21),
        end: MonthDay::new(2, 17),
        symbolism: "Protection, quickened thought, and inner fire.",
        animal: "Cat",
        mythical_creature: "Dragon",
    },
    ZodiacSignDef {
        name: "Ash",
        start: MonthDay::new(2, 18),
        end: MonthDay::new(3, 17),
        symbolism: "The world tree binding inner and outer tides.",
        animal: "Adder",
        mythical_creature: "Kelpie",
    },
    ZodiacSignDef {
        name: "Alder",
        start: MonthDay::new(3, 18),
        end: MonthDay::new(4, 14),
        symbolism: "Courage at the water's edge; the pathfinder's tree.",
        animal: "Fox",
        mythical_creature: "Phoenix",
    },
    ZodiacSignDef {
        name: "Willow",
        start: MonthDay::new(4, 15),
        end: MonthDay::new(5, 12),
        symbolism: "Moon-led intuition and the memory of water.",
        animal: "Hare",
        mythical_creature: "Selkie",
    },
    ZodiacSignDef {
        name: "Hawthorn",
        start: MonthDay::new(5, 13),
        end: MonthDay::new(6, 9),
        symbolism: "The May tree: guarded thresholds and wild blossom.",
        animal: "Owl",
        mythical_creature: "Faerie",
    },
    ZodiacSignDef {
        name: "Oak",
        start: MonthDay::new(6, 10),
        end: MonthDay::new(7, 7),
        symbolism: "Midsummer strength and the open door of the year.",
        animal: "Wren",
        mythical_creature: "Green Man",
    },
    ZodiacSignDef {
        name: "Holly",
        start: MonthDay::new(7, 8),
        end: MonthDay::new(8, 4),
        symbolism: "The evergreen challenger; endurance as the light turns.",
        animal: "Horse",
        mythical_creature: "Unicorn",
    },
    ZodiacSignDef {
        name: "Hazel",
        start: MonthDay::new(8, 5),
        end: MonthDay::new(9, 1),
        symbolism: "The well of wisdom and the cracked nut of knowledge.",
        animal: "Salmon",
        mythical_creature: "Merrow",
    },
    ZodiacSignDef {
        name: "Vine",
        start: MonthDay::new(9, 2),
        end: MonthDay::new(9, 29),
        symbolism: "Harvest balance, poised between light and dark halves.",
        animal: "Swan",
        mythical_creature: "Banshee",
    },
    ZodiacSignDef {
        name: "Ivy",
        start: MonthDay::new(9, 30),
        end: MonthDay::new(10, 27),
        symbolism: "Tenacity that climbs through the dying of the year.",
        animal: "Butterfly",
        mythical_creature: "Puca",
    },
    ZodiacSignDef {
        name: "Reed",
        start: MonthDay::new(10, 28),
        end: MonthDay::new(11, 24),
        symbolism: "The hidden root; truths sought under still water.",
        animal: "Hound",
        mythical_creature: "Cu Sith",
    },
    ZodiacSignDef {
        name: "Elder",
        start: MonthDay::new(11, 25),
        end: MonthDay::new(12, 23),
        symbolism: "The crone tree: endings that seed the next cycle.",
        animal: "Raven",
        mythical_creature: "Morrigan",
    },
];

/// Greatest day number `month` can carry in any year (Feb admits 29, since
/// zodiac ranges ignore the year).
const fn max_day_any_year(month: u32) -> u32 {
    if month == 2 {
        29
    } else {
        // Non-February month lengths do not depend on the year.
        days_in_month(1, month)
    }
}

/// Resolve the zodiac sign for a (month, day) pair.
///
/// Validates the pair first; `Ok(None)` is the defined no-match result
/// (unreachable while the declared table stays exhaustive).
pub fn resolve_zodiac(
    month: u32,
    day: u32,
) -> Result<Option<&'static ZodiacSignDef>, WheelError> {
    if month < 1 || month > 12 || day < 1 || day > max_day_any_year(month) {
        return Err(WheelError::InvalidMonthDay { month, day });
    }
    Ok(first_containing(&ZODIAC_SIGNS, &MonthDay::new(month, day)))
}

/// Zodiac sign for a calendar date (already-validated month/day).
pub fn zodiac_for_date(date: CalendarDate) -> Option<&'static ZodiacSignDef> {
    first_containing(&ZODIAC_SIGNS, &MonthDay::new(date.month, date.day))
}

/// Case-insensitive sign lookup by name.
pub fn zodiac_by_name(name: &str) -> Option<&'static ZodiacSignDef> {
    ZODIAC_SIGNS
        .iter()
        .find(|sign| sign.name.eq_ignore_ascii_case(name))
}
