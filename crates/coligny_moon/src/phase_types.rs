//! Lunar phase enumeration and per-day sample type.

use coligny_time::CalendarDate;

/// The eight phases of the lunation cycle, plus the degenerate `Unknown`
/// outcome reserved for age values no interval claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
    Unknown,
}

/// The eight real phases in cycle order (excludes `Unknown`).
pub const ALL_PHASES: [MoonPhase; 8] = [
    MoonPhase::NewMoon,
    MoonPhase::WaxingCrescent,
    MoonPhase::FirstQuarter,
    MoonPhase::WaxingGibbous,
    MoonPhase::FullMoon,
    MoonPhase::WaningGibbous,
    MoonPhase::LastQuarter,
    MoonPhase::WaningCrescent,
];

impl MoonPhase {
    /// Display name of the phase.
    pub const fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
            Self::Unknown => "Unknown Phase",
        }
    }

    /// Glyph for the phase.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::NewMoon => "\u{1F311}",
            Self::WaxingCrescent => "\u{1F312}",
            Self::FirstQuarter => "\u{1F313}",
            Self::WaxingGibbous => "\u{1F314}",
            Self::FullMoon => "\u{1F315}",
            Self::WaningGibbous => "\u{1F316}",
            Self::LastQuarter => "\u{1F317}",
            Self::WaningCrescent => "\u{1F318}",
            Self::Unknown => "\u{2753}",
        }
    }
}

/// One classified calendar day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseSample {
    pub date: CalendarDate,
    pub phase: MoonPhase,
    /// Glyph carried alongside the phase (same table row).
    pub icon: &'static str,
    /// Illuminated fraction from the ephemeris adapter, unmodified.
    pub illumination_pct: f64,
}

impl PhaseSample {
    /// Human-readable description of the sample.
    pub fn description(&self) -> String {
        format!(
            "{} phase with {:.2}% illumination.",
            self.phase.name(),
            self.illumination_pct
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_phases_count_and_order() {
        assert_eq!(ALL_PHASES.len(), 8);
        assert_eq!(ALL_PHASES[0], MoonPhase::NewMoon);
        assert_eq!(ALL_PHASES[7], MoonPhase::WaningCrescent);
    }

    #[test]
    fn names_and_icons_nonempty() {
        for phase in ALL_PHASES {
            assert!(!phase.name().is_empty());
            assert!(!phase.icon().is_empty());
        }
        assert_eq!(MoonPhase::Unknown.name(), "Unknown Phase");
        assert_eq!(MoonPhase::Unknown.icon(), "\u{2753}");
    }

    #[test]
    fn description_format() {
        let sample = PhaseSample {
            date: CalendarDate::new(2024, 1, 25).unwrap(),
            phase: MoonPhase::FullMoon,
            icon: MoonPhase::FullMoon.icon(),
            illumination_pct: 98.612_3,
        };
        assert_eq!(
            sample.description(),
            "Full Moon phase with 98.61% illumination."
        );
    }
}
