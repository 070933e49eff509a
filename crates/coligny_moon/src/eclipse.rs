//! Eclipse-adjacent event markers.
//!
//! These are estimates, not predictions: a lunar eclipse can only occur at a
//! full moon and a solar eclipse at a new moon, so the markers sit on the
//! next syzygy of each kind. No node-crossing geometry is checked; most
//! marked syzygies carry no actual eclipse. Callers wanting real eclipse
//! prediction need shadow geometry this crate deliberately does not do.

use coligny_time::Moment;

use crate::ephemeris::MoonEphemeris;

/// Which syzygy the marker is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EclipseKind {
    /// Full-moon-adjacent (lunar eclipses happen at full moon).
    Lunar,
    /// New-moon-adjacent (solar eclipses happen at new moon).
    Solar,
}

impl EclipseKind {
    /// Stable identifier for serialized output.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Lunar => "lunar-eclipse",
            Self::Solar => "solar-eclipse",
        }
    }
}

/// A derived eclipse-adjacent event. Never stored; recomputed per query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipseMarker {
    pub kind: EclipseKind,
    pub moment: Moment,
    pub title: &'static str,
    pub description: &'static str,
}

/// The two upcoming eclipse-adjacent markers after `now`: one lunar (at the
/// next full moon), one solar (at the next new moon), in that order.
pub fn next_eclipse_markers<E: MoonEphemeris>(eph: &E, now: Moment) -> [EclipseMarker; 2] {
    let lunar = EclipseMarker {
        kind: EclipseKind::Lunar,
        moment: eph.next_full_moon(now),
        title: "Lunar Eclipse",
        description: "Shadow and light embrace in celestial dance, a moment between worlds.",
    };
    let solar = EclipseMarker {
        kind: EclipseKind::Solar,
        moment: eph.next_new_moon(now),
        title: "Solar Eclipse",
        description: "A rare solar eclipse is on the horizon.",
    };
    [lunar, solar]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::MeanLunation;

    #[test]
    fn two_markers_both_in_the_future() {
        let now = Moment::new(2024, 1, 1, 0, 0, 0.0);
        let markers = next_eclipse_markers(&MeanLunation, now);
        assert_eq!(markers.len(), 2);
        for marker in &markers {
            assert!(marker.moment.day_number() >= now.day_number());
        }
    }

    #[test]
    fn lunar_first_solar_second() {
        let markers = next_eclipse_markers(&MeanLunation, Moment::new(2024, 1, 1, 0, 0, 0.0));
        assert_eq!(markers[0].kind, EclipseKind::Lunar);
        assert_eq!(markers[1].kind, EclipseKind::Solar);
        assert_eq!(markers[0].title, "Lunar Eclipse");
        assert_eq!(markers[1].title, "Solar Eclipse");
    }

    #[test]
    fn markers_sit_on_adapter_syzygies() {
        let eph = MeanLunation;
        let now = Moment::new(2025, 6, 15, 12, 0, 0.0);
        let markers = next_eclipse_markers(&eph, now);
        assert_eq!(markers[0].moment, eph.next_full_moon(now));
        assert_eq!(markers[1].moment, eph.next_new_moon(now));
    }

    #[test]
    fn slugs_are_stable() {
        assert_eq!(EclipseKind::Lunar.slug(), "lunar-eclipse");
        assert_eq!(EclipseKind::Solar.slug(), "solar-eclipse");
    }
}
