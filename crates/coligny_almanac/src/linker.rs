//! Named-moon linking over a classified phase timeline.
//!
//! Full Moon samples are matched against the named-moon records by calendar
//! day. Unmatched full moons take the generic fallback: name "Full Moon",
//! the generic-phase description, and a poem drawn uniformly from the fixed
//! pool. The randomness source is injected so tests can seed it; nothing
//! else in the linker is nondeterministic.

use rand::Rng;

use coligny_moon::{MoonPhase, PhaseSample};

use crate::moons::NamedFullMoon;

/// Poems attached to full moons that no record names.
pub const FALLBACK_POEMS: [&str; 6] = [
    "The moon glows gently this month, unnamed yet full of secrets.",
    "A nameless moon rises, wrapped in silver mystery.",
    "No name graces this full moon, yet it hums with quiet magic.",
    "This moon wears no title, only a cloak of shimmering wonder.",
    "A soft and silent full moon drifts through the veil, untethered by name.",
    "The full moon of this month remains unnamed, like a forgotten spell in the night sky.",
];

/// Generic description for a phase. Three phases carry custom text; the
/// rest share the stock line.
pub const fn generic_phase_description(phase: MoonPhase) -> &'static str {
    match phase {
        MoonPhase::NewMoon => {
            "The start of a new lunar cycle, symbolising new beginnings and intentions."
        }
        MoonPhase::FirstQuarter => "A time for taking action on your goals as the moon waxes.",
        MoonPhase::LastQuarter => {
            "A reflective phase as the moon wanes, encouraging release and gratitude."
        }
        _ => "No description available.",
    }
}

/// One poem from the fallback pool, chosen uniformly.
pub fn random_fallback_poem<R: Rng>(rng: &mut R) -> &'static str {
    FALLBACK_POEMS[rng.gen_range(0..FALLBACK_POEMS.len())]
}

/// A phase sample annotated with moon lore.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedSample {
    pub sample: PhaseSample,
    /// Named-moon name for full moons ("Full Moon" when unnamed);
    /// `None` for every other phase.
    pub moon_name: Option<String>,
    pub description: String,
    pub poem: Option<String>,
}

/// Annotate a phase timeline with named-moon records.
///
/// Matching is by equal calendar day. Input order is preserved; one output
/// per input sample.
pub fn link_full_moons<R: Rng>(
    samples: &[PhaseSample],
    named: &[NamedFullMoon],
    rng: &mut R,
) -> Vec<AnnotatedSample> {
    samples
        .iter()
        .map(|&sample| {
            if sample.phase != MoonPhase::FullMoon {
                return AnnotatedSample {
                    sample,
                    moon_name: None,
                    description: generic_phase_description(sample.phase).to_string(),
                    poem: None,
                };
            }
            match named.iter().find(|record| record.date == sample.date) {
                Some(record) => AnnotatedSample {
                    sample,
                    moon_name: Some(record.name.clone()),
                    description: record.description.clone(),
                    poem: record.poem.clone(),
                },
                None => AnnotatedSample {
                    sample,
                    moon_name: Some("Full Moon".to_string()),
                    description: generic_phase_description(MoonPhase::FullMoon).to_string(),
                    poem: Some(random_fallback_poem(rng).to_string()),
                },
            }
        })
        .collect()
}
