//! Almanac composition over the coligny engine crates.
//!
//! This crate provides:
//! - The named-full-moon linker: annotate classified days with moon lore,
//!   falling back deterministically-or-randomly when no record matches
//! - Read-only festival reference queries (by name, month, type, linked
//!   moon/phase)
//! - Upcoming-event windows over festivals and phase timelines
//! - Per-day "sheets" merging the phase timeline with Celtic dates
//! - serde_json loaders for the external reference sets

pub mod error;
pub mod events;
pub mod festival;
pub mod linker;
pub mod moons;
pub mod sheet;

pub use error::AlmanacError;
pub use events::{UpcomingEvent, upcoming_events};
pub use festival::{Festival, FestivalFilter, festivals_for_phase, festivals_from_reader,
    festivals_from_str, filter_festivals};
pub use linker::{
    AnnotatedSample, FALLBACK_POEMS, generic_phase_description, link_full_moons,
    random_fallback_poem,
};
pub use moons::{NamedFullMoon, named_moons_from_reader, named_moons_from_str};
pub use sheet::{DaySheet, day_sheets};
