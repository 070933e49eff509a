//! Lunar phase classification and eclipse-adjacent event estimation.
//!
//! This crate provides:
//! - The `MoonEphemeris` adapter trait and a bundled mean-lunation
//!   implementation (any correct astronomical source may substitute)
//! - Day-by-day phase classification over the declarative age-interval table
//! - Next lunar/solar eclipse marker estimation from upcoming syzygies

pub mod eclipse;
pub mod ephemeris;
pub mod error;
pub mod phase;
pub mod phase_types;

pub use eclipse::{EclipseKind, EclipseMarker, next_eclipse_markers};
pub use ephemeris::{MeanLunation, MoonEphemeris, SYNODIC_MONTH_DAYS};
pub use error::PhaseError;
pub use phase::{classify, classify_range, phase_from_age};
pub use phase_types::{ALL_PHASES, MoonPhase, PhaseSample};
