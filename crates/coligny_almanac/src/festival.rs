//! Festival reference records and read-only queries.
//!
//! Festivals are external, caller-supplied data. All queries are
//! case-insensitive filters over a slice; nothing here persists or mutates.

use std::io::Read;

use coligny_time::{CalendarDate, month_name};

use crate::error::AlmanacError;

/// One festival or special day.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Festival {
    pub name: String,
    pub date: CalendarDate,
    /// Festival category ("fire festival", "cross-quarter", ...).
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    /// Named moon this festival follows, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_moon: Option<String>,
    /// Lunar phase this festival follows, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_phase: Option<String>,
}

/// Conjunctive festival filter; `None` criteria match everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct FestivalFilter<'a> {
    /// Exact festival name, case-insensitive.
    pub name: Option<&'a str>,
    /// Gregorian month name, case-insensitive.
    pub month: Option<&'a str>,
    /// Festival type, case-insensitive.
    pub kind: Option<&'a str>,
}

/// Festivals passing every set criterion, in input order.
pub fn filter_festivals<'a>(
    festivals: &'a [Festival],
    filter: &FestivalFilter<'_>,
) -> Vec<&'a Festival> {
    festivals
        .iter()
        .filter(|f| {
            filter
                .name
                .map_or(true, |name| f.name.eq_ignore_ascii_case(name))
        })
        .filter(|f| {
            filter
                .month
                .map_or(true, |month| month_name(f.date.month).eq_ignore_ascii_case(month))
        })
        .filter(|f| {
            filter
                .kind
                .map_or(true, |kind| f.kind.eq_ignore_ascii_case(kind))
        })
        .collect()
}

/// Festivals linked to a named moon or a lunar phase.
///
/// A festival's `linked_moon` is consulted first; a festival that carries
/// one is never matched by `linked_phase`, even when the moon query misses.
pub fn festivals_for_phase<'a>(
    festivals: &'a [Festival],
    moon_name: Option<&str>,
    phase: Option<&str>,
) -> Vec<&'a Festival> {
    festivals
        .iter()
        .filter(|f| {
            if let (Some(moon), Some(linked)) = (moon_name, f.linked_moon.as_deref()) {
                linked.eq_ignore_ascii_case(moon)
            } else if let (Some(phase), Some(linked)) = (phase, f.linked_phase.as_deref()) {
                linked.eq_ignore_ascii_case(phase)
            } else {
                false
            }
        })
        .collect()
}

/// Load festival records from a JSON array.
pub fn festivals_from_str(json: &str) -> Result<Vec<Festival>, AlmanacError> {
    Ok(serde_json::from_str(json)?)
}

/// Load festival records from a reader.
pub fn festivals_from_reader<R: Read>(reader: R) -> Result<Vec<Festival>, AlmanacError> {
    Ok(serde_json::from_reader(reader)?)
}
