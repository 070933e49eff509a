//! Named full moon reference records.
//!
//! The record set is external, read-only data supplied by the caller.
//! Loading returns a fresh owned snapshot; the engine never caches or
//! mutates it.

use std::io::Read;

use coligny_time::CalendarDate;

use crate::error::AlmanacError;

/// A traditionally named full moon (Wolf Moon, Harvest Moon, ...).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NamedFullMoon {
    pub date: CalendarDate,
    pub name: String,
    pub description: String,
    /// Optional verse attached to the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poem: Option<String>,
}

/// Load named-moon records from a JSON array.
pub fn named_moons_from_str(json: &str) -> Result<Vec<NamedFullMoon>, AlmanacError> {
    Ok(serde_json::from_str(json)?)
}

/// Load named-moon records from a reader.
pub fn named_moons_from_reader<R: Read>(reader: R) -> Result<Vec<NamedFullMoon>, AlmanacError> {
    Ok(serde_json::from_reader(reader)?)
}
