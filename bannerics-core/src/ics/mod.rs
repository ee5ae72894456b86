//! ICS document generation.
//!
//! Writes RFC 5545 calendar text directly instead of going through a
//! calendar library: field order, 74-column folding and escaping are part
//! of the contract with downstream calendar apps, so the output has to be
//! byte-stable.

mod generate;
mod text;

pub use generate::{generate_ics, generate_ics_at};
pub use text::{escape_text, fold_line};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Calendar-level metadata embedded in the .ics header.
#[derive(Debug, Clone)]
pub struct CalendarMetadata {
    /// Human-readable calendar name (X-WR-CALNAME)
    pub name: String,
    /// IANA timezone identifier applied to every DTSTART/DTEND
    /// (X-WR-TIMEZONE). No VTIMEZONE block is emitted; the importing app
    /// has to recognize the named zone.
    pub tzid: String,
}

impl Default for CalendarMetadata {
    fn default() -> Self {
        Self {
            name: "UIUC Courses".to_string(),
            tzid: "America/Chicago".to_string(),
        }
    }
}

/// Source of per-event UIDs, injectable so tests can pin the output.
pub trait UidSource {
    /// Produce a UID unique within the run. `stamp` is the shared
    /// generation timestamp.
    fn next_uid(&mut self, stamp: DateTime<Utc>) -> String;
}

/// Default UID source: a random component plus the generation timestamp.
#[derive(Debug, Default)]
pub struct RandomUid;

impl UidSource for RandomUid {
    fn next_uid(&mut self, stamp: DateTime<Utc>) -> String {
        format!("{}-{}@bannerics", Uuid::new_v4().simple(), stamp.timestamp())
    }
}
