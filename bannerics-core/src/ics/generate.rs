//! Assembly of the full calendar document.

use chrono::{DateTime, Utc};

use super::text::{escape_text, fold_line};
use super::{CalendarMetadata, RandomUid, UidSource};
use crate::error::{ExportError, ExportResult};
use crate::event::NormalizedEvent;

const PRODID: &str = "-//bannerics//EN";

/// Generate the .ics document for a set of normalized events, stamped with
/// the current instant and random UIDs.
///
/// See [`generate_ics_at`] for the deterministic variant used in tests.
pub fn generate_ics(
    events: &[NormalizedEvent],
    metadata: &CalendarMetadata,
) -> ExportResult<String> {
    generate_ics_at(events, metadata, Utc::now(), &mut RandomUid)
}

/// Generate the document with an explicit generation instant and UID source.
///
/// All events share one DTSTAMP; each gets a fresh UID from `uids`. An
/// empty event list is [`ExportError::NoEvents`]; no document is produced.
pub fn generate_ics_at(
    events: &[NormalizedEvent],
    metadata: &CalendarMetadata,
    stamp: DateTime<Utc>,
    uids: &mut dyn UidSource,
) -> ExportResult<String> {
    if events.is_empty() {
        return Err(ExportError::NoEvents);
    }

    let dtstamp = stamp.format("%Y%m%dT%H%M%SZ").to_string();

    let mut lines: Vec<String> = Vec::new();
    lines.push("BEGIN:VCALENDAR".to_string());
    lines.push(format!("PRODID:{PRODID}"));
    lines.push("VERSION:2.0".to_string());
    lines.push("CALSCALE:GREGORIAN".to_string());
    lines.push("METHOD:PUBLISH".to_string());
    lines.push(format!("X-WR-CALNAME:{}", metadata.name));
    lines.push(format!("X-WR-TIMEZONE:{}", metadata.tzid));

    for event in events {
        lines.push("BEGIN:VEVENT".to_string());
        lines.push(format!("UID:{}", uids.next_uid(stamp)));
        lines.push(format!("DTSTAMP:{dtstamp}"));
        lines.push(format!("SUMMARY:{}", escape_text(&event.summary)));
        if !event.description.is_empty() {
            lines.push(fold_line(&format!(
                "DESCRIPTION:{}",
                escape_text(&event.description)
            )));
        }
        if !event.location.is_empty() {
            lines.push(format!("LOCATION:{}", escape_text(&event.location)));
        }
        lines.push(format!(
            "DTSTART;TZID={}:{}",
            metadata.tzid,
            event.start.format("%Y%m%dT%H%M%S")
        ));
        lines.push(format!(
            "DTEND;TZID={}:{}",
            metadata.tzid,
            event.end.format("%Y%m%dT%H%M%S")
        ));
        if event.is_recurring() {
            lines.push(format!(
                "RRULE:FREQ=WEEKLY;BYDAY={};UNTIL={}",
                event.byday_value(),
                event.until.format("%Y%m%dT%H%M%S")
            ));
        }
        lines.push("END:VEVENT".to_string());
    }

    lines.push("END:VCALENDAR".to_string());

    let mut document = lines.join("\r\n");
    document.push_str("\r\n");
    Ok(document)
}
