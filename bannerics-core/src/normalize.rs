//! Record normalization: free-form page strings into [`NormalizedEvent`]s.
//!
//! Only a bad date range or time range fails a record. Everything else
//! (section, instructor, CRN, location parts, unknown weekday names)
//! degrades to an omitted field, since source pages vary.

use chrono::{Datelike, Days, NaiveDate, NaiveTime, Weekday};

use crate::error::{ExportError, ExportResult};
use crate::event::NormalizedEvent;
use crate::record::RawCourseRecord;

/// Delimiter between the term start and term end date on the page.
const DATE_RANGE_DELIMITER: &str = "--";

/// Normalize one raw course record.
pub fn normalize(record: &RawCourseRecord) -> ExportResult<NormalizedEvent> {
    let (term_start, term_end) = parse_date_range(&record.date_range)?;
    let (start_time, end_time) = parse_time_range(&record.time_range)?;

    let by_day = meeting_days(&record.days);
    let first_date = first_occurrence_on_or_after(term_start, &by_day);

    Ok(NormalizedEvent {
        summary: compose_summary(record),
        description: compose_description(record, term_start, term_end),
        location: record.location.join(),
        start: first_date.and_time(start_time),
        end: first_date.and_time(end_time),
        by_day,
        until: term_end.and_hms_opt(23, 59, 59).unwrap(),
    })
}

/// Parse `MM/DD/YYYY -- MM/DD/YYYY` into term start and end dates.
fn parse_date_range(text: &str) -> ExportResult<(NaiveDate, NaiveDate)> {
    let err = || ExportError::DateRange(text.to_string());

    let (start_text, end_text) = text.split_once(DATE_RANGE_DELIMITER).ok_or_else(err)?;
    let start = parse_date(start_text).ok_or_else(err)?;
    let end = parse_date(end_text).ok_or_else(err)?;
    Ok((start, end))
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%m/%d/%Y").ok()
}

/// Parse a `H:MM AM - H:MM PM` pair into 24-hour times.
///
/// An end not strictly after the start is rejected; overnight meetings are
/// not supported.
fn parse_time_range(text: &str) -> ExportResult<(NaiveTime, NaiveTime)> {
    let err = || ExportError::TimeRange(text.to_string());

    let (start_text, end_text) = text.split_once('-').ok_or_else(err)?;
    let start = parse_clock(start_text).ok_or_else(err)?;
    let end = parse_clock(end_text).ok_or_else(err)?;
    if end <= start {
        return Err(err());
    }
    Ok((start, end))
}

/// Parse one 12-hour clock time, tolerating arbitrary internal whitespace
/// and meridiem case ("09:30 AM", "9:30am", "12 : 00 pm").
fn parse_clock(text: &str) -> Option<NaiveTime> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    NaiveTime::parse_from_str(&compact, "%I:%M%p").ok()
}

/// Map weekday names to `chrono::Weekday`, keeping input order, dropping
/// duplicates and anything unrecognized.
fn meeting_days(names: &[String]) -> Vec<Weekday> {
    let mut days = Vec::new();
    for name in names {
        if let Ok(day) = name.trim().parse::<Weekday>() {
            if !days.contains(&day) {
                days.push(day);
            }
        }
    }
    days
}

/// First date on or after `start` whose weekday is in `days`.
///
/// DTSTART must be the first actual meeting date, not the raw term start:
/// RRULE-expanding clients materialize a spurious extra occurrence on a
/// DTSTART that does not match BYDAY. An empty `days` means a single
/// non-recurring event on the term start itself. Every weekday is tried
/// once within 7 days, so the fallback is unreachable for non-empty sets.
fn first_occurrence_on_or_after(start: NaiveDate, days: &[Weekday]) -> NaiveDate {
    if days.is_empty() {
        return start;
    }
    (0..7)
        .filter_map(|offset| start.checked_add_days(Days::new(offset)))
        .find(|date| days.contains(&date.weekday()))
        .unwrap_or(start)
}

fn compose_summary(record: &RawCourseRecord) -> String {
    let title = record.title.trim();
    let section = record.section.trim();
    if section.is_empty() {
        title.to_string()
    } else {
        format!("{title} | {section}")
    }
}

/// Newline-joined CRN, instructor and term lines; blank fields are omitted
/// rather than rendered as empty placeholders.
fn compose_description(record: &RawCourseRecord, start: NaiveDate, end: NaiveDate) -> String {
    let mut lines = Vec::new();

    let crn = record.crn.trim();
    if !crn.is_empty() {
        lines.push(format!("CRN: {crn}"));
    }

    let instructor = record.instructor.trim();
    if !instructor.is_empty() {
        lines.push(format!("Instructor: {instructor}"));
    }

    lines.push(format!(
        "From {} to {}",
        start.format("%m/%d/%Y"),
        end.format("%m/%d/%Y")
    ));

    lines.join("\n")
}
