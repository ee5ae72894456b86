//! Normalized events, ready for ICS encoding.

use chrono::{NaiveDateTime, Weekday};

/// One course meeting pattern with all text and date/time fields resolved.
///
/// `start`/`end` are local civil date-times on the *first actual occurrence*
/// of the meeting (which may be later than the term start, see
/// [`crate::normalize`]). An empty `by_day` means a single, non-recurring
/// event; otherwise the start date's weekday is always a member of `by_day`.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedEvent {
    pub summary: String,
    /// Newline-joined CRN / instructor / term lines; may be empty
    pub description: String,
    /// Comma-joined location parts; may be empty
    pub location: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Weekly recurrence days in stable input order
    pub by_day: Vec<Weekday>,
    /// Term end at 23:59:59 local, the RRULE UNTIL bound
    pub until: NaiveDateTime,
}

impl NormalizedEvent {
    pub fn is_recurring(&self) -> bool {
        !self.by_day.is_empty()
    }

    /// Comma-joined BYDAY value, e.g. "MO,WE,FR".
    pub fn byday_value(&self) -> String {
        self.by_day
            .iter()
            .map(|day| byday_code(*day))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Two-letter RFC 5545 weekday code.
pub fn byday_code(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "SU",
        Weekday::Mon => "MO",
        Weekday::Tue => "TU",
        Weekday::Wed => "WE",
        Weekday::Thu => "TH",
        Weekday::Fri => "FR",
        Weekday::Sat => "SA",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn byday_value_joins_codes_in_order() {
        let event = NormalizedEvent {
            summary: String::new(),
            description: String::new(),
            location: String::new(),
            start: NaiveDate::from_ymd_opt(2025, 8, 25)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 8, 25)
                .unwrap()
                .and_hms_opt(10, 45, 0)
                .unwrap(),
            by_day: vec![Weekday::Mon, Weekday::Wed, Weekday::Fri],
            until: NaiveDate::from_ymd_opt(2025, 12, 10)
                .unwrap()
                .and_hms_opt(23, 59, 59)
                .unwrap(),
        };

        assert!(event.is_recurring());
        assert_eq!(event.byday_value(), "MO,WE,FR");
    }

    #[test]
    fn byday_codes_cover_the_week() {
        let week = [
            (Weekday::Sun, "SU"),
            (Weekday::Mon, "MO"),
            (Weekday::Tue, "TU"),
            (Weekday::Wed, "WE"),
            (Weekday::Thu, "TH"),
            (Weekday::Fri, "FR"),
            (Weekday::Sat, "SA"),
        ];
        for (day, code) in week {
            assert_eq!(byday_code(day), code);
        }
    }
}
