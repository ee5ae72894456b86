//! Raw course records as handed over by the page scraper.
//!
//! These are free-form strings in the shape the registration page shows
//! them. The scraper (or any other producer) only has to fill in what it
//! found; every field defaults to empty, and only the date range and time
//! range have to parse for a record to survive normalization.

use serde::{Deserialize, Serialize};

/// One scraped course listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawCourseRecord {
    /// Course title, e.g. "Intro to Algorithms"
    pub title: String,
    /// Subject/course/section display code, e.g. "CS 374 ADA"
    pub section: String,
    /// Term start and end, `MM/DD/YYYY -- MM/DD/YYYY`
    pub date_range: String,
    /// Weekday names marked active on the meeting pattern ("Monday", ...).
    /// Unrecognized names are ignored.
    pub days: Vec<String>,
    /// 12-hour start/end pair, e.g. "09:30 AM - 10:45 AM"
    pub time_range: String,
    pub location: LocationParts,
    pub instructor: String,
    /// Course reference number
    pub crn: String,
}

/// Location as the page splits it; each part may be blank.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationParts {
    pub campus: String,
    pub building: String,
    pub room: String,
}

impl LocationParts {
    /// Comma-joined non-empty parts, campus first.
    pub fn join(&self) -> String {
        [&self.campus, &self.building, &self.room]
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_deserialize_with_missing_fields() {
        let record: RawCourseRecord = serde_json::from_str(
            r#"{"title":"Linear Algebra","date_range":"01/21/2025 -- 05/07/2025","time_range":"1:00 PM - 1:50 PM"}"#,
        )
        .unwrap();

        assert_eq!(record.title, "Linear Algebra");
        assert!(record.section.is_empty());
        assert!(record.days.is_empty());
        assert!(record.instructor.is_empty());
        assert!(record.location.join().is_empty());
    }

    #[test]
    fn location_join_skips_blank_parts() {
        let location = LocationParts {
            campus: "Urbana-Champaign".to_string(),
            building: String::new(),
            room: " 1404 ".to_string(),
        };
        assert_eq!(location.join(), "Urbana-Champaign, 1404");
    }
}
