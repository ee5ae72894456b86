//! Export records to an .ics file.

use std::path::Path;

use anyhow::{Context, Result};
use bannerics_core::ics::{self, CalendarMetadata};
use bannerics_core::normalize;
use owo_colors::OwoColorize;

pub fn run(
    input: Option<&Path>,
    output: &Path,
    calendar_name: String,
    timezone: String,
) -> Result<()> {
    timezone
        .parse::<chrono_tz::Tz>()
        .map_err(|_| anyhow::anyhow!("Unknown timezone: {timezone}"))?;

    let records = super::read_records(input)?;

    let mut events = Vec::new();
    for (index, record) in records.iter().enumerate() {
        match normalize::normalize(record) {
            Ok(event) => events.push(event),
            Err(reason) => {
                eprintln!(
                    "  {} {} ({})",
                    "skipped".yellow(),
                    super::record_label(record, index),
                    reason
                );
            }
        }
    }

    if events.is_empty() {
        anyhow::bail!(
            "No course records could be converted; nothing was written.\n\
            Check that the input is the record export from the registration page."
        );
    }

    let metadata = CalendarMetadata {
        name: calendar_name,
        tzid: timezone,
    };
    let content = ics::generate_ics(&events, &metadata)?;

    std::fs::write(output, &content)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "{}",
        format!("Exported {} events to {}", events.len(), output.display()).green()
    );

    Ok(())
}
