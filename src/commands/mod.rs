pub mod check;
pub mod export;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use bannerics_core::record::RawCourseRecord;

/// Read the record array from a file, or stdin when no path is given.
pub fn read_records(input: Option<&Path>) -> Result<Vec<RawCourseRecord>> {
    let text = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read records from stdin")?;
            buffer
        }
    };

    serde_json::from_str(&text).context("Input is not a JSON array of course records")
}

/// What to call a record in skip messages when its title is blank.
pub fn record_label(record: &RawCourseRecord, index: usize) -> String {
    let title = record.title.trim();
    if title.is_empty() {
        format!("record #{}", index + 1)
    } else {
        title.to_string()
    }
}
