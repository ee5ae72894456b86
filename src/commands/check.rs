//! Dry run: show what would be exported, without writing anything.

use std::path::Path;

use anyhow::Result;
use bannerics_core::event::NormalizedEvent;
use bannerics_core::normalize;
use owo_colors::OwoColorize;

pub fn run(input: Option<&Path>) -> Result<()> {
    let records = super::read_records(input)?;

    let mut exportable = 0;
    let mut skipped = 0;

    for (index, record) in records.iter().enumerate() {
        match normalize::normalize(record) {
            Ok(event) => {
                exportable += 1;
                println!(
                    "  {} {} {}",
                    "+".green(),
                    event.summary,
                    render_schedule(&event).dimmed()
                );
            }
            Err(reason) => {
                skipped += 1;
                println!(
                    "  {} {} ({})",
                    "-".red(),
                    super::record_label(record, index),
                    reason
                );
            }
        }
    }

    println!("\n{exportable} exportable, {skipped} skipped");

    Ok(())
}

fn render_schedule(event: &NormalizedEvent) -> String {
    let start = event.start.format("%Y-%m-%d %H:%M");
    if event.is_recurring() {
        format!(
            "{} weekly on {} until {}",
            start,
            event.byday_value(),
            event.until.format("%Y-%m-%d")
        )
    } else {
        format!("{start} (single meeting)")
    }
}
