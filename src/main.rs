mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bannerics")]
#[command(about = "Export scraped course schedules to an .ics calendar file")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert course records to an .ics file
    Export {
        /// JSON file with an array of course records (stdin if omitted)
        input: Option<PathBuf>,

        /// Where to write the calendar
        #[arg(short, long, default_value = "courses.ics")]
        output: PathBuf,

        /// Calendar display name (X-WR-CALNAME)
        #[arg(long, default_value = "UIUC Courses")]
        calendar_name: String,

        /// IANA timezone applied to every event
        #[arg(long, default_value = "America/Chicago")]
        timezone: String,
    },
    /// Parse records and show what would be exported, without writing
    Check {
        /// JSON file with an array of course records (stdin if omitted)
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            input,
            output,
            calendar_name,
            timezone,
        } => commands::export::run(input.as_deref(), &output, calendar_name, timezone),
        Commands::Check { input } => commands::check::run(input.as_deref()),
    }
}
