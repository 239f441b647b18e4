//! `hours` CLI — format and convert weekly opening hours from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Format per-day events (stdin → stdout)
//! echo '{"monday":[{"type":"open","value":36000},{"type":"close","value":64800}]}' \
//!   | hours format-daily
//!
//! # Convert per-day events to weekly intervals
//! hours to-weekly -i daily.json -o weekly.json
//!
//! # Format weekly intervals, Sunday first
//! hours --first-day sunday format-weekly -i weekly.json
//!
//! # Read the first day of week from a settings file
//! hours --config settings.toml format-daily -i daily.json
//! ```
//!
//! Set `RUST_LOG=debug` to log the parsed input to stderr.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hours_engine::{
    parse_daily_hours, DailyHours, EngineSettings, Event, FirstDayOfWeek, HoursService, Interval,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hours", version, about = "Weekly opening hours formatter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML settings file with `[settings] first-day-of-week`
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// First day of the formatted week: monday or sunday (overrides --config)
    #[arg(long, global = true)]
    first_day: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Format per-day open/close events as human-readable text
    FormatDaily {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Convert per-day open/close events to a weekly interval list
    ToWeekly {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Format a weekly interval list as human-readable text
    FormatWeekly {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref(), cli.first_day.as_deref())?;
    let service = HoursService::new(settings);

    match cli.command {
        Commands::FormatDaily { input, output } => {
            let hours = read_daily_hours(input.as_deref())?;
            let text = service.format_from_daily_events(&hours)?;
            write_output(output.as_deref(), &text)?;
        }
        Commands::ToWeekly { input, output } => {
            let hours = read_daily_hours(input.as_deref())?;
            let weekly = service.convert_daily_to_weekly(&hours)?;
            let json = serde_json::to_string_pretty(&weekly)?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::FormatWeekly { input, output } => {
            let raw = read_input(input.as_deref())?;
            let intervals: Vec<Interval> =
                serde_json::from_str(&raw).context("Failed to parse weekly intervals JSON")?;
            let text = service.format_from_weekly_intervals(&intervals)?;
            write_output(output.as_deref(), &text)?;
        }
    }

    Ok(())
}

/// Resolve settings from the optional config file, then the `--first-day` flag.
fn load_settings(config: Option<&Path>, first_day: Option<&str>) -> Result<EngineSettings> {
    let mut settings = match config {
        Some(path) => EngineSettings::from_file(path)?,
        None => EngineSettings::default(),
    };
    if let Some(name) = first_day {
        settings.first_day_of_week = FirstDayOfWeek::try_from(name.to_string())?;
    }
    debug!(first_day_of_week = %settings.first_day_of_week, "settings resolved");
    Ok(settings)
}

/// Parse a JSON object of day name → event list, keeping key order.
fn read_daily_hours(path: Option<&str>) -> Result<DailyHours> {
    let raw = read_input(path)?;
    let object: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(&raw).context("Failed to parse daily hours JSON")?;

    let mut entries = Vec::with_capacity(object.len());
    for (name, value) in object {
        let events: Vec<Event> = serde_json::from_value(value)
            .with_context(|| format!("Failed to parse events for '{}'", name))?;
        entries.push((name, events));
    }
    Ok(parse_daily_hours(entries)?)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
