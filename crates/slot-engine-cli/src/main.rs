//! `slots` CLI — generate, check, and normalize lesson time slots.
//!
//! ## Usage
//!
//! ```sh
//! # Candidate slots for the default 08:00-16:30 grid
//! slots generate --duration 45
//!
//! # Merge a JSON array of {startTime, endTime} ranges
//! echo '[{"startTime":"09:00","endTime":"11:00"},{"startTime":"11:00","endTime":"13:00"}]' | slots merge
//!
//! # Collapse slot strings into ranges
//! echo '["09:00-10:00","10:00-11:00"]' | slots ranges
//!
//! # Is a 60-minute class at 10:00 bookable?
//! slots check --slot 10:00-11:00 --duration 60 -i day.json
//!
//! # Classified booking grid for Monday, 12-hour display
//! slots grid --day monday -i teacher.json --format 12h
//! ```

mod config;

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use slot_engine::weekly::parse_day_key;
use slot_engine::{
    classify_start, convert_slots_to_ranges, format_time_slot_to_12_hour, free_ranges,
    generate_time_slots, merge_overlapping_ranges, parse_booked_slots, parse_slot_start,
    AvailabilityRange, TimeOfDay, TimeSlot, WeeklyAvailability,
};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Lesson slot scheduling: availability, bookings, and booking grids"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML config file with [grid] defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace); overrides RUST_LOG
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum TimeFormat {
    /// "09:00-10:00"
    #[value(name = "24h")]
    TwentyFour,
    /// "9:00 AM-10:00 AM"
    #[value(name = "12h")]
    Twelve,
}

#[derive(Subcommand)]
enum Commands {
    /// List candidate slots for the booking grid
    Generate {
        /// Grid start, e.g. "08:00"
        #[arg(long)]
        start: Option<TimeOfDay>,
        /// Grid end, e.g. "16:30"
        #[arg(long)]
        end: Option<TimeOfDay>,
        /// Class length in minutes
        #[arg(short, long)]
        duration: Option<u32>,
        #[arg(long, value_enum, default_value = "24h")]
        format: TimeFormat,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Merge overlapping or touching availability ranges
    Merge {
        /// Input JSON array of ranges (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Collapse a JSON array of slot strings into contiguous ranges
    Ranges {
        #[arg(short, long)]
        input: Option<String>,
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Availability minus bookings, as merged ranges
    Free {
        /// Input JSON {"ranges": [...], "booked": [...]}
        #[arg(short, long)]
        input: Option<String>,
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Classify one slot as available, booked, or unavailable
    Check {
        /// Candidate slot, e.g. "10:00-11:00"; only its start is used
        #[arg(long, value_parser = parse_slot_start)]
        slot: TimeOfDay,
        /// Class length in minutes (defaults to the config, then 60)
        #[arg(short, long)]
        duration: Option<u32>,
        /// Input JSON {"ranges": [...], "booked": [...]}
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Classified booking grid for one weekday
    Grid {
        /// Lowercase weekday, e.g. "monday"
        #[arg(long)]
        day: String,
        #[arg(long)]
        start: Option<TimeOfDay>,
        #[arg(long)]
        end: Option<TimeOfDay>,
        #[arg(short, long)]
        duration: Option<u32>,
        #[arg(long, value_enum, default_value = "24h")]
        format: TimeFormat,
        /// Input JSON {"availability": {"monday": [...]}, "booked": [...]}
        #[arg(short, long)]
        input: Option<String>,
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// Ranges plus raw booked entries for one day. Booked entries may be null,
/// non-strings, or malformed; those are skipped.
#[derive(Deserialize)]
struct DayInput {
    #[serde(default)]
    ranges: Vec<AvailabilityRange>,
    #[serde(default)]
    booked: Vec<Value>,
}

#[derive(Deserialize)]
struct WeekInput {
    #[serde(default)]
    availability: WeeklyAvailability,
    #[serde(default)]
    booked: Vec<Value>,
}

fn readable_bookings(raw: &[Value]) -> Vec<TimeSlot> {
    parse_booked_slots(raw.iter().map(Value::as_str))
}

#[derive(Serialize)]
struct GridRow {
    slot: String,
    status: &'static str,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate {
            start,
            end,
            duration,
            format,
            output,
        } => {
            let grid = config.grid.with_overrides(start, end, duration);
            let slots = generate_time_slots(grid.duration, grid.window());
            tracing::info!(count = slots.len(), window = ?grid.window(), "generated slots");

            let rendered: Vec<String> = slots.iter().map(|s| render_slot(s, format)).collect();
            write_json(output.as_deref(), &rendered)?;
        }
        Commands::Merge { input, output } => {
            let json = read_input(input.as_deref())?;
            let ranges: Vec<AvailabilityRange> =
                serde_json::from_str(&json).context("Failed to parse ranges JSON")?;
            write_json(output.as_deref(), &merge_overlapping_ranges(&ranges))?;
        }
        Commands::Ranges { input, output } => {
            let json = read_input(input.as_deref())?;
            let slots: Vec<TimeSlot> =
                serde_json::from_str(&json).context("Failed to parse slots JSON")?;
            write_json(output.as_deref(), &convert_slots_to_ranges(&slots))?;
        }
        Commands::Free { input, output } => {
            let day = read_day_input(input.as_deref())?;
            let booked = readable_bookings(&day.booked);
            write_json(output.as_deref(), &free_ranges(&day.ranges, &booked))?;
        }
        Commands::Check {
            slot,
            duration,
            input,
        } => {
            let day = read_day_input(input.as_deref())?;
            let booked = readable_bookings(&day.booked);
            let duration = duration.unwrap_or(config.grid.duration);
            let status = classify_start(slot, &day.ranges, &booked, duration);
            println!("{}", status.as_str());
        }
        Commands::Grid {
            day,
            start,
            end,
            duration,
            format,
            input,
            output,
        } => {
            let weekday = parse_day_key(&day)?;
            let json = read_input(input.as_deref())?;
            let week: WeekInput =
                serde_json::from_str(&json).context("Failed to parse availability JSON")?;
            let booked = readable_bookings(&week.booked);
            let grid = config.grid.with_overrides(start, end, duration);

            let rows: Vec<GridRow> = week
                .availability
                .grid_for(weekday, grid.window(), grid.duration, &booked)
                .iter()
                .map(|cell| GridRow {
                    slot: render_slot(&cell.slot, format),
                    status: cell.status.as_str(),
                })
                .collect();
            write_json(output.as_deref(), &rows)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn render_slot(slot: &TimeSlot, format: TimeFormat) -> String {
    match format {
        TimeFormat::TwentyFour => slot.to_string(),
        TimeFormat::Twelve => format_time_slot_to_12_hour(slot),
    }
}

fn read_day_input(path: Option<&str>) -> Result<DayInput> {
    let json = read_input(path)?;
    serde_json::from_str(&json).context("Failed to parse ranges/booked JSON")
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

fn write_json<T: Serialize + ?Sized>(path: Option<&str>, value: &T) -> Result<()> {
    let pretty = serde_json::to_string_pretty(value)?;
    match path {
        Some(path) => {
            std::fs::write(path, pretty).with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", pretty);
        }
    }
    Ok(())
}
