//! `timeblock` CLI -- inspect a day's time-slot grid, check conflicts and
//! suggest times from the command line.
//!
//! Bookings are read as a JSON array (from `-i FILE` or stdin). Empty input
//! means the day has no bookings yet.
//!
//! ## Usage
//!
//! ```sh
//! # Raw 15-minute grid for the configured hours
//! timeblock grid -i bookings.json
//!
//! # Day timeline with free hours merged
//! timeblock day --start-hour 7 --end-hour 21 -i bookings.json
//!
//! # Would 09:00-10:00 collide with anything? (ignoring booking b1 itself)
//! timeblock conflicts --start 09:00 --end 10:00 --exclude b1 -i bookings.json
//!
//! # Suggest a time for a 30-minute task, no earlier than 16:00
//! timeblock suggest --duration 30 --after 16:00 -i bookings.json
//!
//! # Time helpers
//! timeblock time round-up 09:07
//! ```

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::io::{self, IsTerminal, Read};
use std::process;
use timeblock_engine::planner::{can_book, day_view, suggest_slot};
use timeblock_engine::time::{add_duration, minutes_to_time, round_to_slot, time_to_minutes};
use timeblock_engine::{generate_slots, Booking, SchedulerConfig, WallClock};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Exit code when no time slot can fit the requested duration.
const EXIT_NO_SLOT: i32 = 2;

#[derive(Parser)]
#[command(
    name = "timeblock",
    version,
    about = "Family day planner: time-slot grid, conflicts and placement"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON scheduler config file (start_hour, end_hour, min_empty_group)
    #[arg(long, global = true)]
    config: Option<String>,

    /// First hour of the day grid (overrides the config file)
    #[arg(long, global = true)]
    start_hour: Option<u32>,

    /// Last hour of the day grid, inclusive (overrides the config file)
    #[arg(long, global = true)]
    end_hour: Option<u32>,

    /// Shortest run of free slots merged in the day view (overrides the config file)
    #[arg(long, global = true)]
    min_group: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). TIMEBLOCK_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the raw 15-minute slot grid as JSON
    Grid {
        /// Bookings JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print the day view (free runs merged) as JSON
    Day {
        /// Bookings JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Check a candidate time block against existing bookings
    Conflicts {
        /// Bookings JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Candidate start (HH:MM)
        #[arg(long)]
        start: String,
        /// Candidate end (HH:MM)
        #[arg(long)]
        end: String,
        /// Booking id to ignore (the block being moved)
        #[arg(long)]
        exclude: Option<String>,
    },
    /// Suggest the earliest free time for an activity
    Suggest {
        /// Bookings JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Activity length in minutes
        #[arg(long)]
        duration: u32,
        /// Earliest acceptable start (HH:MM)
        #[arg(long)]
        after: Option<String>,
    },
    /// Wall-clock arithmetic helpers
    Time {
        #[command(subcommand)]
        op: TimeOp,
    },
}

#[derive(Subcommand)]
enum TimeOp {
    /// HH:MM to minutes since midnight
    ToMinutes { time: String },
    /// Minutes since midnight to HH:MM (clamped to 00:00-23:59)
    FromMinutes {
        #[arg(allow_negative_numbers = true)]
        minutes: i64,
    },
    /// Round up to the next 15-minute boundary
    RoundUp { time: String },
    /// Round down to the previous 15-minute boundary
    RoundDown { time: String },
    /// Add minutes to HH:MM (clamped to 23:59)
    Add {
        time: String,
        #[arg(allow_negative_numbers = true)]
        minutes: i64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Time { op } => run_time_op(op)?,
        Commands::Grid { input } => {
            let config = load_config(&cli)?;
            let bookings = read_bookings(input.as_deref())?;
            let grid = generate_slots(config.start_hour, config.end_hour, &bookings)
                .context("Failed to generate slot grid")?;
            print_json(&grid)?;
        }
        Commands::Day { input } => {
            let config = load_config(&cli)?;
            let bookings = read_bookings(input.as_deref())?;
            let view = day_view(&config, &bookings).context("Failed to build day view")?;
            print_json(&view)?;
        }
        Commands::Conflicts {
            input,
            start,
            end,
            exclude,
        } => {
            let bookings = read_bookings(input.as_deref())?;
            let start = parse_time(start)?;
            let end = parse_time(end)?;
            let result = can_book(start, end, &bookings, exclude.as_deref())
                .context("Failed to check conflicts")?;
            print_json(&result)?;
        }
        Commands::Suggest {
            input,
            duration,
            after,
        } => {
            let config = load_config(&cli)?;
            let bookings = read_bookings(input.as_deref())?;
            let preferred = after.as_deref().map(parse_time).transpose()?;
            let suggestion = suggest_slot(&config, &bookings, *duration, preferred)
                .context("Failed to search for a time slot")?;
            match suggestion {
                Some(slot) => print_json(&slot)?,
                None => {
                    eprintln!("no suitable time slot for {} minutes", duration);
                    process::exit(EXIT_NO_SLOT);
                }
            }
        }
    }

    Ok(())
}

/// Install a stderr subscriber. `TIMEBLOCK_LOG` (an `EnvFilter` directive)
/// wins over `-v` flags.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_env("TIMEBLOCK_LOG").unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
}

/// Start from the config file (or defaults), then apply flag overrides.
fn load_config(cli: &Cli) -> Result<SchedulerConfig> {
    let mut config = match cli.config.as_deref() {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?;
            SchedulerConfig::from_json_str(&text)
                .with_context(|| format!("Invalid config file: {}", path))?
        }
        None => SchedulerConfig::default(),
    };

    if let Some(hour) = cli.start_hour {
        config.start_hour = hour;
    }
    if let Some(hour) = cli.end_hour {
        config.end_hour = hour;
    }
    if let Some(group) = cli.min_group {
        config.min_empty_group = group;
    }

    config.validate().context("Invalid scheduler settings")?;
    debug!(?config, "resolved scheduler config");
    Ok(config)
}

fn run_time_op(op: &TimeOp) -> Result<()> {
    let out = match op {
        TimeOp::ToMinutes { time } => time_to_minutes(time)
            .with_context(|| format!("Cannot convert '{}'", time))?
            .to_string(),
        TimeOp::FromMinutes { minutes } => minutes_to_time(*minutes),
        TimeOp::RoundUp { time } => {
            round_to_slot(time, true).with_context(|| format!("Cannot round '{}'", time))?
        }
        TimeOp::RoundDown { time } => {
            round_to_slot(time, false).with_context(|| format!("Cannot round '{}'", time))?
        }
        TimeOp::Add { time, minutes } => {
            add_duration(time, *minutes).with_context(|| format!("Cannot add to '{}'", time))?
        }
    };
    println!("{}", out);
    Ok(())
}

fn parse_time(s: &str) -> Result<WallClock> {
    s.parse().with_context(|| format!("Invalid time '{}', expected HH:MM", s))
}

/// Parse the bookings array. Blank input is an empty day.
fn read_bookings(path: Option<&str>) -> Result<Vec<Booking>> {
    let json = read_input(path)?;
    if json.trim().is_empty() {
        info!("no bookings supplied, treating the day as free");
        return Ok(Vec::new());
    }
    let bookings: Vec<Booking> =
        serde_json::from_str(&json).context("Failed to parse bookings JSON")?;
    debug!(count = bookings.len(), "loaded bookings");
    Ok(bookings)
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

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let pretty = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", pretty);
    Ok(())
}
