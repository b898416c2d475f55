//! `openslot` CLI — compute and format availability proposals from a
//! calendar event feed.
//!
//! The feed is the calendar collaborator materialized as JSON: one entry per
//! weekday with that day's raw events (and optionally a second person's), in
//! the provider shape the core normalizes.
//!
//! ## Usage
//!
//! ```sh
//! # Formatted proposal text (feed on stdin)
//! openslot propose < week.json
//!
//! # Merged two-person availability, 60-minute slots, Eastern display
//! openslot propose -i week.json --merge --duration 60 \
//!     --timezone "Eastern Standard Time" --recipient Sam --owner Alex
//!
//! # Raw sampled slots as JSON, reproducible sampling
//! openslot slots -i week.json --seed 42
//!
//! # The work windows the engine would use for next week
//! openslot windows --week next --today 2026-08-06
//! ```

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use std::io::{self, Read};

use openslot_core::{
    compute_availability, propose, week_windows, AvailabilityQuery, DaySchedule, NamedZones,
    RawEvent, WorkWindow, WorkingHours, MAX_PROPOSALS,
};

#[derive(Parser)]
#[command(name = "openslot", version, about = "Calendar availability proposals")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Week {
    This,
    Next,
}

impl Week {
    fn offset(self) -> i64 {
        match self {
            Week::This => 0,
            Week::Next => 1,
        }
    }
}

#[derive(clap::Args)]
struct QueryArgs {
    /// Meeting duration in minutes (multiple of 15)
    #[arg(long, default_value_t = 30)]
    duration: i64,
    /// Which week the feed covers (affects the greeting wording)
    #[arg(long, value_enum, default_value = "this")]
    week: Week,
    /// Display-zone name (e.g. "Eastern Standard Time") or IANA identifier
    #[arg(long, default_value = "Atlantic Standard Time")]
    timezone: String,
    /// Intersect the primary and secondary calendars
    #[arg(long)]
    merge: bool,
    /// Maximum number of proposed slots
    #[arg(long, default_value_t = MAX_PROPOSALS)]
    max: usize,
    /// Seed for slot sampling (omit for entropy)
    #[arg(long)]
    seed: Option<u64>,
    /// IANA scheduling zone the work windows are anchored to
    #[arg(long, default_value = "America/Halifax")]
    reference_zone: String,
    /// First working hour in the reference zone
    #[arg(long, default_value_t = 11)]
    open_hour: u32,
    /// Last working hour in the reference zone
    #[arg(long, default_value_t = 17)]
    close_hour: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the greeting + proposal text for a week feed
    Propose {
        /// Input feed (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Recipient's name for the greeting
        #[arg(long, default_value = "there")]
        recipient: String,
        /// Owner's name (omit for "my availability")
        #[arg(long)]
        owner: Option<String>,
        #[command(flatten)]
        query: QueryArgs,
    },
    /// Print the raw sampled slots and diagnostics as JSON
    Slots {
        /// Input feed (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        #[command(flatten)]
        query: QueryArgs,
    },
    /// Print the work windows for a week as JSON
    Windows {
        /// Which week to anchor to
        #[arg(long, value_enum, default_value = "this")]
        week: Week,
        /// Anchor date overriding the current date
        #[arg(long)]
        today: Option<NaiveDate>,
        /// IANA scheduling zone the work windows are anchored to
        #[arg(long, default_value = "America/Halifax")]
        reference_zone: String,
        /// First working hour in the reference zone
        #[arg(long, default_value_t = 11)]
        open_hour: u32,
        /// Last working hour in the reference zone
        #[arg(long, default_value_t = 17)]
        close_hour: u32,
    },
}

/// One feed day: a date plus the raw events fetched for it.
#[derive(Deserialize)]
struct FeedDay {
    date: NaiveDate,
    #[serde(default)]
    primary: Vec<RawEvent>,
    #[serde(default)]
    secondary: Option<Vec<RawEvent>>,
}

#[derive(Deserialize)]
struct Feed {
    days: Vec<FeedDay>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match Cli::parse().command {
        Commands::Propose {
            input,
            output,
            recipient,
            owner,
            query,
        } => {
            let (q, days, mut rng) = prepare(&query, input.as_deref())?;
            let proposal = propose(&q, &days, &recipient, owner.as_deref(), &NamedZones, &mut rng)?;
            write_output(output.as_deref(), &proposal.text)?;
        }
        Commands::Slots {
            input,
            output,
            query,
        } => {
            let (q, days, mut rng) = prepare(&query, input.as_deref())?;
            let result = compute_availability(&q, &days, &mut rng)?;
            let json = serde_json::to_string_pretty(&result)?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Windows {
            week,
            today,
            reference_zone,
            open_hour,
            close_hour,
        } => {
            let reference = parse_zone(&reference_zone)?;
            let today =
                today.unwrap_or_else(|| Utc::now().with_timezone(&reference).date_naive());
            let hours = WorkingHours {
                start_hour: open_hour,
                end_hour: close_hour,
            };
            let windows = week_windows(today, week.offset(), hours, reference);
            println!("{}", serde_json::to_string_pretty(&windows)?);
        }
    }
    Ok(())
}

/// Parse the feed and assemble the query, day schedules, and random source.
fn prepare(
    args: &QueryArgs,
    input: Option<&str>,
) -> Result<(AvailabilityQuery, Vec<DaySchedule>, StdRng)> {
    let reference = parse_zone(&args.reference_zone)?;
    let feed: Feed =
        serde_json::from_str(&read_input(input)?).context("Failed to parse event feed")?;

    let hours = WorkingHours {
        start_hour: args.open_hour,
        end_hour: args.close_hour,
    };
    let mut days = Vec::with_capacity(feed.days.len());
    for day in feed.days {
        let window = WorkWindow::for_day(day.date, hours, reference)
            .with_context(|| format!("No valid work window on {}", day.date))?;
        days.push(DaySchedule {
            window,
            primary: day.primary,
            secondary: day.secondary,
        });
    }

    let query = AvailabilityQuery {
        week_offset: args.week.offset(),
        duration_minutes: args.duration,
        display_zone: args.timezone.clone(),
        merge: args.merge,
        max_proposals: args.max,
        reference_zone: reference,
    };
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Ok((query, days, rng))
}

fn parse_zone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| anyhow::anyhow!("Invalid IANA timezone: {}", name))
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
