use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand};
use timerange::{
    format_date_string_for_ui_with, parse_timestamp, DateSpecifier, DateTimeRange, FormatOptions,
    Timestamp,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "timerange", version, about)]
/// Describe and resolve relative or absolute date ranges
struct Cli {
    /// IANA timezone for absolute dates (defaults to local time)
    #[arg(long, global = true, value_parser = parse_tz)]
    tz: Option<Tz>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the display string for a range
    Describe {
        #[command(flatten)]
        range: RangeArgs,
    },
    /// Print the display string for a single endpoint
    Format {
        /// The endpoint [now | N unit ago | Nm/Nh/Nd | RFC 3339]
        #[arg(value_parser = parse_specifier)]
        spec: DateSpecifier,
    },
    /// Print the concrete start and end instants of a range as JSON
    Resolve {
        #[command(flatten)]
        range: RangeArgs,
        /// Instant to evaluate relative endpoints against [RFC 3339, default: now]
        #[arg(long, value_parser = parse_anchor)]
        anchor: Option<Timestamp>,
        /// Fail if the range ends before it starts
        #[arg(long)]
        strict: bool,
    },
    /// Print the serialized form of a range
    Json {
        #[command(flatten)]
        range: RangeArgs,
    },
}

#[derive(Args)]
struct RangeArgs {
    /// Start of the range [now | N unit ago | Nm/Nh/Nd | RFC 3339, default: 1h]
    #[arg(short, long, value_parser = parse_specifier)]
    from: Option<DateSpecifier>,
    /// End of the range [default: now]
    #[arg(short, long, value_parser = parse_specifier)]
    to: Option<DateSpecifier>,
}

impl RangeArgs {
    fn into_range(self) -> DateTimeRange {
        DateTimeRange::new(self.from, self.to)
    }
}

fn main() -> ExitCode {
    init_logging();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` (warnings only by default).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let options = match cli.tz {
        Some(tz) => FormatOptions::in_timezone(tz),
        None => FormatOptions::default(),
    };
    debug!(?options, "display options");

    match cli.command {
        Command::Describe { range } => {
            let range = range.into_range();
            debug!(?range, "describing range");
            println!("{}", range.range_string_for_ui_with(&options));
        }
        Command::Format { spec } => {
            println!("{}", format_date_string_for_ui_with(&spec, &options));
        }
        Command::Resolve {
            range,
            anchor,
            strict,
        } => {
            let range = range.into_range();
            let resolved = match anchor {
                Some(anchor) if strict => range.validate(anchor)?,
                Some(anchor) => range.resolve(anchor),
                None if strict => range.validate(chrono::Utc::now())?,
                None => range.resolve_now(),
            };
            let json = serde_json::to_string(&resolved).context("serializing resolved range")?;
            println!("{json}");
        }
        Command::Json { range } => {
            let json =
                serde_json::to_string(&range.into_range()).context("serializing range")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn parse_specifier(s: &str) -> Result<DateSpecifier, String> {
    s.parse().map_err(|e: timerange::RangeError| e.to_string())
}

fn parse_anchor(s: &str) -> Result<Timestamp, String> {
    parse_timestamp(s).map_err(|e| e.to_string())
}

fn parse_tz(s: &str) -> Result<Tz, String> {
    s.parse::<Tz>()
        .map_err(|_| format!("'{s}' is not an IANA timezone"))
}
