//! `slotfind` CLI — find meeting slots in a JSON calendar dump.
//!
//! ## Usage
//!
//! ```sh
//! # Find slots (stdin → stdout, one "HH:MM-HH:MM (N min)" line per slot)
//! slotfind find < day.json
//!
//! # Read from a file, write JSON to a file
//! slotfind find -i day.json -o slots.json --format json
//!
//! # Only the earliest slot
//! slotfind find -i day.json --first
//!
//! # Validate input without searching
//! slotfind check -i day.json
//!
//! # Debug logging (or set RUST_LOG)
//! slotfind --verbose find -i day.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use slot_finder::{parse_input, query_detailed, Honored, SlotQuery, SlotReport};
use std::io::{self, Read};
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "slotfind",
    version,
    about = "Find meeting slots where every attendee is free"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every slot that fits the meeting request
    Find {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Only report the earliest slot
        #[arg(long)]
        first: bool,
    },
    /// Validate the input document without searching
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Find {
            input,
            output,
            format,
            first,
        } => {
            let json = read_input(input.as_deref())?;
            let (events, request) = parse_input(&json).context("Failed to parse input")?;
            debug!(events = events.len(), duration = request.duration(), "parsed input");

            let mut result = query_detailed(&events, &request);
            if first {
                result.slots.truncate(1);
            }
            if result.honored == Honored::RequiredOnly {
                eprintln!("note: no slot fits the optional attendees; showing required attendees only");
            }

            let rendered = match format {
                Format::Text => render_text(&result),
                Format::Json => serde_json::to_string_pretty(&SlotReport::from(&result))
                    .context("Failed to serialize slots")?,
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Check { input } => {
            let json = read_input(input.as_deref())?;
            let (events, request) = parse_input(&json).context("Failed to parse input")?;
            println!(
                "ok: {} events, {} required, {} optional, {} minutes",
                events.len(),
                request.required_attendees().len(),
                request.optional_attendees().len(),
                request.duration()
            );
        }
    }

    Ok(())
}

/// Log to stderr; `--verbose` forces debug, otherwise `RUST_LOG` or warn.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn render_text(result: &SlotQuery) -> String {
    if result.slots.is_empty() {
        return "no available slots\n".to_string();
    }
    result
        .slots
        .iter()
        .map(|slot| format!("{} ({} min)\n", slot, slot.duration()))
        .collect()
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
            print!("{}", content);
        }
    }
    Ok(())
}
