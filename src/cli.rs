use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Calendar dates without time-of-day or offset.
#[derive(Parser)]
#[command(
    name = "dateonly",
    version,
    about = "Calendar dates without time-of-day or offset"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file [default: dateonly.toml, if present].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print today's date in the local time zone.
    Today,
    /// Describe a date: fields, weekday, ISO week and more.
    Info(InfoArgs),
    /// Add years, months and days with calendar carry.
    Add(AddArgs),
    /// Print the time elapsed from an instant to a date's UTC midnight.
    Sub(SubArgs),
    /// Render a date with a strftime layout.
    Format(FormatArgs),
    /// Parse a value with a strftime layout.
    Parse(ParseArgs),
    /// Encode a date as text, JSON or binary.
    Encode(EncodeArgs),
    /// Decode a date from text, JSON or binary.
    Decode(DecodeArgs),
}

/// Arguments for the `info` subcommand.
#[derive(clap::Args)]
pub struct InfoArgs {
    /// Date to describe, in the configured input layout.
    pub date: String,

    /// Print the description as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `add` subcommand.
#[derive(clap::Args)]
pub struct AddArgs {
    /// Starting date, in the configured input layout.
    pub date: String,

    /// Years to add; negative values go back.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub years: i64,

    /// Months to add; overflowing days carry into the next month.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub months: i64,

    /// Days to add; negative values go back.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub days: i64,
}

/// Arguments for the `sub` subcommand.
#[derive(clap::Args)]
pub struct SubArgs {
    /// Date whose UTC midnight ends the interval.
    pub date: String,

    /// RFC 3339 instant starting the interval, e.g. `2000-01-01T12:00:00+01:00`.
    pub instant: String,
}

/// Arguments for the `format` subcommand.
#[derive(clap::Args)]
pub struct FormatArgs {
    /// Date to render, in the configured input layout.
    pub date: String,

    /// strftime layout, e.g. `%A, %B %e %Y`.
    pub layout: String,
}

/// Arguments for the `parse` subcommand.
#[derive(clap::Args)]
pub struct ParseArgs {
    /// strftime layout the value is written in.
    pub layout: String,

    /// Text to parse.
    pub value: String,
}

/// Arguments for the `encode` subcommand.
#[derive(clap::Args)]
pub struct EncodeArgs {
    /// Date to encode, in the configured input layout.
    pub date: String,

    /// Encoding: text, json or binary (hex) [default: from config].
    #[arg(long = "as", value_name = "ENCODING")]
    pub encoding: Option<String>,
}

/// Arguments for the `decode` subcommand.
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// Encoded date; binary payloads are given as hex.
    pub data: String,

    /// Encoding: text, json or binary (hex) [default: from config].
    #[arg(long = "as", value_name = "ENCODING")]
    pub encoding: Option<String>,
}
