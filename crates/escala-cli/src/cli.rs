//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// Volunteer travel allocation tool.
///
/// Coordinates limited-capacity group travels with open volunteer sign-up
/// and a fairness-driven selection: fewest historical diary-days first,
/// ties broken by rank seniority, then by application order.
#[derive(Debug, Parser)]
#[command(name = "escala", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Reference date for time-sensitive commands (defaults to today).
    #[arg(long, global = true, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Register a new travel.
    Create(CreateArgs),

    /// Edit the details of an existing travel.
    Edit(EditArgs),

    /// List travels with their lifecycle phase and diary-day figures.
    List {
        /// Include archived travels.
        #[arg(long)]
        all: bool,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show one travel's ranking with per-applicant fairness figures.
    Show {
        /// Travel ID.
        id: String,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Sign a volunteer up for a travel.
    Volunteer {
        /// Travel ID.
        id: String,
        /// Volunteer label, rank first (e.g. "Cap PM Silva").
        name: String,
    },

    /// Withdraw a volunteer from a travel.
    Withdraw {
        /// Travel ID.
        id: String,
        /// Volunteer label as it was signed up.
        name: String,
    },

    /// Freeze the allocation for a travel.
    Lock {
        /// Travel ID.
        id: String,
    },

    /// Reverse a lock, clearing the frozen selection.
    Unlock {
        /// Travel ID.
        id: String,
    },

    /// Archive a travel (display only; reversible).
    Archive {
        /// Travel ID.
        id: String,
    },

    /// Bring an archived travel back.
    Unarchive {
        /// Travel ID.
        id: String,
    },

    /// Delete a travel from the registry.
    Delete {
        /// Travel ID.
        id: String,
    },
}

/// Arguments for `escala create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Destination label.
    #[arg(long)]
    pub destination: String,

    /// First travel day (inclusive).
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub start: NaiveDate,

    /// Last travel day (inclusive).
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub end: NaiveDate,

    /// Number of available slots.
    #[arg(long)]
    pub slots: u32,

    /// Cost per diary-day; omit if cost is not tracked.
    #[arg(long)]
    pub daily_rate: Option<f64>,

    /// Count the final day as half a diary-day.
    #[arg(long)]
    pub half_last_day: bool,
}

/// Arguments for `escala edit`. Omitted flags leave fields unchanged.
#[derive(Debug, Args)]
pub struct EditArgs {
    /// Travel ID.
    pub id: String,

    /// New destination label.
    #[arg(long)]
    pub destination: Option<String>,

    /// New first travel day.
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub start: Option<NaiveDate>,

    /// New last travel day.
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub end: Option<NaiveDate>,

    /// New slot count.
    #[arg(long)]
    pub slots: Option<u32>,

    /// New cost per diary-day.
    #[arg(long, conflicts_with = "clear_daily_rate")]
    pub daily_rate: Option<f64>,

    /// Stop tracking cost for this travel.
    #[arg(long)]
    pub clear_daily_rate: bool,

    /// Whether the final day counts as half a diary-day.
    #[arg(long)]
    pub half_last_day: Option<bool>,
}
