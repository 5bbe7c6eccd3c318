// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::plan::CompletedLesson;
use crate::types::OutputFormat;

/// Command-line arguments for `lessonsched`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "lessonsched",
    version,
    about = "Schedule layered lesson plans onto a calendar.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the lesson plan (JSON, one plan or an array of plans).
    #[arg(long, value_name = "PATH")]
    pub plan: String,

    /// Path to the config file (TOML).
    ///
    /// Default: `Lessonsched.toml` in the current working directory, if it
    /// exists.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Minutes available per day (overrides `[schedule].daily_commitment_minutes`).
    #[arg(long, value_name = "MINUTES", allow_negative_numbers = true)]
    pub daily_minutes: Option<f64>,

    /// First day of the schedule, `YYYY-MM-DD` (overrides `[schedule].start_date`).
    #[arg(long, value_name = "DATE")]
    pub start: Option<String>,

    /// Only show the lessons active on this day, `YYYY-MM-DD`.
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Lessons already completed; they are left out of the schedule and no
    /// longer block their dependents.
    ///
    /// `N` names lesson N of the first plan in the file; `P:N` names lesson
    /// N of plan P (counting from 1). Comma separated, e.g. `1,3,2:1`.
    #[arg(long, value_name = "[P:]N", value_delimiter = ',')]
    pub completed: Vec<CompletedLesson>,

    /// Output format (overrides `[output].format`).
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Reject plans with cycles or unknown prerequisites instead of
    /// dropping the affected lessons.
    #[arg(long)]
    pub strict: bool,

    /// Recompute the schedule whenever the plan or config file changes.
    #[arg(long)]
    pub watch: bool,

    /// Parse + validate, print a plan summary, but don't schedule.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `LESSONSCHED_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
