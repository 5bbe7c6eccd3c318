use clap::ValueEnum;
use serde::Deserialize;

/// What to do with lessons that cannot be ordered (prerequisite cycles or
/// prerequisites missing from the plan).
///
/// - `Drop`: schedule everything else and list the affected lessons as
///   unscheduled (default).
/// - `Error`: refuse to schedule the plan at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphPolicy {
    #[default]
    Drop,
    Error,
}

/// How schedules are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}
