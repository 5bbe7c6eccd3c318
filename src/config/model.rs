// src/config/model.rs

use chrono::NaiveDate;
use serde::Deserialize;

use crate::types::{GraphPolicy, OutputFormat};

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [schedule]
/// daily_commitment_minutes = 30
/// start_date = "2024-01-01"
/// on_invalid_graph = "drop"
///
/// [output]
/// format = "text"
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    /// Scheduling behaviour from `[schedule]`.
    #[serde(default)]
    pub schedule: ScheduleSection,

    /// Presentation from `[output]`.
    #[serde(default)]
    pub output: OutputSection,
}

/// `[schedule]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleSection {
    /// Minutes available per day. Values below one are clamped to one by the
    /// scheduler.
    #[serde(default = "default_daily_commitment_minutes")]
    pub daily_commitment_minutes: f64,

    /// First day of the schedule as `"YYYY-MM-DD"`. Defaults to today.
    #[serde(default)]
    pub start_date: Option<String>,

    /// `"drop"` (default) or `"error"`.
    #[serde(default)]
    pub on_invalid_graph: GraphPolicy,
}

fn default_daily_commitment_minutes() -> f64 {
    30.0
}

impl Default for ScheduleSection {
    fn default() -> Self {
        Self {
            daily_commitment_minutes: default_daily_commitment_minutes(),
            start_date: None,
            on_invalid_graph: GraphPolicy::default(),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct OutputSection {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Validated `[schedule]` settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleSettings {
    pub daily_commitment_minutes: f64,
    pub start_date: Option<NaiveDate>,
    pub on_invalid_graph: GraphPolicy,
}

/// Validated configuration. Build it from a [`RawConfigFile`] via `TryFrom`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub schedule: ScheduleSettings,
    pub output: OutputSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(schedule: ScheduleSettings, output: OutputSection) -> Self {
        Self { schedule, output }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        let raw = ScheduleSection::default();
        Self::new_unchecked(
            ScheduleSettings {
                daily_commitment_minutes: raw.daily_commitment_minutes,
                start_date: None,
                on_invalid_graph: raw.on_invalid_graph,
            },
            OutputSection::default(),
        )
    }
}
