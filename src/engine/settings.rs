// src/engine/settings.rs

use chrono::NaiveDate;

use crate::cli::CliArgs;
use crate::config::ConfigFile;
use crate::errors::Result;
use crate::plan::CompletedLesson;
use crate::schedule::{parse_date_key, today};
use crate::types::{GraphPolicy, OutputFormat};

/// Settings for one scheduling pass: the config file with CLI overrides
/// applied.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveSettings {
    pub daily_commitment_minutes: f64,
    pub start_date: NaiveDate,
    pub on_invalid_graph: GraphPolicy,
    pub format: OutputFormat,
    pub completed: Vec<CompletedLesson>,
    /// Day to look up instead of printing the whole schedule.
    pub query_date: Option<NaiveDate>,
}

impl EffectiveSettings {
    /// Merge `cfg` with `args`; CLI flags win.
    ///
    /// The start date falls back to today when neither `--start` nor
    /// `[schedule].start_date` is given.
    pub fn resolve(cfg: &ConfigFile, args: &CliArgs) -> Result<Self> {
        let start_date = match args.start.as_deref() {
            Some(s) => parse_date_key(s)?,
            None => cfg.schedule.start_date.unwrap_or_else(today),
        };

        let query_date = args.date.as_deref().map(parse_date_key).transpose()?;

        let on_invalid_graph = if args.strict {
            GraphPolicy::Error
        } else {
            cfg.schedule.on_invalid_graph
        };

        Ok(Self {
            daily_commitment_minutes: args
                .daily_minutes
                .unwrap_or(cfg.schedule.daily_commitment_minutes),
            start_date,
            on_invalid_graph,
            format: args.format.unwrap_or(cfg.output.format),
            completed: args.completed.clone(),
            query_date,
        })
    }
}
