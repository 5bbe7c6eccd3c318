// src/config/validate.rs

use tracing::warn;

use crate::config::model::{ConfigFile, RawConfigFile, ScheduleSettings};
use crate::errors::{LessonschedError, Result};
use crate::schedule::parse_date_key;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = LessonschedError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        let schedule = validate_schedule_section(&raw)?;
        Ok(ConfigFile::new_unchecked(schedule, raw.output))
    }
}

fn validate_schedule_section(cfg: &RawConfigFile) -> Result<ScheduleSettings> {
    let section = &cfg.schedule;

    if !section.daily_commitment_minutes.is_finite() {
        return Err(LessonschedError::ConfigError(format!(
            "[schedule].daily_commitment_minutes must be a finite number (got {})",
            section.daily_commitment_minutes
        )));
    }

    if section.daily_commitment_minutes < 1.0 {
        warn!(
            value = section.daily_commitment_minutes,
            "[schedule].daily_commitment_minutes below 1; scheduling with 1 minute per day"
        );
    }

    let start_date = section
        .start_date
        .as_deref()
        .map(parse_date_key)
        .transpose()
        .map_err(|e| {
            LessonschedError::ConfigError(format!("[schedule].start_date: {e}"))
        })?;

    Ok(ScheduleSettings {
        daily_commitment_minutes: section.daily_commitment_minutes,
        start_date,
        on_invalid_graph: section.on_invalid_graph,
    })
}
