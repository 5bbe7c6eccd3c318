// src/schedule/model.rs

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::errors::{LessonschedError, Result};
use crate::plan::model::LessonNumber;

/// Format used for calendar day keys.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Format a calendar day as `YYYY-MM-DD`.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` day key.
pub fn parse_date_key(key: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(key.trim(), DATE_KEY_FORMAT)
        .map_err(|_| LessonschedError::InvalidDate(key.to_string()))
}

/// One lesson placed on the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledLesson {
    pub lesson_number: LessonNumber,
    pub topic: String,
    /// First day assigned to the lesson.
    pub start_date: NaiveDate,
    /// Last day assigned to the lesson (inclusive).
    pub end_date: NaiveDate,
    pub day_span: u32,
}

impl ScheduledLesson {
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start_date
            .iter_days()
            .take_while(move |d| *d <= self.end_date)
    }
}

/// Output of the scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ScheduleResult {
    /// Lessons in the order they were processed.
    pub scheduled_lessons: Vec<ScheduledLesson>,

    /// Calendar day -> lessons active that day. Serializes with
    /// `YYYY-MM-DD` keys. A lesson spanning several days shares one entry
    /// across all of them.
    pub schedule_map: BTreeMap<NaiveDate, Vec<Arc<ScheduledLesson>>>,

    /// Lessons that could not be placed, ascending.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unscheduled: Vec<LessonNumber>,

    /// Lesson numbers that appeared more than once, ascending. Only the
    /// first occurrence is considered; the repeats are ignored.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub duplicates: Vec<LessonNumber>,
}

impl ScheduleResult {
    pub fn is_empty(&self) -> bool {
        self.scheduled_lessons.is_empty()
    }

    /// Lessons active on `date`; empty when nothing is scheduled that day.
    pub fn lessons_on(&self, date: NaiveDate) -> &[Arc<ScheduledLesson>] {
        self.schedule_map
            .get(&date)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Same as [`ScheduleResult::lessons_on`], keyed by `YYYY-MM-DD`.
    pub fn lessons_on_key(&self, key: &str) -> Result<&[Arc<ScheduledLesson>]> {
        Ok(self.lessons_on(parse_date_key(key)?))
    }

    pub fn get(&self, lesson_number: LessonNumber) -> Option<&ScheduledLesson> {
        self.scheduled_lessons
            .iter()
            .find(|s| s.lesson_number == lesson_number)
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        self.schedule_map.keys().next().copied()
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        self.schedule_map.keys().next_back().copied()
    }

    /// Number of calendar days from the first to the last scheduled day.
    pub fn total_days(&self) -> u32 {
        match (self.first_day(), self.last_day()) {
            (Some(first), Some(last)) => {
                u32::try_from((last - first).num_days() + 1).unwrap_or(u32::MAX)
            }
            _ => 0,
        }
    }
}
