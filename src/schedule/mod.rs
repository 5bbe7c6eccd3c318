// src/schedule/mod.rs

//! Lesson scheduling.
//!
//! The scheduler is a pure function of
//! `(lessons, daily commitment, start date)`: no IO, no shared state, and
//! identical input always yields an identical [`ScheduleResult`]. Callers
//! recompute whenever the lesson set or the commitment changes.

pub mod compute;
pub mod model;

pub use compute::{
    clamp_commitment, compute_schedule, compute_schedule_from_today, day_span, today,
    try_compute_schedule,
};
pub use model::{date_key, parse_date_key, ScheduleResult, ScheduledLesson, DATE_KEY_FORMAT};
