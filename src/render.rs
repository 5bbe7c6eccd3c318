// src/render.rs

//! Text and JSON presentation of schedules.

use std::fmt::Write;

use chrono::NaiveDate;
use serde::Serialize;

use crate::engine::PlanSchedule;
use crate::errors::Result;
use crate::plan::{LessonNumber, LessonPlan, PlanSummary};
use crate::schedule::{date_key, ScheduleResult, ScheduledLesson};
use crate::types::OutputFormat;

#[derive(Serialize)]
struct PlanScheduleView<'a> {
    title: &'a str,
    skill: &'a str,
    summary: PlanSummary,
    #[serde(flatten)]
    schedule: &'a ScheduleResult,
}

#[derive(Serialize)]
struct DayView<'a> {
    date: NaiveDate,
    lessons: Vec<&'a ScheduledLesson>,
}

/// Render full schedules.
pub fn render_schedules(schedules: &[PlanSchedule], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let views: Vec<PlanScheduleView<'_>> = schedules
                .iter()
                .map(|ps| PlanScheduleView {
                    title: &ps.plan.title,
                    skill: &ps.plan.skill,
                    summary: ps.summary(),
                    schedule: &ps.schedule,
                })
                .collect();
            Ok(serde_json::to_string_pretty(&views)? + "\n")
        }
        OutputFormat::Text => Ok(schedules_text(schedules)),
    }
}

/// Render the lessons active on `date` across all schedules.
///
/// A day with nothing scheduled renders as an empty list.
pub fn render_day(
    schedules: &[PlanSchedule],
    date: NaiveDate,
    format: OutputFormat,
) -> Result<String> {
    let lessons: Vec<&ScheduledLesson> = schedules
        .iter()
        .flat_map(|ps| ps.schedule.lessons_on(date))
        .map(|l| &**l)
        .collect();

    match format {
        OutputFormat::Json => {
            Ok(serde_json::to_string_pretty(&DayView { date, lessons })? + "\n")
        }
        OutputFormat::Text => {
            let mut out = String::new();
            if lessons.is_empty() {
                let _ = writeln!(out, "{}: no lessons scheduled", date_key(date));
                return Ok(out);
            }
            let _ = writeln!(out, "{}:", date_key(date));
            for lesson in lessons {
                let day_no = (date - lesson.start_date).num_days() + 1;
                let _ = writeln!(
                    out,
                    "  #{:<3} {} (day {} of {})",
                    lesson.lesson_number, lesson.topic, day_no, lesson.day_span
                );
            }
            Ok(out)
        }
    }
}

/// Render plan summaries for `--dry-run`.
pub fn render_dry_run(plans: &[LessonPlan], format: OutputFormat) -> Result<String> {
    let summaries: Vec<PlanSummary> = plans.iter().map(PlanSummary::for_plan).collect();

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&summaries)? + "\n"),
        OutputFormat::Text => {
            let mut out = String::from("lessonsched dry-run\n");
            for summary in &summaries {
                let _ = writeln!(out);
                write_summary_header(&mut out, summary);
                for layer in &summary.layers {
                    let _ = writeln!(
                        out,
                        "  layer {} ({}): {} lesson(s), {} min",
                        layer.layer_number,
                        layer.theme.as_deref().unwrap_or("untitled"),
                        layer.lessons,
                        layer.total_minutes
                    );
                }
            }
            Ok(out)
        }
    }
}

fn schedules_text(schedules: &[PlanSchedule]) -> String {
    let mut out = String::new();

    for (i, ps) in schedules.iter().enumerate() {
        if i > 0 {
            let _ = writeln!(out);
        }
        let summary = ps.summary();
        write_summary_header(&mut out, &summary);

        if ps.schedule.is_empty() {
            let _ = writeln!(out, "  (nothing to schedule)");
        }
        for lesson in &ps.schedule.scheduled_lessons {
            let _ = writeln!(
                out,
                "  {} .. {}  {:>3}d  #{:<3} {}",
                date_key(lesson.start_date),
                date_key(lesson.end_date),
                lesson.day_span,
                lesson.lesson_number,
                lesson.topic
            );
        }
        if !ps.schedule.unscheduled.is_empty() {
            let _ = writeln!(out, "  unscheduled: {}", join_numbers(&ps.schedule.unscheduled));
        }
        if !ps.schedule.duplicates.is_empty() {
            let _ = writeln!(
                out,
                "  repeated lesson numbers ignored: {}",
                join_numbers(&ps.schedule.duplicates)
            );
        }
    }

    out
}

fn join_numbers(numbers: &[LessonNumber]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_summary_header(out: &mut String, summary: &PlanSummary) {
    let _ = writeln!(out, "plan: {} [{}]", summary.title, summary.skill);
    let _ = writeln!(out, "  total: {} min", summary.total_minutes);
    if summary.completed > 0 {
        let _ = writeln!(
            out,
            "  progress: {}/{} lessons ({}%)",
            summary.completed, summary.lesson_count, summary.progress_percent
        );
    }
    if let (Some(first), Some(last)) = (summary.first_day, summary.last_day) {
        let _ = writeln!(out, "  days: {} .. {}", date_key(first), date_key(last));
    }
}
