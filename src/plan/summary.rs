// src/plan/summary.rs

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::plan::model::{LessonNumber, LessonPlan};
use crate::plan::progress::Progress;
use crate::schedule::ScheduleResult;

/// Per-layer row of a [`PlanSummary`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerSummary {
    pub layer_number: u32,
    pub theme: Option<String>,
    pub lessons: usize,
    pub total_minutes: f64,
}

/// Overview of a plan and, optionally, its schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSummary {
    pub title: String,
    pub skill: String,
    pub total_minutes: f64,
    pub layers: Vec<LayerSummary>,
    pub scheduled: usize,
    pub unscheduled: usize,
    /// Completed lessons that belong to this plan.
    pub completed: usize,
    /// Distinct lessons in the plan.
    pub lesson_count: usize,
    /// `completed / lesson_count` as a whole percentage.
    pub progress_percent: u32,
    pub first_day: Option<NaiveDate>,
    pub last_day: Option<NaiveDate>,
}

impl PlanSummary {
    /// Summarize a plan without a schedule (used by `--dry-run`).
    pub fn for_plan(plan: &LessonPlan) -> Self {
        Self::build(plan, None, &[])
    }

    /// Summarize a plan and its schedule. `completed` are the lesson numbers
    /// already done; numbers not in the plan are not counted.
    pub fn new(plan: &LessonPlan, schedule: &ScheduleResult, completed: &[LessonNumber]) -> Self {
        Self::build(plan, Some(schedule), completed)
    }

    fn build(
        plan: &LessonPlan,
        schedule: Option<&ScheduleResult>,
        completed: &[LessonNumber],
    ) -> Self {
        let mut per_layer: BTreeMap<u32, (usize, f64)> = BTreeMap::new();
        for lesson in &plan.lessons {
            let entry = per_layer.entry(lesson.layer).or_default();
            entry.0 += 1;
            entry.1 += lesson.duration_minutes;
        }

        let layers = per_layer
            .into_iter()
            .map(|(layer_number, (lessons, total_minutes))| LayerSummary {
                layer_number,
                theme: plan.theme_of(layer_number).map(str::to_string),
                lessons,
                total_minutes,
            })
            .collect();

        let progress = Progress::of(&plan.lessons, completed);

        Self {
            title: plan.title.clone(),
            skill: plan.skill.clone(),
            total_minutes: plan.total_minutes(),
            layers,
            scheduled: schedule.map_or(0, |s| s.scheduled_lessons.len()),
            unscheduled: schedule.map_or(0, |s| s.unscheduled.len()),
            completed: progress.completed,
            lesson_count: progress.total,
            progress_percent: progress.percent(),
            first_day: schedule.and_then(ScheduleResult::first_day),
            last_day: schedule.and_then(ScheduleResult::last_day),
        }
    }
}
