// src/engine/core.rs

//! Pure scheduling pass over loaded plans.
//!
//! No files, channels or clocks: given plans and [`EffectiveSettings`] this
//! always produces the same schedules.

use chrono::Days;
use tracing::debug;

use crate::engine::settings::EffectiveSettings;
use crate::errors::Result;
use crate::plan::{
    completed_in_plan, remaining_lessons, validate_plan, LessonNumber, LessonPlan, PlanSummary,
};
use crate::schedule::{compute_schedule, try_compute_schedule, ScheduleResult};
use crate::types::GraphPolicy;

/// A plan together with its computed schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanSchedule {
    pub plan: LessonPlan,
    pub schedule: ScheduleResult,
    /// Lesson numbers marked done for this plan.
    pub completed: Vec<LessonNumber>,
}

impl PlanSchedule {
    pub fn summary(&self) -> PlanSummary {
        PlanSummary::new(&self.plan, &self.schedule, &self.completed)
    }
}

/// Schedule every plan in turn.
///
/// The first plan starts on `settings.start_date`; each later plan starts
/// the day after the previous plan's last scheduled day. Completed lessons
/// apply only to the plan they name. With [`GraphPolicy::Error`] a plan that
/// fails validation aborts the pass.
pub fn schedule_plans(
    plans: &[LessonPlan],
    settings: &EffectiveSettings,
) -> Result<Vec<PlanSchedule>> {
    let mut start = settings.start_date;
    let mut out = Vec::with_capacity(plans.len());

    for (position, plan) in (1..).zip(plans) {
        let completed = completed_in_plan(&settings.completed, position);
        let lessons = remaining_lessons(&plan.lessons, &completed);
        debug!(
            plan = %plan.title,
            lessons = lessons.len(),
            completed = completed.len(),
            start = %start,
            "scheduling plan"
        );

        let schedule = match settings.on_invalid_graph {
            GraphPolicy::Drop => {
                compute_schedule(&lessons, settings.daily_commitment_minutes, start)
            }
            GraphPolicy::Error => {
                validate_plan(plan)?;
                try_compute_schedule(&lessons, settings.daily_commitment_minutes, start)?
            }
        };

        if let Some(next) = schedule
            .last_day()
            .and_then(|d| d.checked_add_days(Days::new(1)))
        {
            start = next;
        }

        out.push(PlanSchedule {
            plan: plan.clone(),
            schedule,
            completed,
        });
    }

    Ok(out)
}
