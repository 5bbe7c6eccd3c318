// src/schedule/compute.rs

//! Calendar assignment for an ordered lesson graph.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::{Days, Local, NaiveDate};
use tracing::{debug, info, warn};

use crate::dag::{check_graph, topological_order, LessonGraph};
use crate::errors::Result;
use crate::plan::model::{Lesson, LessonNumber};
use crate::schedule::model::{ScheduleResult, ScheduledLesson};

/// Clamp a daily commitment to at least one minute.
///
/// `NaN` also becomes one minute.
pub fn clamp_commitment(daily_commitment_minutes: f64) -> f64 {
    daily_commitment_minutes.max(1.0)
}

/// Number of calendar days a lesson occupies:
/// `max(1, ceil(duration / max(1, commitment)))`.
pub fn day_span(duration_minutes: f64, daily_commitment_minutes: f64) -> u32 {
    let days = (duration_minutes / clamp_commitment(daily_commitment_minutes)).ceil();
    // `as` saturates and maps NaN to 0.
    (days as u32).max(1)
}

/// Compute a schedule for `lessons`, starting on `start_date`.
///
/// Lessons are worked on strictly one at a time, in topological order
/// (lowest layer first, then lowest lesson number). A lesson never starts
/// before the day after all of its prerequisites end.
///
/// Lessons that cannot be ordered (cycles, prerequisites missing from the
/// input, or anything depending on those) are left out and listed in
/// [`ScheduleResult::unscheduled`]. Repeated lesson numbers keep their
/// first occurrence and are listed in [`ScheduleResult::duplicates`]. Use
/// [`try_compute_schedule`] to reject such input instead.
pub fn compute_schedule(
    lessons: &[Lesson],
    daily_commitment_minutes: f64,
    start_date: NaiveDate,
) -> ScheduleResult {
    if lessons.is_empty() {
        return ScheduleResult::default();
    }

    let graph = LessonGraph::from_lessons(lessons);
    schedule_graph(&graph, daily_commitment_minutes, start_date)
}

/// [`compute_schedule`] starting today (local calendar date).
pub fn compute_schedule_from_today(
    lessons: &[Lesson],
    daily_commitment_minutes: f64,
) -> ScheduleResult {
    compute_schedule(lessons, daily_commitment_minutes, today())
}

/// Strict variant of [`compute_schedule`].
///
/// Fails with `DuplicateLesson`, `DanglingReference` or `CycleDetected`
/// before scheduling anything; otherwise returns exactly what
/// [`compute_schedule`] would.
pub fn try_compute_schedule(
    lessons: &[Lesson],
    daily_commitment_minutes: f64,
    start_date: NaiveDate,
) -> Result<ScheduleResult> {
    if lessons.is_empty() {
        return Ok(ScheduleResult::default());
    }

    let graph = LessonGraph::from_lessons(lessons);
    check_graph(&graph)?;
    Ok(schedule_graph(&graph, daily_commitment_minutes, start_date))
}

/// Current local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn schedule_graph(
    graph: &LessonGraph<'_>,
    daily_commitment_minutes: f64,
    start_date: NaiveDate,
) -> ScheduleResult {
    let commitment = clamp_commitment(daily_commitment_minutes);
    let order = topological_order(graph);

    let timeline = order
        .order
        .iter()
        .fold(Timeline::new(start_date), |mut timeline, lesson| {
            timeline.place(lesson, commitment);
            timeline
        });

    let mut unscheduled: Vec<LessonNumber> = order
        .unreachable
        .iter()
        .chain(&timeline.overflowed)
        .copied()
        .collect();
    unscheduled.sort_unstable();
    unscheduled.dedup();

    if !unscheduled.is_empty() {
        warn!(
            lessons = ?unscheduled,
            "some lessons could not be scheduled (cycle, unknown prerequisite, or date overflow)"
        );
    }

    let mut duplicates = graph.duplicates().to_vec();
    duplicates.sort_unstable();
    duplicates.dedup();

    let schedule_map = index_by_day(&timeline.placed);

    info!(
        scheduled = timeline.placed.len(),
        unscheduled = unscheduled.len(),
        days = schedule_map.len(),
        "computed lesson schedule"
    );

    ScheduleResult {
        scheduled_lessons: timeline.placed,
        schedule_map,
        unscheduled,
        duplicates,
    }
}

/// Accumulator threaded through the topological order.
#[derive(Debug)]
struct Timeline {
    /// First day not yet taken by an earlier lesson.
    next_available: NaiveDate,
    /// Lesson number -> first day after that lesson ends.
    finishes_on: HashMap<LessonNumber, NaiveDate>,
    placed: Vec<ScheduledLesson>,
    /// Lessons that would end past the last representable date.
    overflowed: Vec<LessonNumber>,
}

impl Timeline {
    fn new(start: NaiveDate) -> Self {
        Self {
            next_available: start,
            finishes_on: HashMap::new(),
            placed: Vec::new(),
            overflowed: Vec::new(),
        }
    }

    fn place(&mut self, lesson: &Lesson, commitment: f64) {
        // Once the calendar ran out, nothing later in the order fits either.
        if !self.overflowed.is_empty() {
            self.overflowed.push(lesson.lesson_number);
            return;
        }

        let earliest = lesson
            .connections
            .iter()
            .filter_map(|p| self.finishes_on.get(p))
            .fold(self.next_available, |acc, &d| acc.max(d));

        let span = day_span(lesson.duration_minutes, commitment);
        let end = earliest.checked_add_days(Days::new(u64::from(span) - 1));
        let after = earliest.checked_add_days(Days::new(u64::from(span)));

        let (Some(end), Some(after)) = (end, after) else {
            warn!(
                lesson = lesson.lesson_number,
                start = %earliest,
                day_span = span,
                "lesson does not fit in the calendar range"
            );
            self.overflowed.push(lesson.lesson_number);
            return;
        };

        debug!(
            lesson = lesson.lesson_number,
            layer = lesson.layer,
            start = %earliest,
            end = %end,
            day_span = span,
            "placed lesson"
        );

        self.placed.push(ScheduledLesson {
            lesson_number: lesson.lesson_number,
            topic: lesson.topic.clone(),
            start_date: earliest,
            end_date: end,
            day_span: span,
        });
        self.finishes_on.insert(lesson.lesson_number, after);
        self.next_available = after;
    }
}

fn index_by_day(placed: &[ScheduledLesson]) -> BTreeMap<NaiveDate, Vec<Arc<ScheduledLesson>>> {
    let mut map: BTreeMap<NaiveDate, Vec<Arc<ScheduledLesson>>> = BTreeMap::new();
    for scheduled in placed {
        let shared = Arc::new(scheduled.clone());
        for day in scheduled.days() {
            map.entry(day).or_default().push(Arc::clone(&shared));
        }
    }
    map
}
