// src/plan/validate.rs

use std::collections::BTreeSet;

use crate::dag::{check_graph, LessonGraph};
use crate::errors::{LessonschedError, Result};
use crate::plan::model::LessonPlan;

/// Run semantic validation against a loaded plan.
///
/// This checks:
/// - there is at least one lesson
/// - lesson numbers are unique
/// - every duration is a finite, positive number
/// - every lesson's `layer` is declared in `layers` (when any are declared)
/// - no lesson lists itself in `connections`
/// - every connection refers to a lesson in the plan
/// - the prerequisite graph has no cycles
pub fn validate_plan(plan: &LessonPlan) -> Result<()> {
    ensure_has_lessons(plan)?;
    ensure_unique_numbers(plan)?;
    validate_durations(plan)?;
    validate_layers(plan)?;
    validate_connections(plan)?;
    validate_graph(plan)?;
    Ok(())
}

fn ensure_has_lessons(plan: &LessonPlan) -> Result<()> {
    if plan.lessons.is_empty() {
        return Err(LessonschedError::PlanError(format!(
            "plan '{}' must contain at least one lesson",
            plan.title
        )));
    }
    Ok(())
}

fn ensure_unique_numbers(plan: &LessonPlan) -> Result<()> {
    let mut seen = BTreeSet::new();
    for lesson in &plan.lessons {
        if !seen.insert(lesson.lesson_number) {
            return Err(LessonschedError::DuplicateLesson(lesson.lesson_number));
        }
    }
    Ok(())
}

fn validate_durations(plan: &LessonPlan) -> Result<()> {
    for lesson in &plan.lessons {
        if !lesson.duration_minutes.is_finite() || lesson.duration_minutes <= 0.0 {
            return Err(LessonschedError::PlanError(format!(
                "lesson {} has non-positive duration_minutes ({})",
                lesson.lesson_number, lesson.duration_minutes
            )));
        }
    }
    Ok(())
}

fn validate_connections(plan: &LessonPlan) -> Result<()> {
    for lesson in &plan.lessons {
        if lesson.connections.contains(&lesson.lesson_number) {
            return Err(LessonschedError::PlanError(format!(
                "lesson {} cannot depend on itself in `connections`",
                lesson.lesson_number
            )));
        }
    }
    Ok(())
}

fn validate_layers(plan: &LessonPlan) -> Result<()> {
    if plan.layers.is_empty() {
        return Ok(());
    }

    let declared: BTreeSet<u32> = plan.layers.iter().map(|l| l.layer_number).collect();
    for lesson in &plan.lessons {
        if !declared.contains(&lesson.layer) {
            return Err(LessonschedError::PlanError(format!(
                "lesson {} belongs to undeclared layer {}",
                lesson.lesson_number, lesson.layer
            )));
        }
    }
    Ok(())
}

/// Dangling references, then cycles.
fn validate_graph(plan: &LessonPlan) -> Result<()> {
    let graph = LessonGraph::from_lessons(&plan.lessons);
    check_graph(&graph)
}
