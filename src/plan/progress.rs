// src/plan/progress.rs

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::plan::model::{Lesson, LessonNumber};

/// A lesson marked as done on the command line.
///
/// Written `N` for lesson `N` of the first plan in the file, or `P:N` for
/// lesson `N` of plan `P` (plans count from 1 in file order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CompletedLesson {
    pub plan: usize,
    pub lesson: LessonNumber,
}

impl CompletedLesson {
    pub fn new(plan: usize, lesson: LessonNumber) -> Self {
        Self { plan, lesson }
    }
}

impl FromStr for CompletedLesson {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (plan, lesson) = match s.split_once(':') {
            Some((plan, lesson)) => {
                let plan: usize = plan
                    .trim()
                    .parse()
                    .map_err(|_| format!("invalid plan number in '{s}'"))?;
                if plan == 0 {
                    return Err(format!("plan numbers start at 1 (got '{s}')"));
                }
                (plan, lesson.trim())
            }
            None => (1, s),
        };

        let lesson = lesson
            .parse()
            .map_err(|_| format!("invalid lesson number in '{s}'"))?;
        Ok(Self { plan, lesson })
    }
}

impl fmt::Display for CompletedLesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.plan, self.lesson)
    }
}

/// Lesson numbers completed in plan `plan` (1-based).
pub fn completed_in_plan(completed: &[CompletedLesson], plan: usize) -> Vec<LessonNumber> {
    completed
        .iter()
        .filter(|c| c.plan == plan)
        .map(|c| c.lesson)
        .collect()
}

/// Lessons still left to study once `completed` are done.
///
/// Completed lessons are removed and stripped from the remaining lessons'
/// `connections`, so a finished prerequisite no longer holds anything back.
/// Unknown numbers in `completed` are ignored.
pub fn remaining_lessons(lessons: &[Lesson], completed: &[LessonNumber]) -> Vec<Lesson> {
    let done: BTreeSet<LessonNumber> = completed.iter().copied().collect();

    lessons
        .iter()
        .filter(|l| !done.contains(&l.lesson_number))
        .map(|l| {
            let mut lesson = l.clone();
            lesson.connections.retain(|c| !done.contains(c));
            lesson
        })
        .collect()
}

/// How far a learner is through a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    /// Distinct completed lessons that exist in the plan.
    pub completed: usize,
    /// Distinct lessons in the plan.
    pub total: usize,
}

impl Progress {
    /// Count the `completed` numbers that name lessons of `lessons`.
    pub fn of(lessons: &[Lesson], completed: &[LessonNumber]) -> Self {
        let known: BTreeSet<LessonNumber> = lessons.iter().map(|l| l.lesson_number).collect();
        let done = completed
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .intersection(&known)
            .count();

        Self {
            completed: done,
            total: known.len(),
        }
    }

    /// Whole-number percentage, rounded half up; 0 for an empty plan.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let pct = (self.completed as f64 / self.total as f64 * 100.0).round();
        pct as u32
    }
}
