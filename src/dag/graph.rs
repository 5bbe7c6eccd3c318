// src/dag/graph.rs

use std::collections::BTreeMap;

use tracing::warn;

use crate::plan::model::{Lesson, LessonNumber};

/// Internal node structure: stores immediate prerequisites and dependents.
#[derive(Debug, Clone)]
struct LessonNode {
    /// Position of the lesson in the input slice.
    index: usize,
    /// Direct prerequisites, exactly as listed in `connections`.
    deps: Vec<LessonNumber>,
    /// Direct dependents: lessons that list this one in their `connections`.
    dependents: Vec<LessonNumber>,
}

/// In-memory prerequisite graph keyed by lesson number.
///
/// Building the graph never fails. References to lessons that are not part
/// of the input are recorded as dangling, and repeated lesson numbers keep
/// their first occurrence; both are available for diagnostics. Acyclicity is
/// not checked here (see [`crate::dag::check`]).
#[derive(Debug, Clone)]
pub struct LessonGraph<'a> {
    lessons: &'a [Lesson],
    nodes: BTreeMap<LessonNumber, LessonNode>,
    dangling: Vec<(LessonNumber, LessonNumber)>,
    duplicates: Vec<LessonNumber>,
}

impl<'a> LessonGraph<'a> {
    pub fn from_lessons(lessons: &'a [Lesson]) -> Self {
        let mut nodes: BTreeMap<LessonNumber, LessonNode> = BTreeMap::new();
        let mut duplicates = Vec::new();

        // First pass: create nodes with their dependency lists.
        for (index, lesson) in lessons.iter().enumerate() {
            if nodes.contains_key(&lesson.lesson_number) {
                warn!(
                    lesson = lesson.lesson_number,
                    "duplicate lesson number; keeping the first occurrence"
                );
                duplicates.push(lesson.lesson_number);
                continue;
            }
            nodes.insert(
                lesson.lesson_number,
                LessonNode {
                    index,
                    deps: lesson.connections.clone(),
                    dependents: Vec::new(),
                },
            );
        }

        // Second pass: populate dependents based on deps. Walk the input order
        // so dependents lists are stable for identical input.
        let mut dangling = Vec::new();
        for (index, lesson) in lessons.iter().enumerate() {
            if nodes.get(&lesson.lesson_number).map(|n| n.index) != Some(index) {
                continue;
            }

            for &dep in &lesson.connections {
                match nodes.get_mut(&dep) {
                    Some(dep_node) => dep_node.dependents.push(lesson.lesson_number),
                    None => dangling.push((lesson.lesson_number, dep)),
                }
            }
        }

        Self {
            lessons,
            nodes,
            dangling,
            duplicates,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a lesson by number.
    pub fn lesson(&self, number: LessonNumber) -> Option<&'a Lesson> {
        let lessons = self.lessons;
        self.nodes.get(&number).map(|n| &lessons[n.index])
    }

    /// All distinct lessons, ascending by lesson number.
    pub fn lessons(&self) -> impl Iterator<Item = &'a Lesson> + '_ {
        let lessons = self.lessons;
        self.nodes.values().map(move |n| &lessons[n.index])
    }

    /// All distinct lesson numbers, ascending.
    pub fn numbers(&self) -> impl Iterator<Item = LessonNumber> + '_ {
        self.nodes.keys().copied()
    }

    /// Immediate prerequisites of a lesson (its `connections`).
    pub fn dependencies_of(&self, number: LessonNumber) -> &[LessonNumber] {
        self.nodes
            .get(&number)
            .map(|n| n.deps.as_slice())
            .unwrap_or(&[])
    }

    /// Immediate dependents of a lesson.
    pub fn dependents_of(&self, number: LessonNumber) -> &[LessonNumber] {
        self.nodes
            .get(&number)
            .map(|n| n.dependents.as_slice())
            .unwrap_or(&[])
    }

    /// Number of prerequisites still to satisfy before the lesson is ready.
    pub fn in_degree(&self, number: LessonNumber) -> usize {
        self.dependencies_of(number).len()
    }

    /// `(lesson, missing prerequisite)` pairs, in input order.
    pub fn dangling(&self) -> &[(LessonNumber, LessonNumber)] {
        &self.dangling
    }

    /// Lesson numbers that appeared more than once in the input.
    pub fn duplicates(&self) -> &[LessonNumber] {
        &self.duplicates
    }
}
