// src/dag/order.rs

//! Topological ordering of lessons (Kahn's algorithm).
//!
//! Ready lessons are extracted lowest `(layer, lesson_number)` first, which
//! studies foundational layers before later ones and keeps a stable order
//! within a layer. Lesson numbers are unique, so the key is a total order.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use tracing::{debug, trace};

use crate::dag::graph::LessonGraph;
use crate::plan::model::{Lesson, LessonNumber};

/// Result of ordering a lesson graph.
#[derive(Debug, Clone)]
pub struct TopoOrder<'a> {
    /// Lessons in processing order.
    pub order: Vec<&'a Lesson>,
    /// Lessons that never became ready (cycle members, lessons behind a
    /// missing prerequisite, and everything depending on those), ascending.
    pub unreachable: Vec<LessonNumber>,
}

impl TopoOrder<'_> {
    pub fn is_complete(&self) -> bool {
        self.unreachable.is_empty()
    }

    pub fn numbers(&self) -> Vec<LessonNumber> {
        self.order.iter().map(|l| l.lesson_number).collect()
    }
}

type ReadyKey = Reverse<(u32, LessonNumber)>;

fn ready_key(lesson: &Lesson) -> ReadyKey {
    Reverse((lesson.layer, lesson.lesson_number))
}

/// Order the lessons of `graph` so every lesson follows its prerequisites.
///
/// Always terminates: lessons whose in-degree never reaches zero are left
/// out of `order` and listed in `unreachable`.
pub fn topological_order<'a>(graph: &LessonGraph<'a>) -> TopoOrder<'a> {
    let mut in_degree: BTreeMap<LessonNumber, usize> = graph
        .numbers()
        .map(|n| (n, graph.in_degree(n)))
        .collect();

    let mut ready: BinaryHeap<ReadyKey> = graph
        .lessons()
        .filter(|l| l.connections.is_empty())
        .map(ready_key)
        .collect();

    let mut order = Vec::with_capacity(graph.len());

    while let Some(Reverse((layer, number))) = ready.pop() {
        let Some(lesson) = graph.lesson(number) else {
            continue;
        };
        trace!(lesson = number, layer, "lesson ready; appending to order");
        order.push(lesson);

        for &dependent in graph.dependents_of(number) {
            let Some(deg) = in_degree.get_mut(&dependent) else {
                continue;
            };
            *deg = deg.saturating_sub(1);
            if *deg == 0 {
                if let Some(dep_lesson) = graph.lesson(dependent) {
                    ready.push(ready_key(dep_lesson));
                }
            }
        }
    }

    let unreachable: Vec<LessonNumber> = in_degree
        .into_iter()
        .filter(|&(_, deg)| deg > 0)
        .map(|(n, _)| n)
        .collect();

    debug!(
        ordered = order.len(),
        unreachable = unreachable.len(),
        "computed topological lesson order"
    );

    TopoOrder { order, unreachable }
}
