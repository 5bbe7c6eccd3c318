// src/dag/check.rs

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;

use crate::dag::graph::LessonGraph;
use crate::errors::{LessonschedError, Result};
use crate::plan::model::LessonNumber;

/// Verify that a lesson graph can be scheduled in full.
///
/// Checks, in order:
/// - lesson numbers are unique
/// - every prerequisite refers to a lesson in the graph
/// - the graph has no cycles
pub fn check_graph(graph: &LessonGraph<'_>) -> Result<()> {
    if let Some(&dup) = graph.duplicates().first() {
        return Err(LessonschedError::DuplicateLesson(dup));
    }

    if let Some(&(lesson, missing)) = graph.dangling().first() {
        return Err(LessonschedError::DanglingReference { lesson, missing });
    }

    let members = cycle_members(graph);
    if !members.is_empty() {
        return Err(LessonschedError::CycleDetected { lessons: members });
    }

    Ok(())
}

/// Lessons that sit on a prerequisite cycle, ascending.
///
/// Edge direction: prerequisite -> dependent. A lesson listing itself in
/// `connections` counts as a cycle of one.
pub fn cycle_members(graph: &LessonGraph<'_>) -> Vec<LessonNumber> {
    let mut g: DiGraphMap<LessonNumber, ()> = DiGraphMap::new();

    for number in graph.numbers() {
        g.add_node(number);
    }
    for number in graph.numbers() {
        for &dep in graph.dependencies_of(number) {
            if g.contains_node(dep) {
                g.add_edge(dep, number, ());
            }
        }
    }

    let mut members: Vec<LessonNumber> = tarjan_scc(&g)
        .into_iter()
        .filter(|scc| scc.len() > 1 || g.contains_edge(scc[0], scc[0]))
        .flatten()
        .collect();
    members.sort_unstable();
    members
}
