// src/dag/mod.rs

//! Lesson prerequisite graph and ordering.
//!
//! - [`graph`] holds the adjacency of a lesson set keyed by lesson number.
//! - [`order`] computes the layer-aware topological order (Kahn).
//! - [`check`] turns duplicates, dangling references and cycles into errors.

pub mod check;
pub mod graph;
pub mod order;

pub use check::{check_graph, cycle_members};
pub use graph::LessonGraph;
pub use order::{topological_order, TopoOrder};
