// src/plan/mod.rs

//! Lesson plans as produced by the plan generator.
//!
//! Responsibilities:
//! - Define the JSON-backed data model (`model.rs`).
//! - Load one or more plans from disk (`loader.rs`).
//! - Validate plans before scheduling (`validate.rs`).
//! - Resume a plan after some lessons are done (`progress.rs`).
//! - Summarize a plan and its schedule (`summary.rs`).

pub mod loader;
pub mod model;
pub mod progress;
pub mod summary;
pub mod validate;

pub use loader::{load_plans, parse_plans};
pub use model::{Difficulty, Layer, Lesson, LessonNumber, LessonPlan};
pub use progress::{completed_in_plan, remaining_lessons, CompletedLesson, Progress};
pub use summary::{LayerSummary, PlanSummary};
pub use validate::validate_plan;
