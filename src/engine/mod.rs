// src/engine/mod.rs

//! Orchestration around the scheduler.
//!
//! - [`settings`] merges config and CLI flags.
//! - [`core`] runs one pure scheduling pass over loaded plans.
//! - [`runtime`] is the `--watch` loop reacting to input changes and
//!   shutdown signals.

pub mod core;
pub mod runtime;
pub mod settings;

pub use self::core::{schedule_plans, PlanSchedule};
pub use runtime::{Runtime, RuntimeEvent, WatchStats};
pub use settings::EffectiveSettings;
