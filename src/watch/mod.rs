// src/watch/mod.rs

//! Input file watching for `--watch`.
//!
//! This module is responsible for:
//! - Wiring up a cross-platform filesystem watcher (`notify`) on the plan
//!   and config files.
//! - Content hashing, so a save that changes nothing does not reschedule.
//!
//! It does not know about plans or schedules; it only turns filesystem
//! changes into runtime events.

pub mod hash;
pub mod watcher;

pub use hash::{compute_hash_for_paths, InputFingerprint};
pub use watcher::{spawn_watcher, WatcherHandle};
