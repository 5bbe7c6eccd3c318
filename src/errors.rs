// src/errors.rs

//! Crate-wide error type and `Result` alias.

use thiserror::Error;

use crate::plan::model::LessonNumber;

#[derive(Error, Debug)]
pub enum LessonschedError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid lesson plan: {0}")]
    PlanError(String),

    #[error("Duplicate lesson number: {0}")]
    DuplicateLesson(LessonNumber),

    #[error("Lesson {lesson} depends on unknown lesson {missing}")]
    DanglingReference {
        lesson: LessonNumber,
        missing: LessonNumber,
    },

    #[error("Cycle detected in lesson graph involving lessons {lessons:?}")]
    CycleDetected { lessons: Vec<LessonNumber> },

    #[error("Invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, LessonschedError>;
