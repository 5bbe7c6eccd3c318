// src/plan/model.rs

//! Lesson plan data model.
//!
//! Field names follow the JSON emitted by the plan generator verbatim:
//!
//! ```json
//! {
//!   "title": "Intro to Rust",
//!   "skill": "rust",
//!   "estimated_minutes": 240,
//!   "objectives": ["ownership"],
//!   "layers": [{ "layer_number": 0, "theme": "Foundations" }],
//!   "lessons": [
//!     {
//!       "lesson_number": 1,
//!       "layer": 0,
//!       "topic": "Ownership",
//!       "difficulty": "beginner",
//!       "description": "...",
//!       "resources": ["https://doc.rust-lang.org/book/"],
//!       "duration_minutes": 90,
//!       "connections": []
//!     }
//!   ]
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a lesson, unique within a plan.
pub type LessonNumber = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
            Difficulty::Expert => "expert",
        };
        f.write_str(s)
    }
}

/// A learning phase grouping parallel lessons under one theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub layer_number: u32,
    pub theme: String,
}

/// The atomic unit of scheduled work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub lesson_number: LessonNumber,

    /// Layer (depth) this lesson belongs to. 0 is the root layer.
    ///
    /// Only used as a sort key when ordering lessons.
    pub layer: u32,

    pub topic: String,

    #[serde(default)]
    pub difficulty: Difficulty,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub resources: Vec<String>,

    /// Total estimated effort for the lesson.
    pub duration_minutes: f64,

    /// Lesson numbers that must be finished before this lesson may start.
    #[serde(default)]
    pub connections: Vec<LessonNumber>,
}

impl Lesson {
    /// Convenience constructor for the fields the scheduler looks at.
    pub fn new(
        lesson_number: LessonNumber,
        layer: u32,
        topic: impl Into<String>,
        duration_minutes: f64,
        connections: Vec<LessonNumber>,
    ) -> Self {
        Self {
            lesson_number,
            layer,
            topic: topic.into(),
            difficulty: Difficulty::default(),
            description: String::new(),
            resources: Vec::new(),
            duration_minutes,
            connections,
        }
    }
}

/// A full plan as produced by the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonPlan {
    pub title: String,
    pub skill: String,

    #[serde(default)]
    pub estimated_minutes: f64,

    #[serde(default)]
    pub objectives: Vec<String>,

    pub layers: Vec<Layer>,
    pub lessons: Vec<Lesson>,
}

impl LessonPlan {
    /// Theme of the given layer, if the plan declares it.
    pub fn theme_of(&self, layer: u32) -> Option<&str> {
        self.layers
            .iter()
            .find(|l| l.layer_number == layer)
            .map(|l| l.theme.as_str())
    }

    /// Sum of all lesson durations.
    pub fn total_minutes(&self) -> f64 {
        self.lessons.iter().map(|l| l.duration_minutes).sum()
    }
}
