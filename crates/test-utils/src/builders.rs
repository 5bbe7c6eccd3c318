#![allow(dead_code)]

use lessonsched::plan::{Difficulty, Layer, Lesson, LessonNumber, LessonPlan};

/// Builder for `Lesson` to simplify test setup.
///
/// Defaults: layer 0, topic `"Lesson <n>"`, 30 minutes, no prerequisites.
pub struct LessonBuilder {
    lesson: Lesson,
}

impl LessonBuilder {
    pub fn new(number: LessonNumber) -> Self {
        Self {
            lesson: Lesson::new(number, 0, format!("Lesson {number}"), 30.0, vec![]),
        }
    }

    pub fn layer(mut self, layer: u32) -> Self {
        self.lesson.layer = layer;
        self
    }

    pub fn topic(mut self, topic: &str) -> Self {
        self.lesson.topic = topic.to_string();
        self
    }

    pub fn minutes(mut self, minutes: f64) -> Self {
        self.lesson.duration_minutes = minutes;
        self
    }

    pub fn after(mut self, prerequisite: LessonNumber) -> Self {
        self.lesson.connections.push(prerequisite);
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.lesson.difficulty = difficulty;
        self
    }

    pub fn resource(mut self, url: &str) -> Self {
        self.lesson.resources.push(url.to_string());
        self
    }

    pub fn build(self) -> Lesson {
        self.lesson
    }
}

/// Builder for `LessonPlan`.
pub struct PlanBuilder {
    plan: LessonPlan,
}

impl PlanBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            plan: LessonPlan {
                title: title.to_string(),
                skill: "testing".to_string(),
                estimated_minutes: 0.0,
                objectives: vec![],
                layers: vec![],
                lessons: vec![],
            },
        }
    }

    pub fn skill(mut self, skill: &str) -> Self {
        self.plan.skill = skill.to_string();
        self
    }

    pub fn layer(mut self, layer_number: u32, theme: &str) -> Self {
        self.plan.layers.push(Layer {
            layer_number,
            theme: theme.to_string(),
        });
        self
    }

    pub fn lesson(mut self, lesson: Lesson) -> Self {
        self.plan.estimated_minutes += lesson.duration_minutes;
        self.plan.lessons.push(lesson);
        self
    }

    pub fn build(self) -> LessonPlan {
        self.plan
    }
}

impl Default for PlanBuilder {
    fn default() -> Self {
        Self::new("Test plan")
    }
}
