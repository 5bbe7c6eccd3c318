// src/plan/loader.rs

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::errors::{LessonschedError, Result};
use crate::plan::model::LessonPlan;

/// A plan file holds either one plan or an array of plans.
#[derive(Deserialize)]
#[serde(untagged)]
enum PlanDocument {
    Many(Vec<LessonPlan>),
    One(LessonPlan),
}

/// Parse one or more plans from JSON text.
///
/// Only performs deserialization; use [`crate::plan::validate_plan`] for
/// semantic checks.
pub fn parse_plans(contents: &str) -> Result<Vec<LessonPlan>> {
    let plans = match serde_json::from_str::<PlanDocument>(contents) {
        Ok(PlanDocument::Many(plans)) => plans,
        Ok(PlanDocument::One(plan)) => vec![plan],
        // Re-parse as a single plan so the error names the offending field
        // instead of serde's generic "did not match any variant".
        Err(_) => vec![serde_json::from_str::<LessonPlan>(contents)?],
    };

    if plans.is_empty() {
        return Err(LessonschedError::PlanError(
            "plan file contains an empty array".to_string(),
        ));
    }

    Ok(plans)
}

/// Load one or more plans from a JSON file.
pub fn load_plans(path: impl AsRef<Path>) -> Result<Vec<LessonPlan>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let plans = parse_plans(&contents)?;
    debug!(path = ?path, plans = plans.len(), "loaded lesson plans");
    Ok(plans)
}
