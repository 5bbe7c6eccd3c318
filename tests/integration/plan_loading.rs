use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use lessonsched::plan::{load_plans, parse_plans, validate_plan, Difficulty};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn demo_plan_loads_with_all_fields() -> TestResult {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let plans = load_plans(manifest.join("demos/rust-basics.json"))?;

    assert_eq!(plans.len(), 1);
    let plan = &plans[0];
    validate_plan(plan)?;

    assert_eq!(plan.title, "Rust Basics");
    assert_eq!(plan.objectives.len(), 2);
    assert_eq!(plan.theme_of(2), Some("Applied Practice"));
    assert_eq!(plan.theme_of(9), None);
    assert_eq!(plan.total_minutes(), 330.0);

    let lesson = &plan.lessons[3];
    assert_eq!(lesson.lesson_number, 4);
    assert_eq!(lesson.difficulty, Difficulty::Advanced);
    assert_eq!(lesson.connections, vec![2]);
    assert_eq!(lesson.resources.len(), 1);
    Ok(())
}

#[test]
fn array_of_plans_is_accepted() -> TestResult {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let plans = load_plans(manifest.join("demos/two-plans.json"))?;

    assert_eq!(plans.len(), 2);
    assert_eq!(plans[1].title, "Sauces");
    // Optional fields default when the generator leaves them out.
    assert_eq!(plans[0].lessons[0].difficulty, Difficulty::Beginner);
    assert!(plans[0].lessons[0].description.is_empty());
    assert_eq!(plans[0].estimated_minutes, 0.0);
    Ok(())
}

#[test]
fn fractional_durations_are_kept() -> TestResult {
    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"{{
  "title": "Fractions",
  "skill": "math",
  "layers": [],
  "lessons": [
    {{ "lesson_number": 1, "layer": 0, "topic": "Halves", "duration_minutes": 12.5 }}
  ]
}}"#
    )?;

    let plans = load_plans(file.path())?;
    assert_eq!(plans[0].lessons[0].duration_minutes, 12.5);
    assert!(plans[0].lessons[0].connections.is_empty());
    Ok(())
}

#[test]
fn difficulty_must_be_a_known_level() {
    let text = r#"{
  "title": "x", "skill": "y", "layers": [],
  "lessons": [{ "lesson_number": 1, "layer": 0, "topic": "t",
                "difficulty": "legendary", "duration_minutes": 10 }]
}"#;
    assert!(parse_plans(text).is_err());
}
