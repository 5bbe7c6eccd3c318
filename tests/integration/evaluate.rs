use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use serde_json::Value;

use lessonsched::cli::CliArgs;
use lessonsched::errors::LessonschedError;
use lessonsched::evaluate;
use lessonsched_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

fn demo(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("demos")
        .join(name)
        .to_string_lossy()
        .into_owned()
}

fn args(plan: &str, extra: &[&str]) -> CliArgs {
    let config = demo("Lessonsched.toml");
    let plan = demo(plan);
    let mut argv = vec!["lessonsched", "--config", config.as_str(), "--plan", plan.as_str()];
    argv.extend_from_slice(extra);
    CliArgs::try_parse_from(argv).expect("valid test arguments")
}

#[test]
fn text_schedule_lists_lessons_in_order() -> TestResult {
    init_tracing();
    let out = evaluate(&args("rust-basics.json", &[]))?;

    assert!(out.starts_with("plan: Rust Basics [rust]"));
    let expected = [
        ("2024-01-01 .. 2024-01-02", "#1"),
        ("2024-01-03 .. 2024-01-04", "#2"),
        ("2024-01-05 .. 2024-01-05", "#3"),
        ("2024-01-06 .. 2024-01-08", "#4"),
    ];
    let lines: Vec<&str> = out.lines().filter(|l| l.contains(" .. ")).collect();
    // First ".." line is the overall day range in the header.
    assert_eq!(lines[0].trim(), "days: 2024-01-01 .. 2024-01-08");
    for ((range, number), line) in expected.iter().zip(&lines[1..]) {
        assert!(line.contains(range), "{line:?} should contain {range}");
        assert!(line.contains(number), "{line:?} should contain {number}");
    }
    assert!(!out.contains("unscheduled"));
    Ok(())
}

#[test]
fn json_schedule_exposes_day_index() -> TestResult {
    let out = evaluate(&args("rust-basics.json", &["--format", "json"]))?;
    let v: Value = serde_json::from_str(&out)?;

    let plan = &v[0];
    assert_eq!(plan["title"], "Rust Basics");
    assert_eq!(plan["scheduled_lessons"][3]["lesson_number"], 4);
    assert_eq!(plan["scheduled_lessons"][3]["start_date"], "2024-01-06");
    assert_eq!(plan["scheduled_lessons"][3]["end_date"], "2024-01-08");
    assert_eq!(plan["scheduled_lessons"][3]["day_span"], 3);
    assert_eq!(plan["schedule_map"]["2024-01-07"][0]["lesson_number"], 4);
    assert_eq!(plan["schedule_map"].as_object().map(|m| m.len()), Some(8));
    assert_eq!(plan["summary"]["scheduled"], 4);
    assert!(plan.get("unscheduled").is_none());
    Ok(())
}

#[test]
fn day_query_prints_active_lessons() -> TestResult {
    let out = evaluate(&args("rust-basics.json", &["--date", "2024-01-07"]))?;
    assert!(out.starts_with("2024-01-07:"));
    assert!(out.contains("Building a CLI (day 2 of 3)"));

    let empty = evaluate(&args("rust-basics.json", &["--date", "2023-12-31"]))?;
    assert_eq!(empty, "2023-12-31: no lessons scheduled\n");

    let json = evaluate(&args(
        "rust-basics.json",
        &["--date", "2030-01-01", "--format", "json"],
    ))?;
    let v: Value = serde_json::from_str(&json)?;
    assert_eq!(v["date"], "2030-01-01");
    assert_eq!(v["lessons"].as_array().map(Vec::len), Some(0));
    Ok(())
}

#[test]
fn multiple_plans_are_chained() -> TestResult {
    let out = evaluate(&args(
        "two-plans.json",
        &["--daily-minutes", "30", "--format", "json"],
    ))?;
    let v: Value = serde_json::from_str(&out)?;

    assert_eq!(v.as_array().map(Vec::len), Some(2));
    assert_eq!(v[0]["scheduled_lessons"][1]["end_date"], "2024-01-03");
    assert_eq!(v[1]["title"], "Sauces");
    assert_eq!(v[1]["scheduled_lessons"][0]["start_date"], "2024-01-04");
    assert_eq!(v[1]["scheduled_lessons"][1]["start_date"], "2024-01-05");
    Ok(())
}

#[test]
fn completed_lessons_only_apply_to_the_plan_they_name() -> TestResult {
    let out = evaluate(&args(
        "two-plans.json",
        &["--daily-minutes", "30", "--completed", "1,2:2", "--format", "json"],
    ))?;
    let v: Value = serde_json::from_str(&out)?;

    let numbers = |plan: usize| -> Vec<u64> {
        v[plan]["scheduled_lessons"]
            .as_array()
            .map(|a| a.iter().filter_map(|s| s["lesson_number"].as_u64()).collect())
            .unwrap_or_default()
    };
    assert_eq!(numbers(0), vec![2]);
    assert_eq!(numbers(1), vec![1]);
    assert_eq!(v[0]["summary"]["completed"], 1);
    assert_eq!(v[0]["summary"]["progress_percent"], 50);
    assert_eq!(v[1]["summary"]["completed"], 1);
    Ok(())
}

#[test]
fn text_header_shows_progress() -> TestResult {
    let out = evaluate(&args("rust-basics.json", &["--completed", "1,4,99"]))?;
    assert!(out.contains("  progress: 2/4 lessons (50%)"));

    let fresh = evaluate(&args("rust-basics.json", &[]))?;
    assert!(!fresh.contains("progress:"));
    Ok(())
}

#[test]
fn broken_graph_is_dropped_or_rejected() -> TestResult {
    let out = evaluate(&args("cyclic.json", &[]))?;
    assert!(out.contains("#1"));
    assert!(out.contains("unscheduled: 2, 3, 4"));

    match evaluate(&args("cyclic.json", &["--strict"])) {
        Err(LessonschedError::DanglingReference { lesson, missing }) => {
            assert_eq!((lesson, missing), (4, 99));
        }
        other => panic!("expected DanglingReference, got {other:?}"),
    }
    Ok(())
}

#[test]
fn completed_lessons_are_skipped() -> TestResult {
    let out = evaluate(&args(
        "rust-basics.json",
        &["--completed", "1", "--format", "json"],
    ))?;
    let v: Value = serde_json::from_str(&out)?;

    let numbers: Vec<u64> = v[0]["scheduled_lessons"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|s| s["lesson_number"].as_u64())
        .collect();
    assert_eq!(numbers, vec![2, 3, 4]);
    assert_eq!(v[0]["scheduled_lessons"][0]["start_date"], "2024-01-01");
    assert_eq!(v[0]["scheduled_lessons"][2]["start_date"], "2024-01-04");
    Ok(())
}

#[test]
fn dry_run_summarizes_without_scheduling() -> TestResult {
    let out = evaluate(&args("rust-basics.json", &["--dry-run"]))?;

    assert!(out.starts_with("lessonsched dry-run"));
    assert!(out.contains("layer 0 (Foundations): 1 lesson(s), 90 min"));
    assert!(out.contains("layer 1 (Core Techniques): 2 lesson(s), 105 min"));
    assert!(!out.contains("#1"));

    assert!(matches!(
        evaluate(&args("cyclic.json", &["--dry-run"])),
        Err(LessonschedError::DanglingReference { .. })
    ));
    Ok(())
}
