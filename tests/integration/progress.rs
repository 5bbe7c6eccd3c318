use lessonsched::plan::{completed_in_plan, remaining_lessons, CompletedLesson, PlanSummary, Progress};
use lessonsched::schedule::compute_schedule;
use lessonsched_test_utils::builders::{LessonBuilder, PlanBuilder};
use lessonsched_test_utils::ymd;

#[test]
fn completed_lessons_no_longer_block_dependents() {
    let lessons = vec![
        LessonBuilder::new(1).build(),
        LessonBuilder::new(2).layer(1).after(1).build(),
        LessonBuilder::new(3).layer(1).after(1).after(2).build(),
    ];

    let remaining = remaining_lessons(&lessons, &[1, 42]);

    let numbers: Vec<u32> = remaining.iter().map(|l| l.lesson_number).collect();
    assert_eq!(numbers, vec![2, 3]);
    assert!(remaining[0].connections.is_empty());
    assert_eq!(remaining[1].connections, vec![2]);
}

#[test]
fn nothing_completed_keeps_everything() {
    let lessons = vec![LessonBuilder::new(1).build(), LessonBuilder::new(2).after(1).build()];
    assert_eq!(remaining_lessons(&lessons, &[]), lessons);
}

#[test]
fn summary_groups_lessons_by_layer() {
    let plan = PlanBuilder::new("Guitar")
        .skill("music")
        .layer(0, "Basics")
        .layer(1, "Chords")
        .lesson(LessonBuilder::new(1).minutes(30.0).build())
        .lesson(LessonBuilder::new(2).layer(1).minutes(45.0).after(1).build())
        .lesson(LessonBuilder::new(3).layer(1).minutes(15.0).after(1).build())
        .lesson(LessonBuilder::new(4).layer(2).minutes(10.0).after(9).build())
        .build();

    let schedule = compute_schedule(&plan.lessons, 30.0, ymd(2024, 1, 1));
    let summary = PlanSummary::new(&plan, &schedule, &[]);

    assert_eq!(summary.total_minutes, 100.0);
    assert_eq!(summary.layers.len(), 3);
    assert_eq!(summary.layers[1].theme.as_deref(), Some("Chords"));
    assert_eq!(summary.layers[1].lessons, 2);
    assert_eq!(summary.layers[1].total_minutes, 60.0);
    assert_eq!(summary.layers[2].theme, None);
    assert_eq!(summary.scheduled, 3);
    assert_eq!(summary.unscheduled, 1);
    assert_eq!(summary.lesson_count, 4);
    assert_eq!(summary.completed, 0);
    assert_eq!(summary.progress_percent, 0);
    assert_eq!(summary.first_day, Some(ymd(2024, 1, 1)));
    // 1 day + 2 days + 1 day.
    assert_eq!(summary.last_day, Some(ymd(2024, 1, 4)));

    let dry = PlanSummary::for_plan(&plan);
    assert_eq!(dry.scheduled, 0);
    assert_eq!(dry.first_day, None);
}

#[test]
fn progress_counts_only_known_lessons_once() {
    let plan = PlanBuilder::new("Guitar")
        .lesson(LessonBuilder::new(1).build())
        .lesson(LessonBuilder::new(2).after(1).build())
        .lesson(LessonBuilder::new(3).after(2).build())
        .build();

    let progress = Progress::of(&plan.lessons, &[1, 1, 7]);
    assert_eq!(progress, Progress { completed: 1, total: 3 });
    // 33.3 rounds down, 66.7 rounds up.
    assert_eq!(progress.percent(), 33);
    assert_eq!(Progress::of(&plan.lessons, &[1, 2]).percent(), 67);
    assert_eq!(Progress::of(&plan.lessons, &[1, 2, 3]).percent(), 100);
    assert_eq!(Progress::of(&[], &[1]).percent(), 0);

    let remaining = remaining_lessons(&plan.lessons, &[1, 2]);
    let schedule = compute_schedule(&remaining, 30.0, ymd(2024, 1, 1));
    let summary = PlanSummary::new(&plan, &schedule, &[1, 2, 9]);
    assert_eq!(summary.completed, 2);
    assert_eq!(summary.lesson_count, 3);
    assert_eq!(summary.progress_percent, 67);
    assert_eq!(summary.scheduled, 1);
}

#[test]
fn completed_lessons_parse_with_optional_plan_prefix() {
    assert_eq!("3".parse::<CompletedLesson>(), Ok(CompletedLesson::new(1, 3)));
    assert_eq!(" 2:5 ".parse::<CompletedLesson>(), Ok(CompletedLesson::new(2, 5)));
    assert!("0:5".parse::<CompletedLesson>().is_err());
    assert!("2:".parse::<CompletedLesson>().is_err());

    let completed = [
        CompletedLesson::new(1, 1),
        CompletedLesson::new(2, 1),
        CompletedLesson::new(2, 3),
    ];
    assert_eq!(completed_in_plan(&completed, 1), vec![1]);
    assert_eq!(completed_in_plan(&completed, 2), vec![1, 3]);
    assert!(completed_in_plan(&completed, 3).is_empty());
}
