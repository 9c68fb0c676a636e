use crate::progress::{sprint_progress, story_progress};
use crate::tests::task_with_status;
use crate::{Priority, Sprint, TaskStatus, UserStory};

use chrono::NaiveDate;

fn sprint() -> Sprint {
    Sprint::new(
        "Sprint 1".to_string(),
        NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
        NaiveDate::from_ymd_opt(2025, 3, 17).unwrap(),
    )
}

fn story_with_tasks(done: usize, total: usize) -> UserStory {
    let mut story = UserStory::new(
        "Story".to_string(),
        "desc".to_string(),
        Priority::Medium,
        3,
    );
    for i in 0..total {
        let status = if i < done {
            TaskStatus::Done
        } else {
            TaskStatus::Todo
        };
        story.tasks.push(task_with_status(&format!("t{i}"), status));
    }
    story
}

#[test]
fn test_sprint_with_no_stories_is_zero() {
    assert_eq!(sprint_progress(&sprint()), 0);
}

#[test]
fn test_story_with_no_tasks_is_zero() {
    assert_eq!(story_progress(&story_with_tasks(0, 0)), 0);
}

#[test]
fn test_one_done_of_four_is_25() {
    let mut sprint = sprint();
    sprint.user_stories.push(story_with_tasks(1, 4));

    assert_eq!(sprint_progress(&sprint), 25);
    assert_eq!(story_progress(&sprint.user_stories[0]), 25);
}

#[test]
fn test_progress_rounds_to_nearest_percent() {
    // 1/3 rounds down, 2/3 rounds up
    assert_eq!(story_progress(&story_with_tasks(1, 3)), 33);
    assert_eq!(story_progress(&story_with_tasks(2, 3)), 67);
}

#[test]
fn test_progress_is_idempotent() {
    let mut sprint = sprint();
    sprint.user_stories.push(story_with_tasks(2, 5));

    let first = sprint_progress(&sprint);
    let second = sprint_progress(&sprint);

    assert_eq!(first, second);
}

#[test]
fn test_moving_a_task_to_done_never_decreases_progress() {
    let mut sprint = sprint();
    sprint.user_stories.push(story_with_tasks(1, 4));

    let before = sprint_progress(&sprint);
    sprint.user_stories[0].tasks[1].status = TaskStatus::Done;
    let after = sprint_progress(&sprint);

    assert!(after > before);
}

#[test]
fn test_progress_spans_all_stories() {
    let mut sprint = sprint();
    sprint.user_stories.push(story_with_tasks(2, 2));
    sprint.user_stories.push(story_with_tasks(0, 2));

    // 2 done of 4 across both stories
    assert_eq!(sprint_progress(&sprint), 50);
}
