use crate::validate::{validate_sprint, validate_story, validate_task, validate_team_member};
use crate::{Priority, Sprint, Task, TeamMember, UserStory};

use chrono::NaiveDate;

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
}

#[test]
fn test_sprint_requires_name() {
    let sprint = Sprint::new("  ".to_string(), date(1), date(14));
    assert!(validate_sprint(&sprint).is_err());
}

#[test]
fn test_sprint_dates_must_be_ordered() {
    let sprint = Sprint::new("Sprint".to_string(), date(14), date(1));
    assert!(validate_sprint(&sprint).is_err());

    let ok = Sprint::new("Sprint".to_string(), date(1), date(1));
    assert!(validate_sprint(&ok).is_ok());
}

#[test]
fn test_story_requires_title_and_points() {
    let story = UserStory::new("".to_string(), "d".to_string(), Priority::Low, 1);
    assert!(validate_story(&story).is_err());

    let story = UserStory::new("S".to_string(), "d".to_string(), Priority::Low, 0);
    assert!(validate_story(&story).is_err());

    let story = UserStory::new("S".to_string(), "d".to_string(), Priority::Low, 1);
    assert!(validate_story(&story).is_ok());
}

#[test]
fn test_task_requires_title() {
    assert!(validate_task(&Task::new("".to_string(), None)).is_err());
    assert!(validate_task(&Task::new("T".to_string(), None)).is_ok());
}

#[test]
fn test_team_member_requires_name_and_email() {
    let member = TeamMember::new("".to_string(), "a@b.c".to_string(), None);
    assert!(validate_team_member(&member).is_err());

    let member = TeamMember::new("Ada".to_string(), "not-an-email".to_string(), None);
    assert!(validate_team_member(&member).is_err());

    let member = TeamMember::new("Ada".to_string(), "ada@example.com".to_string(), None);
    assert!(validate_team_member(&member).is_ok());
}
