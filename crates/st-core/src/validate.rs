//! Client-side required-field validation, run before any network call.

use crate::models::sprint::Sprint;
use crate::models::task::Task;
use crate::models::team_member::TeamMember;
use crate::models::user_story::UserStory;
use crate::{CoreError, Result};

#[track_caller]
fn required(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(field, format!("{field} is required")));
    }
    Ok(())
}

pub fn validate_sprint(sprint: &Sprint) -> Result<()> {
    required(&sprint.name, "name")?;
    if sprint.end_date < sprint.start_date {
        return Err(CoreError::validation(
            "endDate",
            "end date must not be before start date",
        ));
    }
    Ok(())
}

pub fn validate_story(story: &UserStory) -> Result<()> {
    required(&story.title, "title")?;
    if story.story_points < 1 {
        return Err(CoreError::validation(
            "storyPoints",
            "story points must be at least 1",
        ));
    }
    Ok(())
}

pub fn validate_task(task: &Task) -> Result<()> {
    required(&task.title, "title")
}

pub fn validate_team_member(member: &TeamMember) -> Result<()> {
    required(&member.name, "name")?;
    required(&member.email, "email")?;
    if !member.email.contains('@') {
        return Err(CoreError::validation(
            "email",
            "email must be a valid address",
        ));
    }
    Ok(())
}
