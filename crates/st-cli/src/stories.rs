//! User story section: create, edit and delete flows.

use crate::app::{App, Flow};
use crate::error::AppResult;
use crate::prompt;

use std::io::{BufRead, Write};

use st_core::{CoreError, Priority, UserStory, validate};
use uuid::Uuid;

impl<R: BufRead, W: Write> App<R, W> {
    /// Story form: prompt, validate, create or update, reload the owner.
    pub async fn save_story(&mut self, story_id: Option<Uuid>) -> AppResult<Flow> {
        let Some(sprint_id) = self.current_sprint.as_ref().map(|s| s.id) else {
            return Ok(Flow::Continue);
        };

        let existing = story_id.and_then(|id| {
            self.current_story
                .as_ref()
                .filter(|s| s.id == id)
                .cloned()
                .or_else(|| {
                    self.current_sprint
                        .as_ref()
                        .and_then(|s| s.story(id))
                        .cloned()
                })
        });

        let title = prompt::read(
            &mut self.input,
            &mut self.out,
            "Title",
            existing.as_ref().map(|s| s.title.as_str()),
        )?;
        let description = prompt::read(
            &mut self.input,
            &mut self.out,
            "Description",
            existing.as_ref().map(|s| s.description.as_str()),
        )?;

        let priority_default = existing
            .as_ref()
            .map(|s| s.priority.as_str())
            .unwrap_or("MEDIUM");
        let priority_input = prompt::read(
            &mut self.input,
            &mut self.out,
            "Priority (HIGH/MEDIUM/LOW)",
            Some(priority_default),
        )?;
        let priority: Priority = priority_input.parse()?;

        let points_default = existing
            .as_ref()
            .map(|s| s.story_points.to_string())
            .unwrap_or_else(|| "1".to_string());
        let points_input = prompt::read(
            &mut self.input,
            &mut self.out,
            "Story points",
            Some(points_default.as_str()),
        )?;
        let story_points: u32 = points_input.parse().map_err(|_| {
            CoreError::validation("storyPoints", format!("expected a number, got {points_input}"))
        })?;

        let story = match existing {
            Some(mut story) => {
                story.title = title;
                story.description = description;
                story.priority = priority;
                story.story_points = story_points;
                story
            }
            None => UserStory::new(title, description, priority, story_points),
        };

        validate::validate_story(&story)?;

        if story_id.is_some() {
            self.client.update_story(sprint_id, &story).await?;
        } else {
            self.client.create_story(sprint_id, &story).await?;
        }

        // Refresh the board when the open story was edited, else the sprint
        if story_id.is_some() && self.current_story.as_ref().is_some_and(|s| s.id == story.id) {
            self.show_story_details(sprint_id, story.id).await
        } else {
            self.show_sprint_details(sprint_id).await
        }
    }

    /// Delete a story after explicit confirmation, then reload the sprint.
    pub async fn delete_story_by_id(&mut self, story_id: Uuid) -> AppResult<Flow> {
        let Some(sprint_id) = self.current_sprint.as_ref().map(|s| s.id) else {
            return Ok(Flow::Continue);
        };

        let title = self
            .current_sprint
            .as_ref()
            .and_then(|s| s.story(story_id))
            .map(|s| s.title.clone())
            .unwrap_or_default();

        let message = format!(
            "Are you sure you want to delete story \"{title}\"? This action cannot be undone."
        );
        if !prompt::confirm(&mut self.input, &mut self.out, &message)? {
            return Ok(Flow::Continue);
        }

        self.client.delete_story(sprint_id, story_id).await?;
        if self.current_story.as_ref().is_some_and(|s| s.id == story_id) {
            self.current_story = None;
        }
        self.show_sprint_details(sprint_id).await
    }

    /// Delete the story open on the board.
    pub async fn delete_current_story(&mut self) -> AppResult<Flow> {
        let Some((_, story_id)) = self.current_ids() else {
            return Ok(Flow::Continue);
        };
        self.delete_story_by_id(story_id).await
    }
}
