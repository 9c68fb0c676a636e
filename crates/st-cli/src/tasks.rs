//! Task section: create, edit and delete flows.

use crate::app::{App, Flow};
use crate::error::AppResult;
use crate::prompt;

use std::io::{BufRead, Write};

use st_core::{CoreError, Task, TaskStatus, validate};
use uuid::Uuid;

impl<R: BufRead, W: Write> App<R, W> {
    /// Task form: prompt, validate, create or update, then re-derive the
    /// board from the server.
    pub async fn save_task(&mut self, task_id: Option<Uuid>) -> AppResult<Flow> {
        let Some((sprint_id, story_id)) = self.current_ids() else {
            return Ok(Flow::Continue);
        };

        let existing = task_id.and_then(|id| {
            self.current_story
                .as_ref()
                .and_then(|s| s.task(id))
                .cloned()
        });

        let title = prompt::read(
            &mut self.input,
            &mut self.out,
            "Title",
            existing.as_ref().map(|t| t.title.as_str()),
        )?;
        let description = prompt::read_optional(
            &mut self.input,
            &mut self.out,
            "Description",
            existing.as_ref().and_then(|t| t.description.as_deref()),
        )?;

        let status_default = existing.as_ref().map(|t| t.status.as_str()).unwrap_or("TO_DO");
        let status_input = prompt::read(
            &mut self.input,
            &mut self.out,
            "Status (todo/in_progress/done)",
            Some(status_default),
        )?;
        let status: TaskStatus = status_input.parse()?;

        let assignee = self.read_assignee(existing.as_ref().and_then(|t| t.assigned_team_member_id))?;

        let task = match existing {
            Some(mut task) => {
                task.title = title;
                task.description = description;
                task.status = status;
                task.assigned_team_member_id = assignee;
                task
            }
            None => {
                let mut task = Task::new(title, description);
                task.status = status;
                task.assigned_team_member_id = assignee;
                task
            }
        };

        validate::validate_task(&task)?;

        if task_id.is_some() {
            self.client.update_task(sprint_id, story_id, &task).await?;
        } else {
            self.client.create_task(sprint_id, story_id, &task).await?;
        }

        self.refresh_current_story().await
    }

    /// Pick an assignee from the loaded member list; 0 or empty = unassigned.
    fn read_assignee(&mut self, current: Option<Uuid>) -> AppResult<Option<Uuid>> {
        if self.team_members.is_empty() {
            return Ok(None);
        }

        for (i, member) in self.team_members.iter().enumerate() {
            writeln!(self.out, "  [{}] {}", i + 1, member.name)?;
        }

        let default = current
            .and_then(|id| self.team_members.iter().position(|m| m.id == id))
            .map(|i| (i + 1).to_string())
            .unwrap_or_else(|| "0".to_string());

        let answer = prompt::read(
            &mut self.input,
            &mut self.out,
            "Assignee (0 = unassigned)",
            Some(default.as_str()),
        )?;
        let index: usize = answer.parse().map_err(|_| {
            CoreError::validation("assignee", format!("expected a number, got {answer}"))
        })?;

        if index == 0 {
            return Ok(None);
        }
        Ok(self.team_members.get(index - 1).map(|m| m.id))
    }

    /// Delete after explicit confirmation, then full section reload.
    pub async fn delete_task(&mut self, task_id: Uuid) -> AppResult<Flow> {
        let Some((sprint_id, story_id)) = self.current_ids() else {
            return Ok(Flow::Continue);
        };

        let title = self
            .current_story
            .as_ref()
            .and_then(|s| s.task(task_id))
            .map(|t| t.title.clone())
            .unwrap_or_default();

        let message = format!(
            "Are you sure you want to delete task \"{title}\"? This action cannot be undone."
        );
        if !prompt::confirm(&mut self.input, &mut self.out, &message)? {
            return Ok(Flow::Continue);
        }

        self.client.delete_task(sprint_id, story_id, task_id).await?;
        self.show_story_details(sprint_id, story_id).await
    }
}
