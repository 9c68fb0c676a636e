//! Board controller: task status transitions and the write-then-reload
//! synchronization with the server.

use crate::app::{App, Flow};
use crate::error::{AppError, AppResult};
use crate::render;

use std::io::{BufRead, Write};

use log::{debug, error};
use st_core::TaskStatus;
use uuid::Uuid;

impl<R: BufRead, W: Write> App<R, W> {
    /// Move a task to another lane. Any lane to any other lane, no guards.
    ///
    /// Sends the full task (never a status-only patch) with the status
    /// normalized to the wire vocabulary, then re-derives the board from the
    /// server rather than trusting the local mutation.
    pub async fn move_task(&mut self, task_id: Uuid, target: TaskStatus) -> AppResult<Flow> {
        let Some((sprint_id, story_id)) = self.current_ids() else {
            return Ok(Flow::Continue);
        };

        let mut task = self
            .current_story
            .as_ref()
            .and_then(|s| s.task(task_id))
            .cloned()
            .ok_or_else(|| AppError::not_found("Task", task_id))?;

        task.status = target;

        debug!("Moving task {task_id} to {}", target.as_str());
        self.client.update_task(sprint_id, story_id, &task).await?;

        self.refresh_current_story().await
    }

    /// The reload half of every task mutation: re-fetch the owning story,
    /// replace both the current-story reference and the sprint's entry, and
    /// redraw the lanes. Falls back to a full section reload when the
    /// refetch fails.
    pub(crate) async fn refresh_current_story(&mut self) -> AppResult<Flow> {
        let Some((sprint_id, story_id)) = self.current_ids() else {
            return Ok(Flow::Continue);
        };

        match self.client.get_story(sprint_id, story_id).await {
            Ok(fresh) => {
                if let Some(sprint) = self.current_sprint.as_mut() {
                    sprint.replace_story(fresh.clone());
                }
                render::board(&mut self.out, &fresh, &self.team_members)?;
                self.current_story = Some(fresh);
                Ok(Flow::Continue)
            }
            Err(e) => {
                error!("Error refreshing story data: {e}");
                self.show_story_details(sprint_id, story_id).await
            }
        }
    }
}
