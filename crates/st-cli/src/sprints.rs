//! Sprint section: create, edit and delete flows.

use crate::app::{App, Flow};
use crate::error::AppResult;
use crate::prompt;

use std::io::{BufRead, Write};

use chrono::{Days, NaiveDate};
use st_core::{CoreError, Sprint, validate};
use uuid::Uuid;

fn parse_date(value: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| CoreError::validation("date", format!("expected yyyy-mm-dd, got {value}")))
}

impl<R: BufRead, W: Write> App<R, W> {
    /// Sprint form: prompt, validate, create or update, reload, re-render.
    /// Creating assigns a fresh random identifier client-side.
    pub async fn save_sprint(&mut self, sprint_id: Option<Uuid>) -> AppResult<Flow> {
        let existing = match sprint_id {
            Some(id) => self.current_sprint.as_ref().filter(|s| s.id == id).cloned(),
            None => None,
        };

        let today = chrono::Local::now().date_naive();
        let default_start = existing.as_ref().map(|s| s.start_date).unwrap_or(today);
        let default_end = existing
            .as_ref()
            .map(|s| s.end_date)
            .unwrap_or_else(|| today + Days::new(14));

        let start_default = default_start.format("%Y-%m-%d").to_string();
        let end_default = default_end.format("%Y-%m-%d").to_string();

        let name = prompt::read(
            &mut self.input,
            &mut self.out,
            "Sprint name",
            existing.as_ref().map(|s| s.name.as_str()),
        )?;
        let start = prompt::read(
            &mut self.input,
            &mut self.out,
            "Start date (yyyy-mm-dd)",
            Some(start_default.as_str()),
        )?;
        let end = prompt::read(
            &mut self.input,
            &mut self.out,
            "End date (yyyy-mm-dd)",
            Some(end_default.as_str()),
        )?;

        let sprint = match existing {
            Some(mut sprint) => {
                sprint.name = name;
                sprint.start_date = parse_date(&start)?;
                sprint.end_date = parse_date(&end)?;
                sprint
            }
            None => Sprint::new(name, parse_date(&start)?, parse_date(&end)?),
        };

        // Required fields are checked before any network call
        validate::validate_sprint(&sprint)?;

        if sprint_id.is_some() {
            self.client.update_sprint(&sprint).await?;
            self.show_sprint_details(sprint.id).await
        } else {
            self.client.create_sprint(&sprint).await?;
            self.show_sprints_section().await
        }
    }

    /// Delete after explicit confirmation, then reload the sprint list.
    pub async fn delete_sprint(&mut self, sprint_id: Uuid) -> AppResult<Flow> {
        let name = self
            .current_sprint
            .as_ref()
            .filter(|s| s.id == sprint_id)
            .map(|s| s.name.clone())
            .unwrap_or_default();

        let message = format!(
            "Are you sure you want to delete sprint \"{name}\"? This action cannot be undone."
        );
        if !prompt::confirm(&mut self.input, &mut self.out, &message)? {
            return Ok(Flow::Continue);
        }

        self.client.delete_sprint(sprint_id).await?;
        self.current_sprint = None;
        self.current_story = None;
        self.show_sprints_section().await
    }
}
