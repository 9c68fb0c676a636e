//! Team section: create, edit and delete flows.

use crate::app::{App, Flow};
use crate::error::AppResult;
use crate::prompt;

use std::io::{BufRead, Write};

use st_core::{TeamMember, validate};
use uuid::Uuid;

impl<R: BufRead, W: Write> App<R, W> {
    /// Team member form: prompt, validate, create or update, reload list.
    pub async fn save_team_member(&mut self, member_id: Option<Uuid>) -> AppResult<Flow> {
        let existing = member_id.and_then(|id| self.team_members.iter().find(|m| m.id == id).cloned());

        let name = prompt::read(
            &mut self.input,
            &mut self.out,
            "Name",
            existing.as_ref().map(|m| m.name.as_str()),
        )?;
        let email = prompt::read(
            &mut self.input,
            &mut self.out,
            "Email",
            existing.as_ref().map(|m| m.email.as_str()),
        )?;
        let github = prompt::read_optional(
            &mut self.input,
            &mut self.out,
            "GitHub username",
            existing.as_ref().and_then(|m| m.github_username.as_deref()),
        )?;

        let member = match existing {
            Some(mut member) => {
                member.name = name;
                member.email = email;
                member.github_username = github;
                member
            }
            None => TeamMember::new(name, email, github),
        };

        validate::validate_team_member(&member)?;

        if member_id.is_some() {
            self.client.update_team_member(&member).await?;
        } else {
            self.client.create_team_member(&member).await?;
        }

        self.show_team_section().await
    }

    /// Delete after explicit confirmation. Task assignments referencing the
    /// member are left untouched client-side; the server owns any cascade.
    pub async fn delete_team_member(&mut self, member_id: Uuid) -> AppResult<Flow> {
        let name = self
            .team_members
            .iter()
            .find(|m| m.id == member_id)
            .map(|m| m.name.clone())
            .unwrap_or_default();

        let message = format!(
            "Are you sure you want to delete team member \"{name}\"? This action cannot be undone."
        );
        if !prompt::confirm(&mut self.input, &mut self.out, &message)? {
            return Ok(Flow::Continue);
        }

        self.client.delete_team_member(member_id).await?;
        self.show_team_section().await
    }
}
