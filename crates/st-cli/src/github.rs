//! GitHub import section. Live import is behind the `github.live_import`
//! flag; the default mode substitutes the fixed sample issue set and creates
//! imported tasks locally without calling the import endpoints.

use crate::app::{App, Flow};
use crate::error::{AppError, AppResult};
use crate::{prompt, render};

use std::io::{BufRead, Write};

use st_core::{CoreError, GitHubIssue, Task};

impl<R: BufRead, W: Write> App<R, W> {
    /// Fetch open issues for a repository and render them.
    pub async fn fetch_github_issues(&mut self) -> AppResult<Flow> {
        let owner = prompt::read(&mut self.input, &mut self.out, "Repository owner", None)?;
        let repo = prompt::read(&mut self.input, &mut self.out, "Repository name", None)?;

        if owner.is_empty() || repo.is_empty() {
            return Err(CoreError::validation(
                "repository",
                "Please enter both the repository owner and name.",
            )
            .into());
        }

        let issues = if self.github.live_import {
            self.client.get_github_issues(&owner, &repo).await?
        } else {
            sample_issues(&owner, &repo)
        };

        render::github_issues(&mut self.out, &issues)?;
        self.github_repo = Some((owner, repo));
        self.github_issues = issues;
        Ok(Flow::Continue)
    }

    /// Import a fetched issue as a task of a chosen sprint/story.
    pub async fn import_github_issue(&mut self, index: usize) -> AppResult<Flow> {
        let issue = self
            .github_issues
            .get(index - 1)
            .cloned()
            .ok_or_else(|| AppError::not_found("Issue", index))?;

        if self.sprints.is_empty() {
            return Err(CoreError::validation(
                "sprint",
                "You need to create a sprint before importing GitHub issues.",
            )
            .into());
        }

        writeln!(self.out, "Import \"{}\" into:", issue.title)?;
        for (i, sprint) in self.sprints.iter().enumerate() {
            writeln!(self.out, "  [{}] {}", i + 1, sprint.name)?;
        }
        let sprint_index = self.read_selection("Sprint", self.sprints.len())?;
        let sprint_id = self.sprints[sprint_index].id;

        let stories: Vec<_> = self.sprints[sprint_index]
            .user_stories
            .iter()
            .map(|s| (s.id, s.title.clone()))
            .collect();
        if stories.is_empty() {
            return Err(CoreError::validation(
                "story",
                "No user stories available for this sprint.",
            )
            .into());
        }

        for (i, (_, title)) in stories.iter().enumerate() {
            writeln!(self.out, "  [{}] {}", i + 1, title)?;
        }
        let story_index = self.read_selection("User story", stories.len())?;
        let story_id = stories[story_index].0;

        if self.github.live_import {
            let Some((owner, repo)) = self.github_repo.clone() else {
                return Err(
                    CoreError::validation("repository", "Fetch issues before importing.").into(),
                );
            };
            self.client
                .import_github_issues(&owner, &repo, sprint_id, story_id)
                .await?;

            writeln!(self.out, "GitHub issue imported successfully!")?;
            if self.current_ids() == Some((sprint_id, story_id)) {
                return self.refresh_current_story().await;
            }
            return Ok(Flow::Continue);
        }

        // Demo mode: create the task locally instead of calling the API
        let mut task = Task::new(issue.title.clone(), issue.description.clone());
        task.github_issue_url = Some(issue.url.clone());

        if let Some(story) = self.sprints[sprint_index]
            .user_stories
            .iter_mut()
            .find(|s| s.id == story_id)
        {
            story.tasks.push(task.clone());
        }
        if let Some(sprint) = self.current_sprint.as_mut().filter(|s| s.id == sprint_id)
            && let Some(story) = sprint.story_mut(story_id)
        {
            story.tasks.push(task.clone());
        }
        if let Some(story) = self.current_story.as_mut().filter(|s| s.id == story_id) {
            story.tasks.push(task);
            let refreshed = story.clone();
            render::board(&mut self.out, &refreshed, &self.team_members)?;
        }

        writeln!(self.out, "GitHub issue imported successfully!")?;
        Ok(Flow::Continue)
    }

    fn read_selection(&mut self, label: &str, max: usize) -> AppResult<usize> {
        let answer = prompt::read(&mut self.input, &mut self.out, label, Some("1"))?;
        let n: usize = answer.parse().map_err(|_| {
            CoreError::validation("selection", format!("expected a number, got {answer}"))
        })?;

        if n < 1 || n > max {
            return Err(CoreError::validation("selection", format!("no entry {n}")).into());
        }
        Ok(n - 1)
    }
}

/// The fixed sample issue set used when live import is disabled.
pub(crate) fn sample_issues(owner: &str, repo: &str) -> Vec<GitHubIssue> {
    vec![
        GitHubIssue {
            id: "1".to_string(),
            number: "1".to_string(),
            title: "Fix login page".to_string(),
            description: Some("Login page doesn't work on mobile devices".to_string()),
            state: "open".to_string(),
            url: format!("https://github.com/{owner}/{repo}/issues/1"),
            labels: vec!["bug".to_string(), "frontend".to_string()],
        },
        GitHubIssue {
            id: "2".to_string(),
            number: "2".to_string(),
            title: "Add user profile page".to_string(),
            description: Some("Create a new page for user profiles".to_string()),
            state: "open".to_string(),
            url: format!("https://github.com/{owner}/{repo}/issues/2"),
            labels: vec!["enhancement".to_string(), "frontend".to_string()],
        },
        GitHubIssue {
            id: "3".to_string(),
            number: "3".to_string(),
            title: "Update database schema".to_string(),
            description: Some("Need to update the schema for new features".to_string()),
            state: "open".to_string(),
            url: format!("https://github.com/{owner}/{repo}/issues/3"),
            labels: vec!["backend".to_string(), "database".to_string()],
        },
    ]
}
