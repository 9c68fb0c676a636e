use crate::client::Client;
use crate::error::{AppError, AppResult};
use crate::render;

use std::io::{BufRead, Write};

use log::debug;
use st_config::GithubConfig;
use st_core::{GitHubIssue, Lanes, Sprint, TaskStatus, TeamMember, UserStory};
use uuid::Uuid;

/// Interface sections; exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Sprints,
    SprintDetails,
    StoryBoard,
    Team,
    GitHub,
}

/// Outcome of a dispatched command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The application controller. Owns the view-state store and drives the
/// interactive loop: read one command, run its handler to completion,
/// repeat. Renderers only ever see store data by reference.
pub struct App<R: BufRead, W: Write> {
    pub(crate) client: Client,
    pub(crate) github: GithubConfig,
    pub(crate) input: R,
    pub(crate) out: W,

    // View-state store: the collections the renderers read from
    pub sprints: Vec<Sprint>,
    pub team_members: Vec<TeamMember>,
    pub current_sprint: Option<Sprint>,
    pub current_story: Option<UserStory>,
    pub github_issues: Vec<GitHubIssue>,
    pub(crate) github_repo: Option<(String, String)>,

    pub(crate) section: Section,
    pub(crate) in_flight: bool,
}

fn parse_index(token: &str) -> Option<usize> {
    token.parse::<usize>().ok().filter(|n| *n >= 1)
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(client: Client, github: GithubConfig, input: R, out: W) -> Self {
        Self {
            client,
            github,
            input,
            out,
            sprints: Vec::new(),
            team_members: Vec::new(),
            current_sprint: None,
            current_story: None,
            github_issues: Vec::new(),
            github_repo: None,
            section: Section::Sprints,
            in_flight: false,
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Run the interactive loop until quit or end of input.
    pub async fn run(&mut self) -> AppResult<()> {
        if let Err(e) = self.load_initial().await {
            self.show_error(&e)?;
        }

        loop {
            render::menu(&mut self.out, self.section)?;
            let Some(line) = self.read_command()? else {
                break;
            };
            if line.is_empty() {
                continue;
            }
            match self.dispatch(&line).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) => self.show_error(&e)?,
            }
        }

        Ok(())
    }

    /// Load team members, then open the sprints section.
    async fn load_initial(&mut self) -> AppResult<()> {
        self.team_members = self.client.get_team_members().await?;
        self.show_sprints_section().await?;
        Ok(())
    }

    fn read_command(&mut self) -> AppResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Dispatch one command. Handlers never overlap: a dispatch while a
    /// handler is still in flight is rejected instead of queued.
    pub(crate) async fn dispatch(&mut self, line: &str) -> AppResult<Flow> {
        if self.in_flight {
            return Err(AppError::busy());
        }

        self.in_flight = true;
        let result = self.handle(line).await;
        self.in_flight = false;
        result
    }

    async fn handle(&mut self, line: &str) -> AppResult<Flow> {
        match self.section {
            Section::Sprints => self.handle_sprints(line).await,
            Section::SprintDetails => self.handle_sprint_details(line).await,
            Section::StoryBoard => self.handle_story_board(line).await,
            Section::Team => self.handle_team(line).await,
            Section::GitHub => self.handle_github(line).await,
        }
    }

    async fn handle_sprints(&mut self, line: &str) -> AppResult<Flow> {
        match line {
            "q" => return Ok(Flow::Quit),
            "c" => return self.save_sprint(None).await,
            "t" => return self.show_team_section().await,
            "g" => return self.show_github_section(),
            _ => {}
        }

        if let Some(index) = parse_index(line)
            && let Some(sprint) = self.sprints.get(index - 1)
        {
            let id = sprint.id;
            return self.show_sprint_details(id).await;
        }

        self.unknown_command()
    }

    async fn handle_sprint_details(&mut self, line: &str) -> AppResult<Flow> {
        let Some(sprint_id) = self.current_sprint.as_ref().map(|s| s.id) else {
            return self.show_sprints_section().await;
        };

        match line {
            "p" => return self.show_sprints_section().await,
            "u" => return self.save_sprint(Some(sprint_id)).await,
            "d" => return self.delete_sprint(sprint_id).await,
            "c" => return self.save_story(None).await,
            _ => {}
        }

        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("x"), Some(token)) => {
                if let Some(story_id) = parse_index(token).and_then(|i| self.story_id_at(i)) {
                    return self.delete_story_by_id(story_id).await;
                }
            }
            (Some(token), None) => {
                if let Some(story_id) = parse_index(token).and_then(|i| self.story_id_at(i)) {
                    return self.show_story_details(sprint_id, story_id).await;
                }
            }
            _ => {}
        }

        self.unknown_command()
    }

    async fn handle_story_board(&mut self, line: &str) -> AppResult<Flow> {
        match line {
            "p" => {
                return match self.current_sprint.as_ref().map(|s| s.id) {
                    Some(sprint_id) => self.show_sprint_details(sprint_id).await,
                    None => self.show_sprints_section().await,
                };
            }
            "a" => return self.save_task(None).await,
            "u" => {
                let story_id = self.current_story.as_ref().map(|s| s.id);
                return self.save_story(story_id).await;
            }
            "d" => return self.delete_current_story().await,
            _ => {}
        }

        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some("m"), Some(token), Some(lane)) => {
                if let Some(task_id) = parse_index(token).and_then(|i| self.task_id_at(i)) {
                    let target: TaskStatus = lane.parse()?;
                    return self.move_task(task_id, target).await;
                }
            }
            (Some("e"), Some(token), None) => {
                if let Some(task_id) = parse_index(token).and_then(|i| self.task_id_at(i)) {
                    return self.save_task(Some(task_id)).await;
                }
            }
            (Some("x"), Some(token), None) => {
                if let Some(task_id) = parse_index(token).and_then(|i| self.task_id_at(i)) {
                    return self.delete_task(task_id).await;
                }
            }
            _ => {}
        }

        self.unknown_command()
    }

    async fn handle_team(&mut self, line: &str) -> AppResult<Flow> {
        match line {
            "p" => return self.show_sprints_section().await,
            "c" => return self.save_team_member(None).await,
            _ => {}
        }

        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("e"), Some(token)) => {
                if let Some(member_id) = parse_index(token).and_then(|i| self.member_id_at(i)) {
                    return self.save_team_member(Some(member_id)).await;
                }
            }
            (Some("x"), Some(token)) => {
                if let Some(member_id) = parse_index(token).and_then(|i| self.member_id_at(i)) {
                    return self.delete_team_member(member_id).await;
                }
            }
            _ => {}
        }

        self.unknown_command()
    }

    async fn handle_github(&mut self, line: &str) -> AppResult<Flow> {
        match line {
            "p" => return self.show_sprints_section().await,
            "f" => return self.fetch_github_issues().await,
            _ => {}
        }

        let mut parts = line.split_whitespace();
        if let (Some("i"), Some(token)) = (parts.next(), parts.next())
            && let Some(index) = parse_index(token)
        {
            return self.import_github_issue(index).await;
        }

        self.unknown_command()
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Show the sprints section: reload all sprints and render the list.
    pub async fn show_sprints_section(&mut self) -> AppResult<Flow> {
        let sprints = self.client.get_sprints().await?;
        self.section = Section::Sprints;
        render::sprint_list(&mut self.out, &sprints)?;
        self.sprints = sprints;
        Ok(Flow::Continue)
    }

    /// Show sprint details: fetch the sprint by ID and render its stories.
    pub async fn show_sprint_details(&mut self, sprint_id: Uuid) -> AppResult<Flow> {
        let sprint = self.client.get_sprint(sprint_id).await?;
        self.section = Section::SprintDetails;
        render::sprint_details(&mut self.out, &sprint)?;
        self.current_sprint = Some(sprint);
        Ok(Flow::Continue)
    }

    /// Show the story board. Fetches the story directly for the latest
    /// tasks; falls back to the sprint's copy when that fails.
    pub async fn show_story_details(&mut self, sprint_id: Uuid, story_id: Uuid) -> AppResult<Flow> {
        let story = match self.client.get_story(sprint_id, story_id).await {
            Ok(fresh) => {
                if let Some(sprint) = self.current_sprint.as_mut() {
                    sprint.replace_story(fresh.clone());
                }
                fresh
            }
            Err(e) => {
                debug!("Could not get fresh story, falling back to sprint data: {e}");

                let stale = self
                    .current_sprint
                    .as_ref()
                    .is_none_or(|s| s.id != sprint_id);
                if stale {
                    self.current_sprint = Some(self.client.get_sprint(sprint_id).await?);
                }

                self.current_sprint
                    .as_ref()
                    .and_then(|s| s.story(story_id))
                    .cloned()
                    .ok_or_else(|| AppError::not_found("User story", story_id))?
            }
        };

        self.section = Section::StoryBoard;
        render::board(&mut self.out, &story, &self.team_members)?;
        self.current_story = Some(story);
        Ok(Flow::Continue)
    }

    /// Show the team section: reload members and render the list.
    pub async fn show_team_section(&mut self) -> AppResult<Flow> {
        let members = self.client.get_team_members().await?;
        self.section = Section::Team;
        render::team(&mut self.out, &members)?;
        self.team_members = members;
        Ok(Flow::Continue)
    }

    /// Show the GitHub import section. No network call until a fetch.
    pub fn show_github_section(&mut self) -> AppResult<Flow> {
        self.section = Section::GitHub;
        render::github_header(&mut self.out, self.github.live_import)?;
        Ok(Flow::Continue)
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    pub(crate) fn current_ids(&self) -> Option<(Uuid, Uuid)> {
        let sprint = self.current_sprint.as_ref()?;
        let story = self.current_story.as_ref()?;
        Some((sprint.id, story.id))
    }

    fn story_id_at(&self, index: usize) -> Option<Uuid> {
        let sprint = self.current_sprint.as_ref()?;
        sprint.user_stories.get(index - 1).map(|s| s.id)
    }

    /// Resolve a board card number to a task ID. Numbering follows board
    /// display order, the same walk the renderer uses.
    pub(crate) fn task_id_at(&self, index: usize) -> Option<Uuid> {
        let story = self.current_story.as_ref()?;
        let lanes = Lanes::partition(&story.tasks);
        lanes.in_display_order().nth(index - 1).map(|t| t.id)
    }

    fn member_id_at(&self, index: usize) -> Option<Uuid> {
        self.team_members.get(index - 1).map(|m| m.id)
    }

    fn unknown_command(&mut self) -> AppResult<Flow> {
        writeln!(self.out, "Unknown command")?;
        Ok(Flow::Continue)
    }

    /// All failures surface the same way: one error line, interface stays up.
    fn show_error(&mut self, err: &AppError) -> AppResult<()> {
        log::error!("{err}");
        writeln!(self.out, "Error: {err}")?;
        Ok(())
    }
}
