use crate::client::error::{ClientError, Result as ClientResult};

use log::debug;
use reqwest::{Client as ReqwestClient, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use st_core::{GitHubIssue, Sprint, Task, TeamMember, UserStory};
use uuid::Uuid;

/// HTTP client for the sprint tracker REST API
pub struct Client {
    pub base_url: String,
    http: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8080"); the JSON
    ///   API lives under `<base_url>/api`
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: ReqwestClient::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    fn status_text(status: StatusCode) -> String {
        status.canonical_reason().unwrap_or("").to_string()
    }

    /// Fetch and decode a JSON resource
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        debug!("GET {path}");
        let response = self.http.get(self.url(path)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::status(
                status.as_u16(),
                Self::status_text(status),
            ));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<Option<T>> {
        debug!("POST {path} {}", serde_json::to_string(body)?);
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::decode_write(path, response).await
    }

    /// POST without a request body (query-parameter endpoints)
    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<Option<T>> {
        debug!("POST {path}");
        let response = self.http.post(self.url(path)).send().await?;
        Self::decode_write(path, response).await
    }

    async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<Option<T>> {
        debug!("PUT {path} {}", serde_json::to_string(body)?);
        let response = self.http.put(self.url(path)).json(body).send().await?;
        Self::decode_write(path, response).await
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        debug!("DELETE {path}");
        let response = self.http.delete(self.url(path)).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(ClientError::write(
                status.as_u16(),
                Self::status_text(status),
                body,
            ));
        }

        Ok(())
    }

    /// Decode a write response. A non-2xx status carries the raw body text
    /// so server-side validation messages reach the user; an empty body is
    /// a valid empty result, not a parse error.
    async fn decode_write<T: DeserializeOwned>(
        path: &str,
        response: Response,
    ) -> ClientResult<Option<T>> {
        let status = response.status();
        let body = response.text().await?;
        debug!("Response for {path}: {body}");

        if !status.is_success() {
            return Err(ClientError::write(
                status.as_u16(),
                Self::status_text(status),
                body,
            ));
        }

        if body.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(serde_json::from_str(&body)?))
    }

    // =========================================================================
    // Sprint Operations
    // =========================================================================

    /// List all sprints
    pub async fn get_sprints(&self) -> ClientResult<Vec<Sprint>> {
        self.get("/sprints").await
    }

    /// Get a sprint by ID
    pub async fn get_sprint(&self, id: Uuid) -> ClientResult<Sprint> {
        self.get(&format!("/sprints/{id}")).await
    }

    /// Create a new sprint
    pub async fn create_sprint(&self, sprint: &Sprint) -> ClientResult<Option<Sprint>> {
        self.post("/sprints", sprint).await
    }

    /// Update a sprint
    pub async fn update_sprint(&self, sprint: &Sprint) -> ClientResult<Option<Sprint>> {
        self.put(&format!("/sprints/{}", sprint.id), sprint).await
    }

    /// Delete a sprint
    pub async fn delete_sprint(&self, id: Uuid) -> ClientResult<()> {
        self.delete(&format!("/sprints/{id}")).await
    }

    // =========================================================================
    // User Story Operations
    // =========================================================================

    /// List user stories in a sprint
    pub async fn get_stories(&self, sprint_id: Uuid) -> ClientResult<Vec<UserStory>> {
        self.get(&format!("/sprints/{sprint_id}/stories")).await
    }

    /// Get a user story by ID, with its latest tasks
    pub async fn get_story(&self, sprint_id: Uuid, story_id: Uuid) -> ClientResult<UserStory> {
        self.get(&format!("/sprints/{sprint_id}/stories/{story_id}"))
            .await
    }

    /// Create a new user story
    pub async fn create_story(
        &self,
        sprint_id: Uuid,
        story: &UserStory,
    ) -> ClientResult<Option<UserStory>> {
        self.post(&format!("/sprints/{sprint_id}/stories"), story)
            .await
    }

    /// Update a user story
    pub async fn update_story(
        &self,
        sprint_id: Uuid,
        story: &UserStory,
    ) -> ClientResult<Option<UserStory>> {
        self.put(&format!("/sprints/{sprint_id}/stories/{}", story.id), story)
            .await
    }

    /// Delete a user story
    pub async fn delete_story(&self, sprint_id: Uuid, story_id: Uuid) -> ClientResult<()> {
        self.delete(&format!("/sprints/{sprint_id}/stories/{story_id}"))
            .await
    }

    // =========================================================================
    // Task Operations
    // =========================================================================

    /// List tasks in a user story
    pub async fn get_tasks(&self, sprint_id: Uuid, story_id: Uuid) -> ClientResult<Vec<Task>> {
        self.get(&format!("/sprints/{sprint_id}/stories/{story_id}/tasks"))
            .await
    }

    /// Get a task by ID
    pub async fn get_task(
        &self,
        sprint_id: Uuid,
        story_id: Uuid,
        task_id: Uuid,
    ) -> ClientResult<Task> {
        self.get(&format!(
            "/sprints/{sprint_id}/stories/{story_id}/tasks/{task_id}"
        ))
        .await
    }

    /// Create a new task
    pub async fn create_task(
        &self,
        sprint_id: Uuid,
        story_id: Uuid,
        task: &Task,
    ) -> ClientResult<Option<Task>> {
        self.post(&format!("/sprints/{sprint_id}/stories/{story_id}/tasks"), task)
            .await
    }

    /// Update a task (always the full task, never a status-only patch)
    pub async fn update_task(
        &self,
        sprint_id: Uuid,
        story_id: Uuid,
        task: &Task,
    ) -> ClientResult<Option<Task>> {
        self.put(
            &format!("/sprints/{sprint_id}/stories/{story_id}/tasks/{}", task.id),
            task,
        )
        .await
    }

    /// Delete a task
    pub async fn delete_task(
        &self,
        sprint_id: Uuid,
        story_id: Uuid,
        task_id: Uuid,
    ) -> ClientResult<()> {
        self.delete(&format!(
            "/sprints/{sprint_id}/stories/{story_id}/tasks/{task_id}"
        ))
        .await
    }

    // =========================================================================
    // Team Member Operations
    // =========================================================================

    /// List all team members
    pub async fn get_team_members(&self) -> ClientResult<Vec<TeamMember>> {
        self.get("/team-members").await
    }

    /// Get a team member by ID
    pub async fn get_team_member(&self, id: Uuid) -> ClientResult<TeamMember> {
        self.get(&format!("/team-members/{id}")).await
    }

    /// Create a new team member
    pub async fn create_team_member(
        &self,
        member: &TeamMember,
    ) -> ClientResult<Option<TeamMember>> {
        self.post("/team-members", member).await
    }

    /// Update a team member
    pub async fn update_team_member(
        &self,
        member: &TeamMember,
    ) -> ClientResult<Option<TeamMember>> {
        self.put(&format!("/team-members/{}", member.id), member)
            .await
    }

    /// Delete a team member
    pub async fn delete_team_member(&self, id: Uuid) -> ClientResult<()> {
        self.delete(&format!("/team-members/{id}")).await
    }

    // =========================================================================
    // GitHub Operations
    // =========================================================================

    /// List open issues in a GitHub repository
    pub async fn get_github_issues(
        &self,
        owner: &str,
        repo: &str,
    ) -> ClientResult<Vec<GitHubIssue>> {
        self.get(&format!("/github/issues?owner={owner}&repo={repo}"))
            .await
    }

    /// Import GitHub issues as tasks of a user story
    pub async fn import_github_issues(
        &self,
        owner: &str,
        repo: &str,
        sprint_id: Uuid,
        story_id: Uuid,
    ) -> ClientResult<Option<serde_json::Value>> {
        self.post_empty(&format!(
            "/github/issues?owner={owner}&repo={repo}&sprintId={sprint_id}&userStoryId={story_id}"
        ))
        .await
    }
}
