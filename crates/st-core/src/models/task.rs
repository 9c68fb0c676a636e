use crate::models::task_status::TaskStatus;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TaskStatus,
    #[serde(default)]
    pub assigned_team_member_id: Option<Uuid>,
    /// Set when the task was imported from a GitHub issue
    #[serde(default)]
    pub github_issue_url: Option<String>,
}

impl Task {
    pub fn new(title: String, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            status: TaskStatus::Todo,
            assigned_team_member_id: None,
            github_issue_url: None,
        }
    }
}
