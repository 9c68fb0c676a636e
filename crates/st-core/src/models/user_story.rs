use crate::models::priority::Priority;
use crate::models::task::Task;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStory {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub story_points: u32,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl UserStory {
    pub fn new(title: String, description: String, priority: Priority, story_points: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            priority,
            story_points,
            tasks: Vec::new(),
        }
    }

    pub fn task(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }
}
