use crate::models::user_story::UserStory;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sprint {
    pub id: Uuid,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub user_stories: Vec<UserStory>,
}

impl Sprint {
    pub fn new(name: String, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            start_date,
            end_date,
            goal: None,
            active: false,
            user_stories: Vec::new(),
        }
    }

    pub fn story(&self, id: Uuid) -> Option<&UserStory> {
        self.user_stories.iter().find(|s| s.id == id)
    }

    pub fn story_mut(&mut self, id: Uuid) -> Option<&mut UserStory> {
        self.user_stories.iter_mut().find(|s| s.id == id)
    }

    /// Replace the story with the same id. Returns false when no entry matches.
    pub fn replace_story(&mut self, fresh: UserStory) -> bool {
        match self.story_mut(fresh.id) {
            Some(slot) => {
                *slot = fresh;
                true
            }
            None => false,
        }
    }
}
