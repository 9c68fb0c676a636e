use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub github_username: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl TeamMember {
    pub fn new(name: String, email: String, github_username: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            github_username,
            role: None,
        }
    }
}
