use serde::{Deserialize, Serialize};

/// An issue fetched from the GitHub import endpoint (or the built-in sample
/// set when live import is disabled).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubIssue {
    pub id: String,
    pub number: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub state: String,
    pub url: String,
    #[serde(default)]
    pub labels: Vec<String>,
}
