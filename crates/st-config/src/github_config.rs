use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// When false (the default) the GitHub section works against a built-in
    /// sample issue set instead of calling the import endpoints.
    pub live_import: bool,
}
