pub mod board;
pub mod error;
pub mod models;
pub mod progress;
pub mod validate;

pub use board::Lanes;
pub use error::{CoreError, Result};
pub use models::github_issue::GitHubIssue;
pub use models::priority::Priority;
pub use models::sprint::Sprint;
pub use models::task::Task;
pub use models::task_status::TaskStatus;
pub use models::team_member::TeamMember;
pub use models::user_story::UserStory;

#[cfg(test)]
mod tests;
