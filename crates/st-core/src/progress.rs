use crate::models::sprint::Sprint;
use crate::models::task::Task;
use crate::models::task_status::TaskStatus;
use crate::models::user_story::UserStory;

/// Percentage of done tasks, rounded to the nearest integer. 0 when there
/// are no tasks. Progress is always derived, never stored.
fn percentage(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((done as f64 / total as f64) * 100.0).round() as u8
}

fn done_count(tasks: &[Task]) -> usize {
    tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Done)
        .count()
}

pub fn story_progress(story: &UserStory) -> u8 {
    percentage(done_count(&story.tasks), story.tasks.len())
}

pub fn sprint_progress(sprint: &Sprint) -> u8 {
    let mut total = 0;
    let mut done = 0;
    for story in &sprint.user_stories {
        total += story.tasks.len();
        done += done_count(&story.tasks);
    }
    percentage(done, total)
}
