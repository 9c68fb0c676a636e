mod progress;
mod validate;

use crate::{Task, TaskStatus};

pub(crate) fn task_with_status(title: &str, status: TaskStatus) -> Task {
    let mut task = Task::new(title.to_string(), None);
    task.status = status;
    task
}
