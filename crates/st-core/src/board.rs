use crate::models::task::Task;
use crate::models::task_status::TaskStatus;

/// Tasks grouped into the three board lanes. Arrival order is preserved
/// within a lane; classification goes through [`TaskStatus`], so every task
/// lands in exactly one lane.
#[derive(Debug, Default)]
pub struct Lanes<'a> {
    pub todo: Vec<&'a Task>,
    pub in_progress: Vec<&'a Task>,
    pub done: Vec<&'a Task>,
}

impl<'a> Lanes<'a> {
    pub fn partition(tasks: &'a [Task]) -> Self {
        let mut lanes = Lanes::default();
        for task in tasks {
            match task.status {
                TaskStatus::Todo => lanes.todo.push(task),
                TaskStatus::InProgress => lanes.in_progress.push(task),
                TaskStatus::Done => lanes.done.push(task),
            }
        }
        lanes
    }

    pub fn lane(&self, status: TaskStatus) -> &[&'a Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }

    /// Tasks in board display order: To Do, then In Progress, then Done.
    pub fn in_display_order(&self) -> impl Iterator<Item = &'a Task> + '_ {
        TaskStatus::ALL
            .iter()
            .flat_map(|status| self.lane(*status).iter().copied())
    }

    pub fn len(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
