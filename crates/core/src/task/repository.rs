//! Task repository trait
//!
//! Defines the interface for task collection operations. Writes never touch
//! the list they are given; they return the next list value.

use super::model::{Priority, Task, TaskChange, TaskDraft, TaskId, TaskList};
use crate::Result;

/// Repository interface for task create/read/update operations
pub trait TaskRepository {
    /// The canonical collection for a fresh session
    fn list_all(&self) -> TaskList;

    /// Get a task from `list_all` by ID
    fn get_by_id(&self, id: TaskId) -> Option<Task> {
        self.list_all().get(id).cloned()
    }

    /// Append a new task built from `draft`
    fn create(&self, list: &TaskList, draft: TaskDraft) -> TaskList;

    /// Apply `change` to the task with `id`, reporting why nothing changed
    fn try_update(&self, list: &TaskList, id: TaskId, change: TaskChange) -> Result<TaskList>;

    /// Set the completion flag; unknown or declined changes return `list` as is
    fn set_completion(&self, list: &TaskList, id: TaskId, completed: bool) -> TaskList {
        self.try_update(list, id, TaskChange::Completed(completed))
            .unwrap_or_else(|_| list.clone())
    }

    /// Set the priority; an unknown id returns `list` as is
    fn set_priority(&self, list: &TaskList, id: TaskId, priority: Priority) -> TaskList {
        self.try_update(list, id, TaskChange::Priority(priority))
            .unwrap_or_else(|_| list.clone())
    }

    /// Set the due date (empty clears it); an unknown id returns `list` as is
    fn set_due_date(&self, list: &TaskList, id: TaskId, due_date: String) -> TaskList {
        self.try_update(list, id, TaskChange::DueDate(due_date))
            .unwrap_or_else(|_| list.clone())
    }
}
