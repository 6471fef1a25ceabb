//! Task model definitions

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::Error;

/// Identifier of a task, unique within a collection
pub type TaskId = u64;

/// Task priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

impl Priority {
    /// Display name, as serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(Error::InvalidInput(format!("unknown priority: {other}"))),
        }
    }
}

/// A single record in the todo list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub priority: Priority,
    /// `YYYY-MM-DD`, or empty when unset
    pub due_date: String,
}

impl Task {
    /// Create an incomplete task with default priority and no due date
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            priority: Priority::default(),
            due_date: String::new(),
        }
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = due_date.into();
        self
    }

    /// Whether a due date is set
    pub fn has_due_date(&self) -> bool {
        !self.due_date.is_empty()
    }
}

/// Input for creating a task
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub text: String,
    pub priority: Option<Priority>,
    pub due_date: Option<String>,
}

impl TaskDraft {
    /// Create a draft with only the text set
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Build the record, filling in defaults for absent fields
    pub(crate) fn into_task(self, id: TaskId) -> Task {
        Task::new(id, self.text)
            .with_priority(self.priority.unwrap_or_default())
            .with_due_date(self.due_date.unwrap_or_default())
    }
}

/// A single field replacement applied to an existing task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskChange {
    Completed(bool),
    Priority(Priority),
    DueDate(String),
}

impl TaskChange {
    fn apply(self, task: &mut Task) {
        match self {
            Self::Completed(completed) => task.completed = completed,
            Self::Priority(priority) => task.priority = priority,
            Self::DueDate(due_date) => task.due_date = due_date,
        }
    }
}

impl fmt::Display for TaskChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed(completed) => write!(f, "completed={completed}"),
            Self::Priority(priority) => write!(f, "priority={priority}"),
            Self::DueDate(due_date) if due_date.is_empty() => f.write_str("due date cleared"),
            Self::DueDate(due_date) => write!(f, "due date={due_date}"),
        }
    }
}

/// Ordered collection of tasks in creation order
///
/// Values are never modified once built; every write produces a new list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Task>", into = "Vec<Task>")]
pub struct TaskList(Vec<Task>);

impl TaskList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list the crate already knows has distinct ids
    pub(crate) fn from_distinct(tasks: Vec<Task>) -> Self {
        Self(tasks)
    }

    /// Find a task by ID
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.0.iter().find(|task| task.id == id)
    }

    /// Index of the task with `id`
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.0.iter().position(|task| task.id == id)
    }

    /// Whether a task with `id` is present
    pub fn contains(&self, id: TaskId) -> bool {
        self.position(id).is_some()
    }

    /// Highest id present, if any
    pub fn max_id(&self) -> Option<TaskId> {
        self.0.iter().map(|task| task.id).max()
    }

    /// New list with `task` appended
    pub(crate) fn appended(&self, task: Task) -> Self {
        let mut tasks = Vec::with_capacity(self.0.len() + 1);
        tasks.extend_from_slice(&self.0);
        tasks.push(task);
        Self(tasks)
    }

    /// New list with `change` applied to the task at `index`
    pub(crate) fn replaced_at(&self, index: usize, change: TaskChange) -> Self {
        let mut tasks = self.0.clone();
        change.apply(&mut tasks[index]);
        Self(tasks)
    }
}

impl Deref for TaskList {
    type Target = [Task];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<Vec<Task>> for TaskList {
    type Error = Error;

    /// Rejects lists where two tasks share an id
    fn try_from(tasks: Vec<Task>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(tasks.len());
        if let Some(task) = tasks.iter().find(|task| !seen.insert(task.id)) {
            return Err(Error::InvalidInput(format!("duplicate task id: {}", task.id)));
        }
        Ok(Self(tasks))
    }
}

impl From<TaskList> for Vec<Task> {
    fn from(list: TaskList) -> Self {
        list.0
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
