//! Snapshot model definitions
//!
//! These types are what a presentation layer reads. Field names serialize in
//! camelCase for frontend consumers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::task::{Priority, Task, TaskList};
use crate::{Error, Result};

/// Whether the create form is open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Create,
    None,
}

impl Default for Mode {
    fn default() -> Self {
        Self::Create
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "create" => Ok(Self::Create),
            "none" => Ok(Self::None),
            other => Err(Error::InvalidInput(format!("unknown mode: {other}"))),
        }
    }
}

/// Which tasks the list view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    All,
    Active,
    Completed,
}

impl Default for Filter {
    fn default() -> Self {
        Self::All
    }
}

impl Filter {
    /// Whether `task` belongs in this view
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        })
    }
}

impl FromStr for Filter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            other => Err(Error::InvalidInput(format!("unknown filter: {other}"))),
        }
    }
}

/// Case-insensitive substring match on the task text; empty query matches all
pub fn matches_query(task: &Task, query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || task.text.to_lowercase().contains(&query.to_lowercase())
}

/// Everything a view needs to render the todo list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub query: String,
    pub mode: Mode,
    pub filter: Filter,
    pub list: TaskList,
    /// Draft priority for the next created task
    pub priority: Priority,
    /// Draft due date for the next created task
    pub due_date: String,
}

impl Snapshot {
    /// Initial snapshot over `list` with empty query and default drafts
    pub fn new(list: TaskList) -> Self {
        Self {
            query: String::new(),
            mode: Mode::default(),
            filter: Filter::default(),
            list,
            priority: Priority::default(),
            due_date: String::new(),
        }
    }

    /// Tasks passing the active filter and search query, in list order
    pub fn visible(&self) -> Vec<&Task> {
        self.list
            .iter()
            .filter(|task| self.filter.matches(task))
            .filter(|task| matches_query(task, &self.query))
            .collect()
    }

    /// Number of tasks not yet completed
    pub fn remaining(&self) -> usize {
        self.list.iter().filter(|task| !task.completed).count()
    }

    /// Pretty-printed JSON for a view or a debug dump
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
