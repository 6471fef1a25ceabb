//! User intents parsed from command lines

use chrono::NaiveDate;
use std::str::FromStr;

use todo_core::state::{AppState, Filter, Mode};
use todo_core::task::{Priority, TaskId, TaskRepository};

use crate::ViewError;

/// A single user action forwarded to the state container
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Add(String),
    Toggle(TaskId),
    SetStatus(TaskId, bool),
    Priority(Priority),
    DueDate(String),
    Filter(Filter),
    Search(Option<String>),
    Mode(Option<Mode>),
}

impl Intent {
    /// Run the matching container action
    pub fn apply<R: TaskRepository>(self, state: &mut AppState<R>) -> Result<(), ViewError> {
        match self {
            Self::Add(text) => {
                let id = state.add_new(&text)?;
                tracing::debug!(id, "Created task from input");
            }
            Self::Toggle(id) => {
                let completed = state
                    .snapshot()
                    .list
                    .get(id)
                    .is_some_and(|task| task.completed);
                state.change_status(id, !completed);
            }
            Self::SetStatus(id, completed) => state.change_status(id, completed),
            Self::Priority(priority) => state.change_priority(priority),
            Self::DueDate(due_date) => state.change_due_date(due_date),
            Self::Filter(filter) => state.change_filter(filter),
            Self::Search(query) => state.set_search_query(query.as_deref()),
            Self::Mode(mode) => state.change_mode(mode),
        }
        Ok(())
    }
}

impl FromStr for Intent {
    type Err = ViewError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let arg = |name: &'static str| {
            if rest.is_empty() {
                Err(ViewError::MissingArgument(name))
            } else {
                Ok(rest)
            }
        };

        let intent = match command.to_ascii_lowercase().as_str() {
            "add" => Self::Add(arg("add")?.to_string()),
            "toggle" => Self::Toggle(parse_id(arg("toggle")?)?),
            "done" => Self::SetStatus(parse_id(arg("done")?)?, true),
            "undo" => Self::SetStatus(parse_id(arg("undo")?)?, false),
            "priority" => Self::Priority(arg("priority")?.parse()?),
            "due" => Self::DueDate(parse_due_date(rest)?),
            "filter" => Self::Filter(arg("filter")?.parse()?),
            "search" => Self::Search((!rest.is_empty()).then(|| rest.to_string())),
            "mode" => Self::Mode(if rest.is_empty() {
                None
            } else {
                Some(rest.parse()?)
            }),
            _ => return Err(ViewError::UnknownCommand(command.to_string())),
        };
        Ok(intent)
    }
}

fn parse_id(raw: &str) -> Result<TaskId, ViewError> {
    raw.trim_start_matches('#')
        .parse()
        .map_err(|_| ViewError::InvalidId(raw.to_string()))
}

/// Validate a due date typed by the user; empty input clears it
pub fn parse_due_date(input: &str) -> Result<String, ViewError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(String::new());
    }

    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|source| {
        ViewError::InvalidDate {
            input: input.to_string(),
            source,
        }
    })?;
    Ok(date.format("%Y-%m-%d").to_string())
}

/// Whether a confirmation answer means yes
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
