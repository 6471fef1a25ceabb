//! Capabilities injected into the task store
//!
//! Id generation, confirmation of status changes, and mutation diagnostics
//! are supplied from outside so the store stays a function of its inputs.

use super::model::{Task, TaskChange, TaskId};
use crate::Error;

/// Picks the id for a task about to be created
pub trait IdGenerator {
    fn next_id(&self, existing: &[Task]) -> TaskId;
}

/// Highest existing id plus one, starting at 1
///
/// Once `TaskId::MAX` is taken the lowest free id is used instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxPlusOne;

impl IdGenerator for MaxPlusOne {
    fn next_id(&self, existing: &[Task]) -> TaskId {
        existing
            .iter()
            .map(|task| task.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .unwrap_or_else(|| lowest_free_id(existing))
    }
}

/// Smallest id from 1 upwards that no task uses
pub fn lowest_free_id(existing: &[Task]) -> TaskId {
    let mut ids: Vec<TaskId> = existing.iter().map(|task| task.id).collect();
    ids.sort_unstable();

    let mut candidate: TaskId = 1;
    for id in ids {
        if id > candidate {
            break;
        }
        if id == candidate {
            candidate = candidate.saturating_add(1);
        }
    }
    candidate
}

impl<F> IdGenerator for F
where
    F: Fn(&[Task]) -> TaskId,
{
    fn next_id(&self, existing: &[Task]) -> TaskId {
        self(existing)
    }
}

/// Synchronous yes/no gate consulted before a completion change
pub trait ConfirmationGate {
    fn confirm(&self, message: &str) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl ConfirmationGate for AlwaysConfirm {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

impl<F> ConfirmationGate for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Prompt shown before changing a task's completion flag
pub fn completion_prompt(completed: bool) -> &'static str {
    if completed {
        "Are you sure you want to mark this task as completed?"
    } else {
        "Are you sure you want to mark this task as incomplete?"
    }
}

/// Receives diagnostics about repository activity
pub trait TaskObserver {
    fn listed(&self, _tasks: &[Task]) {}

    fn created(&self, _task: &Task) {}

    fn updated(&self, _id: TaskId, _change: &TaskChange) {}

    fn rejected(&self, _error: &Error) {}
}

/// Observer that drops everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl TaskObserver for NoopObserver {}

/// Observer that reports through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TaskObserver for TracingObserver {
    fn listed(&self, tasks: &[Task]) {
        for task in tasks {
            tracing::debug!(
                id = task.id,
                priority = %task.priority,
                due_date = %task.due_date,
                "Todo: {}",
                task.text
            );
        }
    }

    fn created(&self, task: &Task) {
        tracing::info!(
            id = task.id,
            priority = %task.priority,
            due_date = %task.due_date,
            "Added todo: {}",
            task.text
        );
    }

    fn updated(&self, id: TaskId, change: &TaskChange) {
        tracing::info!(id, "Updated todo: {}", change);
    }

    fn rejected(&self, error: &Error) {
        match error {
            Error::ConfirmationDeclined(_) => tracing::info!("{}", error),
            _ => tracing::warn!("{}", error),
        }
    }
}
