//! Application state container
//!
//! Owns the current snapshot and exposes the actions a view may invoke.
//! Every action runs to completion and then notifies subscribers.

use super::model::{Filter, Mode, Snapshot};
use crate::config::Settings;
use crate::task::{MemoryTaskStore, Priority, Task, TaskDraft, TaskId, TaskList, TaskRepository};
use crate::{Error, Result};

type Listener = Box<dyn FnMut(&Snapshot)>;

/// Holds the UI-facing snapshot and routes writes through the repository
pub struct AppState<R = MemoryTaskStore> {
    repository: R,
    settings: Settings,
    snapshot: Snapshot,
    listeners: Vec<Listener>,
}

impl<R: TaskRepository> AppState<R> {
    /// Create a container with default settings
    pub fn new(repository: R) -> Self {
        Self::with_settings(repository, Settings::default())
    }

    /// Create a container, seeding the list unless `settings.seed` is off
    pub fn with_settings(repository: R, settings: Settings) -> Self {
        let list = if settings.seed {
            repository.list_all()
        } else {
            TaskList::new()
        };

        Self {
            repository,
            settings,
            snapshot: Snapshot::new(list),
            listeners: Vec::new(),
        }
    }

    /// Current snapshot, read-only
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Settings the container was built with
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Repository the actions write through
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Tasks the view should currently show
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.snapshot.visible()
    }

    /// Register a callback run after every action
    pub fn subscribe(&mut self, listener: impl FnMut(&Snapshot) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Create a task from `text` and the current draft fields, returning its id
    ///
    /// Blank text is rejected and leaves the snapshot untouched.
    pub fn add_new(&mut self, text: &str) -> Result<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::InvalidInput("task text must not be empty".to_string()));
        }

        let draft = TaskDraft::new(text)
            .with_priority(self.snapshot.priority)
            .with_due_date(self.snapshot.due_date.clone());
        let list = self.repository.create(&self.snapshot.list, draft);
        let id = list
            .last()
            .filter(|_| list.len() > self.snapshot.list.len())
            .map(|task| task.id)
            .ok_or_else(|| Error::InvalidInput("repository did not append a task".to_string()))?;
        let reset_drafts = self.settings.reset_drafts_after_create;

        self.apply(|snapshot| {
            snapshot.list = list;
            if reset_drafts {
                snapshot.priority = Priority::default();
                snapshot.due_date.clear();
            }
        });
        Ok(id)
    }

    /// Stage the priority for the next created task
    pub fn change_priority(&mut self, priority: Priority) {
        self.apply(|snapshot| snapshot.priority = priority);
    }

    /// Stage the due date for the next created task
    pub fn change_due_date(&mut self, due_date: impl Into<String>) {
        let due_date = due_date.into();
        self.apply(|snapshot| snapshot.due_date = due_date);
    }

    /// Choose which tasks the view shows
    pub fn change_filter(&mut self, filter: Filter) {
        self.apply(|snapshot| snapshot.filter = filter);
    }

    /// Set a task's completion flag through the repository
    pub fn change_status(&mut self, id: TaskId, completed: bool) {
        let list = self
            .repository
            .set_completion(&self.snapshot.list, id, completed);
        self.apply(|snapshot| snapshot.list = list);
    }

    /// Switch mode; no argument means `Mode::None`
    pub fn change_mode(&mut self, mode: Option<Mode>) {
        let mode = mode.unwrap_or(Mode::None);
        self.apply(|snapshot| snapshot.mode = mode);
    }

    /// Set the search text; `None` clears it
    pub fn set_search_query(&mut self, text: Option<&str>) {
        let query = text.unwrap_or_default().to_string();
        self.apply(|snapshot| snapshot.query = query);
    }

    fn apply(&mut self, change: impl FnOnce(&mut Snapshot)) {
        change(&mut self.snapshot);
        for listener in &mut self.listeners {
            listener(&self.snapshot);
        }
    }
}
