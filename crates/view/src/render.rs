//! Plain-text rendering of snapshots

use std::fmt::Write;

use todo_core::state::{Mode, Snapshot};
use todo_core::task::Task;

/// One list row, ready to draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedItem {
    pub completed: bool,
    pub class_name: String,
    pub label: String,
}

/// Class name and label for one task row
pub fn render_item(task: &Task) -> RenderedItem {
    let state = if task.completed { "completed" } else { "pending" };
    let due = if task.has_due_date() {
        task.due_date.as_str()
    } else {
        "No due date"
    };

    RenderedItem {
        completed: task.completed,
        class_name: format!("todo-item ui-state-default {state}"),
        label: format!("{} - {} - {}", task.text, task.priority, due),
    }
}

/// Render the header, the create draft when open, and the visible rows
pub fn render(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "[filter: {} | search: {:?}] {} of {} remaining",
        snapshot.filter,
        snapshot.query,
        snapshot.remaining(),
        snapshot.list.len()
    );

    if snapshot.mode == Mode::Create {
        let due = if snapshot.due_date.is_empty() {
            "none"
        } else {
            snapshot.due_date.as_str()
        };
        let _ = writeln!(out, "  new task: priority {} | due {}", snapshot.priority, due);
    }

    let visible = snapshot.visible();
    if visible.is_empty() {
        out.push_str("  (nothing to show)\n");
    }
    for task in visible {
        let item = render_item(task);
        let mark = if item.completed { 'x' } else { ' ' };
        let _ = writeln!(out, "  [{mark}] #{} {}", task.id, item.label);
    }
    out
}
