//! In-memory task store
//!
//! Holds no collection of its own: callers pass the current list in and get
//! the next one back.

use super::hooks::{
    completion_prompt, AlwaysConfirm, ConfirmationGate, IdGenerator, MaxPlusOne, NoopObserver,
    TaskObserver,
};
use super::model::{Priority, Task, TaskChange, TaskDraft, TaskId, TaskList};
use super::repository::TaskRepository;
use crate::{Error, Result};

/// The three records every fresh session starts with
pub fn seed_tasks() -> TaskList {
    TaskList::from_distinct(vec![
        Task::new(1, "Learn Javascript")
            .with_priority(Priority::Medium)
            .with_due_date("2024-12-31"),
        Task::new(2, "Learn React")
            .with_priority(Priority::High)
            .with_due_date("2025-01-10"),
        Task::new(3, "Build a React App")
            .with_priority(Priority::Low)
            .with_due_date("2025-02-01"),
    ])
}

/// Task store backed by immutable list values
pub struct MemoryTaskStore {
    seed: TaskList,
    ids: Box<dyn IdGenerator>,
    gate: Box<dyn ConfirmationGate>,
    observer: Box<dyn TaskObserver>,
}

impl Default for MemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTaskStore {
    /// Create a store over the seed list with permissive, silent capabilities
    pub fn new() -> Self {
        Self {
            seed: seed_tasks(),
            ids: Box::new(MaxPlusOne),
            gate: Box::new(AlwaysConfirm),
            observer: Box::new(NoopObserver),
        }
    }

    /// Replace the list returned by `list_all`
    pub fn with_seed(mut self, seed: TaskList) -> Self {
        self.seed = seed;
        self
    }

    /// Use `ids` to pick ids for created tasks
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Ask `gate` before changing a task's completion flag
    pub fn with_confirmation(mut self, gate: impl ConfirmationGate + 'static) -> Self {
        self.gate = Box::new(gate);
        self
    }

    /// Report repository activity to `observer`
    pub fn with_observer(mut self, observer: impl TaskObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    fn assign_id(&self, list: &TaskList) -> TaskId {
        let requested = self.ids.next_id(list);
        if list.contains(requested) {
            let assigned = MaxPlusOne.next_id(list);
            tracing::debug!(requested, assigned, "Id already taken, using next free id");
            assigned
        } else {
            requested
        }
    }

    fn update(&self, list: &TaskList, id: TaskId, change: TaskChange) -> Result<TaskList> {
        let index = list.position(id).ok_or(Error::TaskNotFound(id))?;

        if let TaskChange::Completed(completed) = change {
            if !self.gate.confirm(completion_prompt(completed)) {
                return Err(Error::ConfirmationDeclined(id));
            }
        }

        self.observer.updated(id, &change);
        Ok(list.replaced_at(index, change))
    }
}

impl TaskRepository for MemoryTaskStore {
    fn list_all(&self) -> TaskList {
        self.observer.listed(&self.seed);
        self.seed.clone()
    }

    fn create(&self, list: &TaskList, draft: TaskDraft) -> TaskList {
        let task = draft.into_task(self.assign_id(list));
        self.observer.created(&task);
        list.appended(task)
    }

    fn try_update(&self, list: &TaskList, id: TaskId, change: TaskChange) -> Result<TaskList> {
        self.update(list, id, change).inspect_err(|e| self.observer.rejected(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    #[derive(Default, Clone)]
    struct Recorder {
        events: Rc<RefCell<Vec<String>>>,
    }

    impl TaskObserver for Recorder {
        fn created(&self, task: &Task) {
            self.events.borrow_mut().push(format!("created {}", task.id));
        }

        fn updated(&self, id: TaskId, change: &TaskChange) {
            self.events.borrow_mut().push(format!("updated {id}: {change}"));
        }

        fn rejected(&self, error: &Error) {
            self.events.borrow_mut().push(error.to_string());
        }
    }

    fn declining_store() -> MemoryTaskStore {
        MemoryTaskStore::new().with_confirmation(|_: &str| false)
    }

    #[test]
    fn test_seed_list() {
        let store = MemoryTaskStore::new();
        let seed = store.list_all();

        assert_eq!(seed.len(), 3);
        let ids: Vec<TaskId> = seed.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let texts: Vec<&str> = seed.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Learn Javascript", "Learn React", "Build a React App"]);

        let priorities: Vec<Priority> = seed.iter().map(|t| t.priority).collect();
        assert_eq!(priorities, vec![Priority::Medium, Priority::High, Priority::Low]);

        let due: Vec<&str> = seed.iter().map(|t| t.due_date.as_str()).collect();
        assert_eq!(due, vec!["2024-12-31", "2025-01-10", "2025-02-01"]);

        assert!(seed.iter().all(|t| !t.completed));
    }

    #[test]
    fn test_get_by_id() {
        let store = MemoryTaskStore::new();
        assert_eq!(store.get_by_id(2).unwrap().text, "Learn React");
        assert!(store.get_by_id(99).is_none());
    }

    #[test]
    fn test_create_with_draft_fields() {
        let store = MemoryTaskStore::new();
        let seed = store.list_all();
        let draft = TaskDraft::new("Write tests")
            .with_priority(Priority::High)
            .with_due_date("2025-03-01");

        let list = store.create(&seed, draft);

        assert_eq!(list.len(), 4);
        assert_eq!(&list[..3], &seed[..]);
        let task = &list[3];
        assert!(![1, 2, 3].contains(&task.id));
        assert_eq!(task.text, "Write tests");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.due_date, "2025-03-01");
        assert!(!task.completed);
    }

    #[test]
    fn test_create_defaults() {
        let store = MemoryTaskStore::new();
        let list = store.create(&store.list_all(), TaskDraft::new("x"));
        let task = list.last().unwrap();

        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.due_date, "");
        assert!(!task.completed);
    }

    #[test]
    fn test_create_does_not_validate_text() {
        let store = MemoryTaskStore::new();
        let list = store.create(&TaskList::new(), TaskDraft::new(""));
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].text, "");
    }

    #[test]
    fn test_create_ids_are_unique() {
        let store = MemoryTaskStore::new();
        let mut list = store.list_all();
        for i in 0..50 {
            list = store.create(&list, TaskDraft::new(format!("task {i}")));
        }

        let ids: HashSet<TaskId> = list.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), list.len());
    }

    #[test]
    fn test_colliding_generator_falls_back() {
        let store = MemoryTaskStore::new().with_id_generator(|_: &[Task]| -> TaskId { 2 });
        let seed = store.list_all();

        let list = store.create(&seed, TaskDraft::new("dup"));
        assert_eq!(list[3].id, 4);

        let empty = store.create(&TaskList::new(), TaskDraft::new("first"));
        assert_eq!(empty[0].id, 2);
    }

    #[test]
    fn test_create_after_max_id() {
        let store = MemoryTaskStore::new().with_id_generator(|_: &[Task]| TaskId::MAX);
        let list = store.create(&TaskList::new(), TaskDraft::new("top"));
        let list = store.create(&list, TaskDraft::new("next"));
        let list = store.create(&list, TaskDraft::new("after"));

        let ids: Vec<TaskId> = list.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TaskId::MAX, 1, 2]);

        let store = MemoryTaskStore::new();
        let top = TaskList::try_from(vec![Task::new(TaskId::MAX, "x")]).unwrap();
        let list = store.create(&top, TaskDraft::new("y"));
        assert_eq!(list[1].id, 1);
    }

    #[test]
    fn test_writes_leave_input_unchanged() {
        let store = MemoryTaskStore::new();
        let seed = store.list_all();
        let before = seed.clone();

        let _ = store.create(&seed, TaskDraft::new("new"));
        let _ = store.set_completion(&seed, 1, true);
        let _ = store.set_priority(&seed, 1, Priority::Low);
        let _ = store.set_due_date(&seed, 1, "2030-01-01".to_string());

        assert_eq!(seed, before);
    }

    #[test]
    fn test_set_completion_changes_only_target() {
        let store = MemoryTaskStore::new();
        let seed = store.list_all();

        let list = store.set_completion(&seed, 2, true);

        assert!(list[1].completed);
        assert_eq!(list[1].id, 2);
        assert_eq!(list[1].text, seed[1].text);
        assert_eq!(list[1].priority, seed[1].priority);
        assert_eq!(list[1].due_date, seed[1].due_date);
        assert_eq!(list[0], seed[0]);
        assert_eq!(list[2], seed[2]);
    }

    #[test]
    fn test_set_completion_declined() {
        let store = declining_store();
        let seed = store.list_all();

        assert_eq!(store.set_completion(&seed, 2, true), seed);
        assert!(matches!(
            store.try_update(&seed, 2, TaskChange::Completed(true)),
            Err(Error::ConfirmationDeclined(2))
        ));
    }

    #[test]
    fn test_gate_receives_prompt() {
        let prompts = Rc::new(RefCell::new(Vec::new()));
        let seen = Rc::clone(&prompts);
        let store = MemoryTaskStore::new().with_confirmation(move |message: &str| {
            seen.borrow_mut().push(message.to_string());
            true
        });
        let seed = store.list_all();

        let list = store.set_completion(&seed, 1, true);
        let _ = store.set_completion(&list, 1, false);
        let _ = store.set_priority(&seed, 1, Priority::High);

        assert_eq!(
            *prompts.borrow(),
            vec![completion_prompt(true), completion_prompt(false)]
        );
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let store = MemoryTaskStore::new();
        let seed = store.list_all();

        assert_eq!(store.set_completion(&seed, 99, true), seed);
        assert_eq!(store.set_priority(&seed, 99, Priority::High), seed);
        assert_eq!(store.set_due_date(&seed, 99, "2025-05-05".into()), seed);
        assert!(matches!(
            store.try_update(&seed, 99, TaskChange::Priority(Priority::Low)),
            Err(Error::TaskNotFound(99))
        ));
    }

    #[test]
    fn test_unknown_id_skips_gate() {
        let store = MemoryTaskStore::new()
            .with_confirmation(|_: &str| -> bool { panic!("gate must not be asked") });
        let seed = store.list_all();
        assert_eq!(store.set_completion(&seed, 99, true), seed);
    }

    #[test]
    fn test_set_priority_and_due_date() {
        let store = MemoryTaskStore::new();
        let seed = store.list_all();

        let list = store.set_priority(&seed, 3, Priority::High);
        assert_eq!(list[2].priority, Priority::High);
        assert_eq!(list[2].due_date, seed[2].due_date);

        let list = store.set_due_date(&list, 3, String::new());
        assert_eq!(list[2].due_date, "");
        assert!(!list[2].has_due_date());
        assert_eq!(list[2].priority, Priority::High);
        assert_eq!(&list[..2], &seed[..2]);
    }

    #[test]
    fn test_observer_sees_mutations() {
        let recorder = Recorder::default();
        let store = declining_store().with_observer(recorder.clone());
        let seed = store.list_all();

        let list = store.create(&seed, TaskDraft::new("new"));
        let _ = store.set_priority(&list, 4, Priority::Low);
        let _ = store.set_completion(&list, 4, true);
        let _ = store.set_due_date(&list, 99, String::new());

        assert_eq!(
            *recorder.events.borrow(),
            vec![
                "created 4".to_string(),
                "updated 4: priority=Low".to_string(),
                "Status change declined for task 4".to_string(),
                "Task not found: 99".to_string(),
            ]
        );
    }
}
