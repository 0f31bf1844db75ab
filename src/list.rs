//! Task List Logic
//!
//! Pure helpers behind the reactive store: filter application and
//! server-confirmed reconciliation by id. Mutations always either replace a
//! task wholesale with the server's echo or leave the list untouched.

use std::collections::HashMap;

use crate::models::{Filter, Task};

/// Tasks visible under a filter, in server order
pub fn visible(tasks: &[Task], filter: Filter) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| filter.admits(task))
        .cloned()
        .collect()
}

/// Number of not-yet-completed tasks
pub fn pending_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|task| !task.completed).count()
}

/// Replace the task with the same id by the server's representation.
/// Returns false (leaving the list untouched) when the id is gone.
pub fn patch_task(tasks: &mut Vec<Task>, updated: Task) -> bool {
    match tasks.iter_mut().find(|task| task.id == updated.id) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Drop the task with the given id. Returns false when the id is gone.
pub fn remove_task(tasks: &mut Vec<Task>, id: u32) -> bool {
    let before = tasks.len();
    tasks.retain(|task| task.id != id);
    tasks.len() != before
}

/// Inline-edit state: at most one task is editable at a time. The buffer is
/// independent of the task's persisted title until saved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditState {
    id: Option<u32>,
    title: String,
}

impl EditState {
    /// Start editing a task, discarding any other edit in progress
    pub fn begin(&mut self, task: &Task) {
        self.id = Some(task.id);
        self.title = task.title.clone();
    }

    pub fn cancel(&mut self) {
        self.id = None;
        self.title.clear();
    }

    pub fn is_editing(&self, id: u32) -> bool {
        self.id == Some(id)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }
}

/// Monotonic per-task sequence numbers for in-flight mutations.
///
/// Rapid repeated mutations of the same task may complete out of order; a
/// response is applied only while it is still the newest request issued for
/// that id, so a superseded echo never overwrites a fresher one.
#[derive(Debug, Default)]
pub struct MutationLedger {
    issued: HashMap<u32, u64>,
}

impl MutationLedger {
    /// Record a new outbound mutation for `id` and return its sequence number
    pub fn begin(&mut self, id: u32) -> u64 {
        let seq = self.issued.entry(id).or_insert(0);
        *seq += 1;
        *seq
    }

    /// Whether the completion tagged `seq` is still the newest for `id`
    pub fn is_current(&self, id: u32, seq: u64) -> bool {
        self.issued.get(&id).copied() == Some(seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Filter, Task};

    fn make_task(id: u32, title: &str, completed: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: None,
            completed,
        }
    }

    fn sample() -> Vec<Task> {
        vec![
            make_task(1, "Buy milk", false),
            make_task(2, "Ship release", true),
            make_task(3, "Water plants", false),
        ]
    }

    #[test]
    fn test_filter_partition_reconstructs_all() {
        let tasks = sample();

        let pending = visible(&tasks, Filter::Pending);
        let completed = visible(&tasks, Filter::Completed);

        assert_eq!(pending.len(), 2);
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, 2);
        assert_eq!(pending.len() + completed.len(), tasks.len());
        // Filtering never touches the underlying list
        assert_eq!(tasks.len(), 3);
        assert_eq!(visible(&tasks, Filter::All), tasks);
    }

    #[test]
    fn test_visible_preserves_server_order() {
        let tasks = vec![
            make_task(7, "c", false),
            make_task(2, "a", false),
            make_task(5, "b", false),
        ];
        let ids: Vec<u32> = visible(&tasks, Filter::Pending).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![7, 2, 5]);
    }

    #[test]
    fn test_pending_count() {
        assert_eq!(pending_count(&[]), 0);
        assert_eq!(pending_count(&sample()), 2);
        assert_eq!(pending_count(&[make_task(1, "done", true)]), 0);
    }

    #[test]
    fn test_create_then_count() {
        let mut tasks = Vec::new();
        tasks.push(make_task(1, "Buy milk", false));
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, 1);
        assert_eq!(pending_count(&tasks), 1);
    }

    #[test]
    fn test_patch_replaces_with_server_echo() {
        let mut tasks = sample();
        // The server is authoritative; it may return more than the flipped flag
        let echo = Task {
            id: 1,
            title: "Buy milk (2L)".to_string(),
            description: Some("note".to_string()),
            completed: true,
        };

        assert!(patch_task(&mut tasks, echo.clone()));

        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0], echo);
        assert_eq!(pending_count(&tasks), 1);
    }

    #[test]
    fn test_patch_missing_id_is_a_no_op() {
        let mut tasks = sample();
        let before = tasks.clone();

        assert!(!patch_task(&mut tasks, make_task(99, "ghost", false)));
        assert_eq!(tasks, before);
    }

    #[test]
    fn test_remove_task() {
        let mut tasks = sample();

        assert!(remove_task(&mut tasks, 2));
        assert_eq!(tasks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);

        // Already gone: reported as false, list unchanged
        let before = tasks.clone();
        assert!(!remove_task(&mut tasks, 2));
        assert_eq!(tasks, before);
    }

    #[test]
    fn test_single_edit_invariant() {
        let a = make_task(1, "first", false);
        let b = make_task(2, "second", false);
        let mut edit = EditState::default();

        edit.begin(&a);
        edit.set_title("first, reworded".to_string());
        assert!(edit.is_editing(1));

        // Starting on B discards A's unsaved buffer
        edit.begin(&b);
        assert!(!edit.is_editing(1));
        assert!(edit.is_editing(2));
        assert_eq!(edit.title(), "second");

        edit.cancel();
        assert!(!edit.is_editing(1));
        assert!(!edit.is_editing(2));
        assert_eq!(edit.title(), "");
    }

    #[test]
    fn test_ledger_discards_superseded_responses() {
        let mut ledger = MutationLedger::default();

        let first = ledger.begin(1);
        let second = ledger.begin(1);

        // The older in-flight request lost the race the moment a newer one
        // was issued for the same id
        assert!(!ledger.is_current(1, first));
        assert!(ledger.is_current(1, second));

        // Other ids are tracked independently
        let other = ledger.begin(2);
        assert!(ledger.is_current(2, other));
        assert!(ledger.is_current(1, second));
    }

    #[test]
    fn test_ledger_unknown_id_is_never_current() {
        let ledger = MutationLedger::default();
        assert!(!ledger.is_current(5, 0));
        assert!(!ledger.is_current(5, 1));
    }
}
