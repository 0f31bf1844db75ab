//! Task Store
//!
//! Reactive task-list state plus the operations that reconcile it against
//! the remote API. Every mutation is confirm-then-apply: the server's
//! response is the only thing ever written into `tasks`, and a failed call
//! leaves the list in its last-known-good state.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{self, ApiError, CreateTaskArgs, UpdateTaskArgs};
use crate::list::{self, EditState, MutationLedger};
use crate::models::{Filter, Task};
use crate::session::SessionContext;

/// Task-list state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TaskState {
    /// Server-confirmed tasks, in server order
    pub tasks: Vec<Task>,
    /// Display-only filter
    pub filter: Filter,
    /// Inline-edit state (at most one task at a time)
    pub edit: EditState,
}

/// Controller over the task list for the current session
#[derive(Clone, Copy)]
pub struct TaskStore {
    state: Store<TaskState>,
    session: SessionContext,
    /// Last reported failure, surfaced as a banner
    notice: RwSignal<Option<String>>,
    /// Per-task sequence numbers so stale completions are discarded
    ledger: StoredValue<MutationLedger>,
}

impl TaskStore {
    pub fn new(session: SessionContext) -> Self {
        Self {
            state: Store::new(TaskState::default()),
            session,
            notice: RwSignal::new(None),
            ledger: StoredValue::new(MutationLedger::default()),
        }
    }

    // ---- reads ----

    /// Tasks visible under the current filter, in server order
    pub fn visible(&self) -> Vec<Task> {
        let filter = self.state.filter().get();
        self.state.tasks().with(|tasks| list::visible(tasks, filter))
    }

    pub fn filter(&self) -> Filter {
        self.state.filter().get()
    }

    /// Recomputed on every read, never cached
    pub fn pending_count(&self) -> usize {
        self.state.tasks().with(|tasks| list::pending_count(tasks))
    }

    pub fn editing(&self, id: u32) -> bool {
        self.state.edit().with(|edit| edit.is_editing(id))
    }

    pub fn edit_title(&self) -> String {
        self.state.edit().with(|edit| edit.title().to_string())
    }

    pub fn notice(&self) -> Option<String> {
        self.notice.get()
    }

    pub fn dismiss_notice(&self) {
        self.notice.set(None);
    }

    // ---- synchronous operations ----

    /// Re-derive the visible subset; never touches `tasks`
    pub fn set_filter(&self, filter: Filter) {
        self.state.filter().set(filter);
    }

    /// Enter edit mode on one task, discarding any other edit in progress
    pub fn begin_edit(&self, task: &Task) {
        self.state.edit().write().begin(task);
    }

    /// Leave edit mode without any network call
    pub fn cancel_edit(&self) {
        self.state.edit().write().cancel();
    }

    pub fn set_edit_title(&self, title: String) {
        self.state.edit().write().set_title(title);
    }

    /// Drop session-scoped state along with the credential
    pub fn sign_out(&self) {
        self.state.tasks().write().clear();
        self.state.edit().write().cancel();
        self.notice.set(None);
        self.session.logout();
    }

    // ---- asynchronous operations (confirm-then-apply) ----

    /// Replace `tasks` wholesale with the server's collection. On failure
    /// the current list stays as-is; no automatic retry.
    pub async fn refresh(&self) {
        match api::list_tasks(self.session).await {
            Ok(tasks) => self.state.tasks().set(tasks),
            Err(err) => self.report("load tasks", err),
        }
    }

    /// Create a task. A blank trimmed title is rejected locally with no
    /// call made. Returns true on success so the caller can clear its
    /// input buffer.
    pub async fn create(&self, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            self.notice.set(Some("Task title cannot be empty.".to_string()));
            return false;
        }
        match api::create_task(self.session, &CreateTaskArgs { title }).await {
            Ok(task) => {
                self.state.tasks().write().push(task);
                true
            }
            Err(err) => {
                self.report("create task", err);
                false
            }
        }
    }

    /// Flip completion for the given snapshot, other fields unchanged.
    /// At-most-once: a failure leaves the task bit-for-bit as it was.
    pub async fn toggle_complete(&self, task: Task) {
        let seq = self.begin_mutation(task.id);
        let args = UpdateTaskArgs {
            title: &task.title,
            description: task.description.as_deref(),
            completed: !task.completed,
        };
        match api::update_task(self.session, task.id, &args).await {
            Ok(updated) => self.apply_patch(updated, seq),
            Err(err) => self.report("update task", err),
        }
    }

    /// Delete by id; the task stays in the list unless the server confirms
    pub async fn remove(&self, id: u32) {
        let seq = self.begin_mutation(id);
        match api::delete_task(self.session, id).await {
            Ok(()) => {
                if self.is_current(id, seq) {
                    let tasks_field = self.state.tasks();
                    let mut tasks = tasks_field.write();
                    list::remove_task(&mut *tasks, id);
                }
            }
            Err(err) => self.report("delete task", err),
        }
    }

    /// Save the edit buffer for `id`, computed against the current `tasks`
    /// snapshot so a concurrent completion toggle is not silently reverted.
    /// On failure edit mode stays open for a retry.
    pub async fn commit_edit(&self, id: u32) {
        let current = self
            .state
            .tasks()
            .with_untracked(|tasks| tasks.iter().find(|task| task.id == id).cloned());
        let Some(current) = current else {
            // Deleted out from under the editor; report and stand down
            self.state.edit().write().cancel();
            self.notice.set(Some("That task no longer exists.".to_string()));
            return;
        };

        let title = self
            .state
            .edit()
            .with_untracked(|edit| edit.title().trim().to_string());
        if title.is_empty() {
            self.notice.set(Some("Task title cannot be empty.".to_string()));
            return;
        }

        let seq = self.begin_mutation(id);
        let args = UpdateTaskArgs {
            title: &title,
            description: current.description.as_deref(),
            completed: current.completed,
        };
        match api::update_task(self.session, id, &args).await {
            Ok(updated) => {
                self.apply_patch(updated, seq);
                self.state.edit().write().cancel();
            }
            Err(err) => self.report("save task", err),
        }
    }

    // ---- internals ----

    fn begin_mutation(&self, id: u32) -> u64 {
        self.ledger
            .try_update_value(|ledger| ledger.begin(id))
            .unwrap_or_default()
    }

    fn is_current(&self, id: u32, seq: u64) -> bool {
        self.ledger.with_value(|ledger| ledger.is_current(id, seq))
    }

    /// Patch one task with the server's echo, unless a newer request for
    /// the same id was issued while this one was in flight.
    fn apply_patch(&self, updated: Task, seq: u64) {
        if !self.is_current(updated.id, seq) {
            web_sys::console::log_1(
                &format!("[STORE] Dropping superseded response for task {}", updated.id).into(),
            );
            return;
        }
        let tasks_field = self.state.tasks();
        let mut tasks = tasks_field.write();
        list::patch_task(&mut *tasks, updated);
    }

    fn report(&self, action: &str, err: ApiError) {
        if err == ApiError::Unauthorized {
            // Expired or revoked token: close the session, the gate takes over
            web_sys::console::warn_1(
                &format!("[STORE] Authorization rejected during {}; logging out", action).into(),
            );
            self.sign_out();
            self.notice
                .set(Some("Your session has expired. Please log in again.".to_string()));
            return;
        }
        web_sys::console::error_1(&format!("[STORE] Failed to {}: {}", action, err).into());
        self.notice.set(Some(format!("Failed to {}: {}", action, err)));
    }
}

/// Get the task store from context
pub fn use_task_store() -> TaskStore {
    expect_context::<TaskStore>()
}
