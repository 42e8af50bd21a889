//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every mutation
//! of the canonical list and the pending-marker sets goes through a named
//! transition function here, never through ad hoc field writes.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::bulk;
use crate::error::TaskError;
use crate::models::{Filter, Task};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Canonical task list; persisted tasks only, unique ids
    pub tasks: Vec<Task>,
    /// Current view filter
    pub filter: Filter,
    /// Ids with an in-flight delete
    pub pending_deletes: Vec<u32>,
    /// Ids with an in-flight update
    pub pending_updates: Vec<u32>,
    /// Current banner error, if any
    pub error: Option<TaskError>,
    /// Bumped on every new error so a stale auto-dismiss timer is ignored
    pub error_epoch: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Named State Transitions
// ========================

/// Replace the whole canonical list (initial load)
pub fn store_set_tasks(store: &AppStore, tasks: Vec<Task>) {
    *store.tasks().write() = tasks;
}

/// Append a server-confirmed task
pub fn store_add_task(store: &AppStore, task: Task) {
    store.tasks().write().push(task);
}

/// Replace a task with its server-confirmed version, matched by id
pub fn store_replace_task(store: &AppStore, updated: Task) {
    if let Some(task) = store
        .tasks()
        .write()
        .iter_mut()
        .find(|task| task.id == updated.id)
    {
        *task = updated;
    }
}

/// Remove a task after its delete was confirmed
pub fn store_remove_task(store: &AppStore, id: u32) {
    store.tasks().write().retain(|task| task.id != id);
}

/// Remove every task whose bulk delete succeeded
pub fn store_remove_tasks(store: &AppStore, succeeded: &[u32]) {
    bulk::reconcile_deletes(&mut store.tasks().write(), succeeded);
}

/// Set the completed flag on every task whose bulk update succeeded
pub fn store_set_completed(store: &AppStore, succeeded: &[u32], completed: bool) {
    bulk::reconcile_toggles(&mut store.tasks().write(), succeeded, completed);
}

/// Switch the view filter
pub fn store_set_filter(store: &AppStore, filter: Filter) {
    store.filter().set(filter);
}

pub fn store_mark_deleting(store: &AppStore, ids: &[u32]) {
    store.pending_deletes().write().extend_from_slice(ids);
}

pub fn store_clear_deleting(store: &AppStore, ids: &[u32]) {
    store
        .pending_deletes()
        .write()
        .retain(|id| !ids.contains(id));
}

pub fn store_mark_updating(store: &AppStore, ids: &[u32]) {
    store.pending_updates().write().extend_from_slice(ids);
}

pub fn store_clear_updating(store: &AppStore, ids: &[u32]) {
    store
        .pending_updates()
        .write()
        .retain(|id| !ids.contains(id));
}

/// Show a banner error; returns the epoch guarding its auto-dismiss
pub fn store_show_error(store: &AppStore, error: TaskError) -> u32 {
    store.error().set(Some(error));
    let field = store.error_epoch();
    let mut epoch = field.write();
    *epoch = epoch.wrapping_add(1);
    *epoch
}

/// Clear the banner only if no newer error has replaced it since `epoch`
pub fn store_clear_error(store: &AppStore, epoch: u32) {
    if store.error_epoch().get_untracked() == epoch {
        store.error().set(None);
    }
}

/// Unconditional clear, for the banner's close button
pub fn store_dismiss_error(store: &AppStore) {
    store.error().set(None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bulk;
    use futures::executor::block_on;

    fn make_task(id: u32, completed: bool) -> Task {
        Task {
            id,
            owner_id: 7,
            title: format!("Task {}", id),
            completed,
        }
    }

    fn make_store(tasks: Vec<Task>) -> AppStore {
        AppStore::new(AppState {
            tasks,
            ..Default::default()
        })
    }

    #[test]
    fn test_pending_markers_empty_after_partial_failure() {
        let store = make_store(vec![
            make_task(1, true),
            make_task(2, true),
            make_task(3, false),
        ]);

        // Bulk delete of the completed tasks plus a single toggle in flight
        store_mark_deleting(&store, &[1, 2]);
        store_mark_updating(&store, &[3]);

        let outcomes = block_on(bulk::settle_all(vec![1, 2], |id| async move {
            if id == 2 {
                Err(TaskError::Delete)
            } else {
                Ok(())
            }
        }));
        store_remove_tasks(&store, &bulk::succeeded_ids(&outcomes));
        store_clear_deleting(&store, &[1, 2]);
        store_clear_updating(&store, &[3]);

        // Markers are gone regardless of the success/failure mix
        assert!(store.pending_deletes().get_untracked().is_empty());
        assert!(store.pending_updates().get_untracked().is_empty());
        // Only the succeeded delete left the list
        let ids: Vec<u32> = store
            .tasks()
            .get_untracked()
            .iter()
            .map(|task| task.id)
            .collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_clear_only_removes_settled_ids() {
        let store = make_store(Vec::new());
        store_mark_deleting(&store, &[1, 2]);
        store_mark_deleting(&store, &[5]);

        store_clear_deleting(&store, &[1, 2]);

        // A marker from an unrelated in-flight operation survives
        assert_eq!(store.pending_deletes().get_untracked(), vec![5]);
    }

    #[test]
    fn test_error_epoch_guards_stale_dismiss() {
        let store = make_store(Vec::new());

        let first = store_show_error(&store, TaskError::Delete);
        let second = store_show_error(&store, TaskError::Update);
        assert_ne!(first, second);
        assert_eq!(store.error().get_untracked(), Some(TaskError::Update));

        // The overwritten error's timer must not clear the newer banner
        store_clear_error(&store, first);
        assert_eq!(store.error().get_untracked(), Some(TaskError::Update));

        store_clear_error(&store, second);
        assert_eq!(store.error().get_untracked(), None);
    }

    #[test]
    fn test_dismiss_clears_unconditionally() {
        let store = make_store(Vec::new());
        store_show_error(&store, TaskError::Load);
        store_dismiss_error(&store);
        assert_eq!(store.error().get_untracked(), None);
    }
}
