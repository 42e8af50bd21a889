//! Bulk Mutation Fan-out
//!
//! Clear-completed and toggle-all dispatch one independent request per
//! selected task, wait for every settlement, and reconcile partial
//! outcomes into the canonical list. A failure of one item never
//! short-circuits the rest.

use std::future::Future;

use futures::future::join_all;

use crate::error::TaskError;
use crate::models::Task;

/// Per-item settlement, keyed by task id in selection order
pub type Outcome<O> = (u32, Result<O, TaskError>);

/// Fan out `op` over every id concurrently and wait for all settlements.
pub async fn settle_all<F, Fut, O>(ids: Vec<u32>, op: F) -> Vec<Outcome<O>>
where
    F: Fn(u32) -> Fut,
    Fut: Future<Output = Result<O, TaskError>>,
{
    let results = join_all(ids.iter().map(|id| op(*id))).await;
    ids.into_iter().zip(results).collect()
}

/// Ids whose request settled successfully
pub fn succeeded_ids<O>(outcomes: &[Outcome<O>]) -> Vec<u32> {
    outcomes
        .iter()
        .filter(|(_, result)| result.is_ok())
        .map(|(id, _)| *id)
        .collect()
}

pub fn any_failed<O>(outcomes: &[Outcome<O>]) -> bool {
    outcomes.iter().any(|(_, result)| result.is_err())
}

/// Remove exactly the tasks whose delete succeeded; failed deletes stay.
pub fn reconcile_deletes(tasks: &mut Vec<Task>, succeeded: &[u32]) {
    tasks.retain(|task| !succeeded.contains(&task.id));
}

/// Set the completed flag for exactly the tasks whose update succeeded;
/// failed updates keep their prior flag.
pub fn reconcile_toggles(tasks: &mut [Task], succeeded: &[u32], completed: bool) {
    for task in tasks.iter_mut() {
        if succeeded.contains(&task.id) {
            task.completed = completed;
        }
    }
}

/// Selection predicate for toggle-all: only tasks not already at the
/// target state are dispatched, so a re-invocation after full success
/// selects nothing.
pub fn toggle_targets(tasks: &[Task], completed: bool) -> Vec<u32> {
    tasks
        .iter()
        .filter(|task| task.completed != completed)
        .map(|task| task.id)
        .collect()
}

/// Selection predicate for clear-completed
pub fn completed_ids(tasks: &[Task]) -> Vec<u32> {
    tasks
        .iter()
        .filter(|task| task.completed)
        .map(|task| task.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn make_task(id: u32, completed: bool) -> Task {
        Task {
            id,
            owner_id: 7,
            title: format!("Task {}", id),
            completed,
        }
    }

    #[test]
    fn test_settle_all_observes_every_outcome() {
        // Mixed success/failure: all three settlements observed in order
        let outcomes = block_on(settle_all(vec![1, 2, 3], |id| async move {
            if id == 2 {
                Err(TaskError::Delete)
            } else {
                Ok(())
            }
        }));

        assert_eq!(outcomes.len(), 3);
        assert_eq!(succeeded_ids(&outcomes), vec![1, 3]);
        assert!(any_failed(&outcomes));
    }

    #[test]
    fn test_settle_all_dispatches_once_per_target() {
        let calls = RefCell::new(Vec::new());
        let outcomes = block_on(settle_all(vec![4, 9], |id| {
            calls.borrow_mut().push(id);
            async move { Ok::<(), TaskError>(()) }
        }));

        assert_eq!(*calls.borrow(), vec![4, 9]);
        assert!(!any_failed(&outcomes));
    }

    #[test]
    fn test_clear_completed_all_succeed() {
        // list = [1 completed, 2 active]; delete(1) resolves, nothing else called
        let mut tasks = vec![make_task(1, true), make_task(2, false)];
        let targets = completed_ids(&tasks);
        assert_eq!(targets, vec![1]);

        let outcomes =
            block_on(settle_all(targets, |_| async move { Ok::<(), TaskError>(()) }));
        reconcile_deletes(&mut tasks, &succeeded_ids(&outcomes));

        assert_eq!(tasks, vec![make_task(2, false)]);
        assert!(!any_failed(&outcomes));
    }

    #[test]
    fn test_clear_completed_delete_rejected() {
        // Same list; delete(1) rejects; list unchanged, aggregate failure
        let mut tasks = vec![make_task(1, true), make_task(2, false)];
        let targets = completed_ids(&tasks);

        let outcomes = block_on(settle_all(targets, |_| async move {
            Err::<(), _>(TaskError::Delete)
        }));
        reconcile_deletes(&mut tasks, &succeeded_ids(&outcomes));

        assert_eq!(tasks, vec![make_task(1, true), make_task(2, false)]);
        assert!(any_failed(&outcomes));
    }

    #[test]
    fn test_bulk_delete_removes_exactly_succeeded_subset() {
        let mut tasks = vec![
            make_task(1, true),
            make_task(2, true),
            make_task(3, true),
            make_task(4, false),
        ];
        let outcomes = block_on(settle_all(completed_ids(&tasks), |id| async move {
            if id == 2 {
                Err(TaskError::Delete)
            } else {
                Ok(())
            }
        }));
        reconcile_deletes(&mut tasks, &succeeded_ids(&outcomes));

        assert_eq!(tasks, vec![make_task(2, true), make_task(4, false)]);
    }

    #[test]
    fn test_bulk_toggle_updates_exactly_succeeded_subset() {
        let mut tasks = vec![make_task(1, false), make_task(2, false), make_task(3, true)];
        let targets = toggle_targets(&tasks, true);
        assert_eq!(targets, vec![1, 2]);

        let outcomes = block_on(settle_all(targets, |id| async move {
            if id == 1 {
                Ok(())
            } else {
                Err(TaskError::Update)
            }
        }));
        reconcile_toggles(&mut tasks, &succeeded_ids(&outcomes), true);

        assert!(tasks[0].completed);
        assert!(!tasks[1].completed);
        assert!(tasks[2].completed);
        assert!(any_failed(&outcomes));
    }

    #[test]
    fn test_toggle_all_is_idempotent_after_full_success() {
        let mut tasks = vec![make_task(1, false), make_task(2, true)];
        let targets = toggle_targets(&tasks, true);
        let outcomes =
            block_on(settle_all(targets, |_| async move { Ok::<(), TaskError>(()) }));
        reconcile_toggles(&mut tasks, &succeeded_ids(&outcomes), true);

        // Predicate re-evaluates against current data: nothing left to do
        assert!(toggle_targets(&tasks, true).is_empty());
    }

    #[test]
    fn test_retry_after_partial_failure_only_targets_still_matching() {
        let mut tasks = vec![make_task(1, true), make_task(2, true)];
        let outcomes = block_on(settle_all(completed_ids(&tasks), |id| async move {
            if id == 1 {
                Ok(())
            } else {
                Err(TaskError::Delete)
            }
        }));
        reconcile_deletes(&mut tasks, &succeeded_ids(&outcomes));

        // Only the failed task still matches the selection
        assert_eq!(completed_ids(&tasks), vec![2]);
    }
}
