//! Tasklist App
//!
//! Top-level component: owns the application state store, drives the
//! repository operations and bulk fan-out in response to user intent, and
//! folds every settlement back into the canonical list.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::bulk;
use crate::config;
use crate::context::AppContext;
use crate::error::TaskError;
use crate::models::{DraftTask, Task, TaskPatch};
use crate::store::{
    store_add_task, store_clear_deleting, store_clear_updating, store_mark_deleting,
    store_mark_updating, store_remove_task, store_remove_tasks, store_replace_task,
    store_set_completed, store_set_filter, store_set_tasks, AppState, AppStateStoreFields,
    AppStore,
};
use crate::components::{ErrorNotification, Footer, Header, TaskActions, TaskList, UserWarning};

/// What a finished title edit should turn into
#[derive(Debug, Clone, PartialEq, Eq)]
enum RenameAction {
    /// Unchanged after trimming: exit edit mode, no request
    Keep,
    /// Emptied out: redirect to the delete transition
    Delete,
    /// Send the trimmed title as a PATCH
    Update(String),
}

fn rename_action(original: &str, input: &str) -> RenameAction {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        RenameAction::Delete
    } else if trimmed == original {
        RenameAction::Keep
    } else {
        RenameAction::Update(trimmed.to_string())
    }
}

/// Non-blank trimmed title, or None if the input was only whitespace
fn validated_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[component]
pub fn App() -> impl IntoView {
    // Without an owner id there is nothing to load; render the onboarding
    // notice and touch the network not at all.
    let Some(owner_id) = config::owner_id() else {
        return view! { <UserWarning /> }.into_any();
    };

    let store = AppStore::new(AppState::default());
    provide_context(store);
    let ctx = AppContext::new(store);
    provide_context(ctx);

    // Transient UI state, not part of the canonical list
    let (new_title, set_new_title) = signal(String::new());
    let (draft, set_draft) = signal::<Option<DraftTask>>(None);
    let (editing_id, set_editing_id) = signal::<Option<u32>>(None);
    let (editing_title, set_editing_title) = signal(String::new());
    let input_ref = NodeRef::<html::Input>::new();

    let focus_new_task_input = move || {
        if let Some(input) = input_ref.get_untracked() {
            let _ = input.focus();
        }
    };

    // Initial load
    Effect::new(move |_| {
        focus_new_task_input();
        spawn_local(async move {
            match api::list_tasks(owner_id).await {
                Ok(tasks) => {
                    web_sys::console::log_1(
                        &format!("[APP] Loaded {} tasks for owner {}", tasks.len(), owner_id)
                            .into(),
                    );
                    store_set_tasks(&store, tasks);
                }
                Err(error) => ctx.show_error(error),
            }
        });
    });

    let handle_create = Callback::new(move |()| {
        let Some(title) = validated_title(&new_title.get_untracked()) else {
            // No request; the input keeps whatever was typed
            ctx.show_error(TaskError::EmptyTitle);
            return;
        };
        set_draft.set(Some(DraftTask {
            title: title.clone(),
        }));
        spawn_local(async move {
            match api::create_task(owner_id, &title).await {
                Ok(task) => {
                    store_add_task(&store, task);
                    set_new_title.set(String::new());
                }
                Err(error) => ctx.show_error(error),
            }
            set_draft.set(None);
            focus_new_task_input();
        });
    });

    let handle_delete = Callback::new(move |id: u32| {
        store_mark_deleting(&store, &[id]);
        spawn_local(async move {
            match api::delete_task(id).await {
                Ok(()) => store_remove_task(&store, id),
                Err(error) => ctx.show_error(error),
            }
            store_clear_deleting(&store, &[id]);
            focus_new_task_input();
        });
    });

    let handle_toggle = Callback::new(move |task: Task| {
        let id = task.id;
        let patch = TaskPatch::completed(!task.completed);
        store_mark_updating(&store, &[id]);
        spawn_local(async move {
            match api::update_task(id, &patch).await {
                Ok(updated) => store_replace_task(&store, updated),
                Err(error) => ctx.show_error(error),
            }
            store_clear_updating(&store, &[id]);
        });
    });

    let handle_edit = Callback::new(move |task: Task| {
        set_editing_id.set(Some(task.id));
        set_editing_title.set(task.title);
    });

    let handle_cancel = Callback::new(move |()| {
        set_editing_id.set(None);
    });

    // Enter and blur both land here; Escape cancels before blur can save.
    let handle_save = Callback::new(move |()| {
        let Some(id) = editing_id.get_untracked() else {
            return;
        };
        let original = store
            .tasks()
            .get_untracked()
            .into_iter()
            .find(|task| task.id == id);
        let Some(original) = original else {
            set_editing_id.set(None);
            return;
        };

        match rename_action(&original.title, &editing_title.get_untracked()) {
            RenameAction::Keep => set_editing_id.set(None),
            RenameAction::Delete => {
                store_mark_deleting(&store, &[id]);
                spawn_local(async move {
                    match api::delete_task(id).await {
                        Ok(()) => {
                            store_remove_task(&store, id);
                            set_editing_id.set(None);
                        }
                        Err(error) => ctx.show_error(error),
                    }
                    store_clear_deleting(&store, &[id]);
                });
            }
            RenameAction::Update(title) => {
                let patch = TaskPatch::title(title);
                store_mark_updating(&store, &[id]);
                spawn_local(async move {
                    match api::update_task(id, &patch).await {
                        Ok(updated) => {
                            store_replace_task(&store, updated);
                            set_editing_id.set(None);
                        }
                        // Edit mode stays open so the user can retry
                        Err(error) => ctx.show_error(error),
                    }
                    store_clear_updating(&store, &[id]);
                });
            }
        }
    });

    let handle_clear_completed = Callback::new(move |()| {
        let targets = bulk::completed_ids(&store.tasks().get_untracked());
        if targets.is_empty() {
            return;
        }
        store_mark_deleting(&store, &targets);
        spawn_local(async move {
            let outcomes = bulk::settle_all(targets.clone(), api::delete_task).await;
            store_remove_tasks(&store, &bulk::succeeded_ids(&outcomes));
            if bulk::any_failed(&outcomes) {
                ctx.show_error(TaskError::Delete);
            }
            store_clear_deleting(&store, &targets);
            focus_new_task_input();
        });
    });

    let handle_toggle_all = Callback::new(move |()| {
        let tasks = store.tasks().get_untracked();
        let target = !tasks.iter().all(|task| task.completed);
        let targets = bulk::toggle_targets(&tasks, target);
        if targets.is_empty() {
            return;
        }
        store_mark_updating(&store, &targets);
        spawn_local(async move {
            let outcomes = bulk::settle_all(targets.clone(), |id| async move {
                api::update_task(id, &TaskPatch::completed(target)).await.map(|_| ())
            })
            .await;
            store_set_completed(&store, &bulk::succeeded_ids(&outcomes), target);
            if bulk::any_failed(&outcomes) {
                ctx.show_error(TaskError::Update);
            }
            store_clear_updating(&store, &targets);
        });
    });

    let handle_filter = Callback::new(move |filter| store_set_filter(&store, filter));
    let handle_dismiss = Callback::new(move |()| ctx.dismiss_error());

    // Derived view state
    let filtered = Signal::derive(move || {
        let filter = store.filter().get();
        store
            .tasks()
            .get()
            .into_iter()
            .filter(|task| filter.matches(task))
            .collect::<Vec<_>>()
    });
    let show_draft = Signal::derive(move || store.filter().get().shows_draft());
    let loading = Signal::derive(move || {
        let mut ids = store.pending_deletes().get();
        ids.extend(store.pending_updates().get());
        ids
    });
    let has_tasks = Signal::derive(move || !store.tasks().read().is_empty());
    let all_completed =
        Signal::derive(move || store.tasks().read().iter().all(|task| task.completed));
    let any_completed =
        Signal::derive(move || store.tasks().read().iter().any(|task| task.completed));
    let items_left = Signal::derive(move || {
        store
            .tasks()
            .read()
            .iter()
            .filter(|task| !task.completed)
            .count()
    });
    let filter = Signal::derive(move || store.filter().get());
    let error = Signal::derive(move || store.error().get());
    let draft_pending = Signal::derive(move || draft.get().is_some());

    let actions = TaskActions {
        on_toggle: handle_toggle,
        on_save: handle_save,
        on_cancel: handle_cancel,
        on_edit: handle_edit,
        on_delete: handle_delete,
    };

    view! {
        <div class="todoapp">
            <h1 class="todoapp__title">"todos"</h1>

            <div class="todoapp__content">
                <Header
                    has_tasks=has_tasks
                    all_completed=all_completed
                    new_title=new_title
                    set_new_title=set_new_title
                    draft_pending=draft_pending
                    input_ref=input_ref
                    on_create=handle_create
                    on_toggle_all=handle_toggle_all
                />

                <TaskList
                    tasks=filtered
                    draft=draft
                    show_draft=show_draft
                    editing_id=editing_id
                    editing_title=editing_title
                    set_editing_title=set_editing_title
                    loading=loading
                    actions=actions
                />

                {move || has_tasks.get().then(|| view! {
                    <Footer
                        items_left=items_left
                        any_completed=any_completed
                        filter=filter
                        on_filter=handle_filter
                        on_clear_completed=handle_clear_completed
                    />
                })}
            </div>

            <ErrorNotification error=error on_dismiss=handle_dismiss />
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validated_title() {
        assert_eq!(validated_title("Buy milk"), Some("Buy milk".to_string()));
        assert_eq!(validated_title("  Buy milk  "), Some("Buy milk".to_string()));
        assert_eq!(validated_title("  "), None);
        assert_eq!(validated_title(""), None);
    }

    #[test]
    fn test_rename_action() {
        // Emptied-out title becomes a delete
        assert_eq!(rename_action("Buy milk", "   "), RenameAction::Delete);
        // Unchanged after trim: silent exit, no request
        assert_eq!(rename_action("Buy milk", "Buy milk"), RenameAction::Keep);
        assert_eq!(rename_action("Buy milk", "  Buy milk "), RenameAction::Keep);
        // Anything else patches the trimmed title
        assert_eq!(
            rename_action("Buy milk", " Buy bread "),
            RenameAction::Update("Buy bread".to_string())
        );
    }
}
