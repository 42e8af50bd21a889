//! Task List Component
//!
//! Filtered rows keyed by id, plus the draft row for an in-flight create.

use leptos::prelude::*;

use crate::components::{TaskActions, TaskItem};
use crate::models::{DraftTask, Task};

#[component]
pub fn TaskList(
    /// Canonical tasks, already filtered
    tasks: Signal<Vec<Task>>,
    draft: ReadSignal<Option<DraftTask>>,
    /// Draft rows are hidden under the Completed filter
    show_draft: Signal<bool>,
    editing_id: ReadSignal<Option<u32>>,
    editing_title: ReadSignal<String>,
    set_editing_title: WriteSignal<String>,
    loading: Signal<Vec<u32>>,
    actions: TaskActions,
) -> impl IntoView {
    view! {
        <section class="todoapp__main">
            <For
                each=move || tasks.get()
                key=|task| task.id
                children=move |task| {
                    view! {
                        <TaskItem
                            task=task
                            editing_id=editing_id
                            editing_title=editing_title
                            set_editing_title=set_editing_title
                            loading=loading
                            actions=actions
                        />
                    }
                }
            />

            {move || {
                show_draft
                    .get()
                    .then(|| draft.get())
                    .flatten()
                    .map(|draft| view! { <DraftRow draft=draft /> })
            }}
        </section>
    }
}

/// Placeholder row for a create awaiting server confirmation; the loader
/// stays on for its whole lifetime and it offers no interaction.
#[component]
fn DraftRow(draft: DraftTask) -> impl IntoView {
    view! {
        <div class="todo">
            <label class="todo__status-label">
                <input type="checkbox" class="todo__status" disabled=true />
            </label>

            <span class="todo__title">{draft.title}</span>

            <div class="modal overlay is-active">
                <div class="loader"></div>
            </div>
        </div>
    }
}
