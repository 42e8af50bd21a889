//! Task Item Component
//!
//! A single row: checkbox, title (or the edit field), delete button, and
//! the loader overlay while a request for this task is in flight.

use leptos::prelude::*;

use crate::models::Task;

/// Intent callbacks shared by every row
#[derive(Clone, Copy)]
pub struct TaskActions {
    pub on_toggle: Callback<Task>,
    pub on_save: Callback<()>,
    pub on_cancel: Callback<()>,
    pub on_edit: Callback<Task>,
    pub on_delete: Callback<u32>,
}

#[component]
pub fn TaskItem(
    task: Task,
    editing_id: ReadSignal<Option<u32>>,
    editing_title: ReadSignal<String>,
    set_editing_title: WriteSignal<String>,
    /// Ids with any in-flight request
    loading: Signal<Vec<u32>>,
    actions: TaskActions,
) -> impl IntoView {
    let id = task.id;
    let completed = task.completed;
    let title = task.title.clone();
    let toggle_task = task.clone();
    let edit_task = task;

    let is_editing = move || editing_id.get() == Some(id);
    let is_loading = move || loading.get().contains(&id);

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        actions.on_save.run(());
    };
    let keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            actions.on_cancel.run(());
        }
    };

    view! {
        <div class=move || if completed { "todo completed" } else { "todo" }>
            <label class="todo__status-label">
                <input
                    type="checkbox"
                    class="todo__status"
                    checked=completed
                    on:change=move |_| actions.on_toggle.run(toggle_task.clone())
                />
            </label>

            {move || if is_editing() {
                view! {
                    <form on:submit=save>
                        <input
                            type="text"
                            class="todo__title-field"
                            placeholder="Empty task will be deleted"
                            prop:value=move || editing_title.get()
                            on:input=move |ev| set_editing_title.set(event_target_value(&ev))
                            on:blur=move |_| actions.on_save.run(())
                            on:keydown=keydown
                            autofocus=true
                        />
                    </form>
                }.into_any()
            } else {
                let title = title.clone();
                let edit_task = edit_task.clone();
                view! {
                    <span
                        class="todo__title"
                        on:dblclick=move |_| actions.on_edit.run(edit_task.clone())
                    >
                        {title}
                    </span>

                    <button
                        type="button"
                        class="todo__remove"
                        on:click=move |_| actions.on_delete.run(id)
                    >
                        "×"
                    </button>
                }.into_any()
            }}

            <div class=move || {
                if is_loading() { "modal overlay is-active" } else { "modal overlay" }
            }>
                <div class="loader"></div>
            </div>
        </div>
    }
}
