//! Header Component
//!
//! Toggle-all button plus the new-task input.

use leptos::html;
use leptos::prelude::*;

/// App header with the new-task form
#[component]
pub fn Header(
    has_tasks: Signal<bool>,
    all_completed: Signal<bool>,
    new_title: ReadSignal<String>,
    set_new_title: WriteSignal<String>,
    /// True while a create is in flight; blocks a second draft
    draft_pending: Signal<bool>,
    input_ref: NodeRef<html::Input>,
    on_create: Callback<()>,
    on_toggle_all: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_create.run(());
    };

    view! {
        <header class="todoapp__header">
            {move || has_tasks.get().then(|| view! {
                <button
                    type="button"
                    class=move || {
                        if all_completed.get() {
                            "todoapp__toggle-all active"
                        } else {
                            "todoapp__toggle-all"
                        }
                    }
                    on:click=move |_| on_toggle_all.run(())
                ></button>
            })}

            <form on:submit=submit>
                <input
                    type="text"
                    class="todoapp__new-todo"
                    placeholder="What needs to be done?"
                    prop:value=move || new_title.get()
                    on:input=move |ev| set_new_title.set(event_target_value(&ev))
                    node_ref=input_ref
                    disabled=move || draft_pending.get()
                />
            </form>
        </header>
    }
}
