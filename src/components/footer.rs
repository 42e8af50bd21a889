//! Footer Component
//!
//! Active-item counter, filter links, and the clear-completed button.
//! Rendered only while the canonical list is non-empty.

use leptos::prelude::*;

use crate::models::Filter;

#[component]
pub fn Footer(
    items_left: Signal<usize>,
    any_completed: Signal<bool>,
    filter: Signal<Filter>,
    on_filter: Callback<Filter>,
    on_clear_completed: Callback<()>,
) -> impl IntoView {
    view! {
        <footer class="todoapp__footer">
            <span class="todo-count">
                {move || format!("{} items left", items_left.get())}
            </span>

            <nav class="filter">
                {Filter::ALL.iter().map(|&option| {
                    let selected = move || filter.get() == option;
                    view! {
                        <a
                            href=option.href()
                            class=move || {
                                if selected() { "filter__link selected" } else { "filter__link" }
                            }
                            on:click=move |_| on_filter.run(option)
                        >
                            {option.label()}
                        </a>
                    }
                }).collect_view()}
            </nav>

            <button
                type="button"
                class="todoapp__clear-completed"
                on:click=move |_| on_clear_completed.run(())
                disabled=move || !any_completed.get()
            >
                "Clear completed"
            </button>
        </footer>
    }
}
