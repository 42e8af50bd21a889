//! Error Notification Component
//!
//! Single dismissible banner. The auto-dismiss timer lives in AppContext;
//! this only renders whatever error is current.

use leptos::prelude::*;

use crate::error::TaskError;

#[component]
pub fn ErrorNotification(
    error: Signal<Option<TaskError>>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <div class=move || {
            if error.get().is_some() {
                "notification is-danger"
            } else {
                "notification is-danger hidden"
            }
        }>
            <button
                type="button"
                class="notification__delete"
                on:click=move |_| on_dismiss.run(())
            ></button>
            {move || error.get().map(|error| error.to_string()).unwrap_or_default()}
        </div>
    }
}
