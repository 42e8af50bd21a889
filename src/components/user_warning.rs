//! Onboarding Notice
//!
//! Shown instead of the app when no owner id is configured.

use leptos::prelude::*;

#[component]
pub fn UserWarning() -> impl IntoView {
    view! {
        <section class="user-warning">
            <h1>"No owner id configured"</h1>
            <p>
                "Set the " <code>"TASKS_OWNER_ID"</code> " environment variable "
                "at build time to load your tasks."
            </p>
        </section>
    }
}
