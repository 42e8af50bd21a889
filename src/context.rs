//! Application Context
//!
//! Shared error-banner handling provided via the Leptos Context API. One
//! banner at a time; a new error replaces the old wholesale and restarts
//! the auto-dismiss window.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

use crate::error::TaskError;
use crate::store::{store_clear_error, store_dismiss_error, store_show_error, AppStore};

/// How long a banner stays up before it clears itself
const ERROR_BANNER_MS: u32 = 3000;

#[derive(Clone, Copy)]
pub struct AppContext {
    store: AppStore,
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    /// Show a banner and schedule its auto-dismiss. The epoch guard makes
    /// a timer from an overwritten error a no-op.
    pub fn show_error(&self, error: TaskError) {
        let store = self.store;
        let epoch = store_show_error(&store, error);
        spawn_local(async move {
            TimeoutFuture::new(ERROR_BANNER_MS).await;
            store_clear_error(&store, epoch);
        });
    }

    /// Explicit dismissal from the banner's close button
    pub fn dismiss_error(&self) {
        store_dismiss_error(&self.store);
    }
}
