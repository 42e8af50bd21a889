//! UI Components
//!
//! Pure rendering of state handed down; all intents travel back up as
//! callbacks.

mod error_notification;
mod footer;
mod header;
mod task_item;
mod task_list;
mod user_warning;

pub use error_notification::ErrorNotification;
pub use footer::Footer;
pub use header::Header;
pub use task_item::{TaskActions, TaskItem};
pub use task_list::TaskList;
pub use user_warning::UserWarning;
