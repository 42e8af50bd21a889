//! Frontend Models
//!
//! Data structures matching the task API wire format.

use serde::{Deserialize, Serialize};

/// A persisted task as the server returns it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u32,
    pub owner_id: u32,
    pub title: String,
    pub completed: bool,
}

/// Optimistic placeholder for a create that has not been confirmed yet.
///
/// Kept as its own type so the canonical list only ever holds persisted
/// tasks with real server ids. A draft is never completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftTask {
    pub title: String,
}

/// Sparse PATCH body; absent fields are left untouched by the server
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Default::default()
        }
    }
}

/// View filter over the task list; never persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// Hash-fragment href for the filter link
    pub fn href(self) -> &'static str {
        match self {
            Filter::All => "#/",
            Filter::Active => "#/active",
            Filter::Completed => "#/completed",
        }
    }

    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }

    /// Whether a draft row is visible under this filter (drafts are never completed)
    pub fn shows_draft(self) -> bool {
        !matches!(self, Filter::Completed)
    }
}
