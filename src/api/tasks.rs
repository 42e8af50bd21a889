//! Task Repository Operations
//!
//! One function per CRUD call. Each maps its own transport failure to the
//! matching `TaskError` kind; single attempt, no retries.

use serde::Serialize;

use super::ApiClient;
use crate::error::TaskError;
use crate::models::{Task, TaskPatch};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewTask<'a> {
    owner_id: u32,
    title: &'a str,
    completed: bool,
}

pub async fn list_tasks(owner_id: u32) -> Result<Vec<Task>, TaskError> {
    ApiClient::new()
        .get(&format!("/tasks?ownerId={}", owner_id))
        .await
        .map_err(|e| {
            web_sys::console::error_1(&format!("[API] list failed: {}", e).into());
            TaskError::Load
        })
}

pub async fn create_task(owner_id: u32, title: &str) -> Result<Task, TaskError> {
    let body = NewTask {
        owner_id,
        title,
        completed: false,
    };
    ApiClient::new().post("/tasks", &body).await.map_err(|e| {
        web_sys::console::error_1(&format!("[API] create failed: {}", e).into());
        TaskError::Create
    })
}

pub async fn update_task(id: u32, patch: &TaskPatch) -> Result<Task, TaskError> {
    ApiClient::new()
        .patch(&format!("/tasks/{}", id), patch)
        .await
        .map_err(|e| {
            web_sys::console::error_1(&format!("[API] update {} failed: {}", id, e).into());
            TaskError::Update
        })
}

pub async fn delete_task(id: u32) -> Result<(), TaskError> {
    ApiClient::new()
        .delete(&format!("/tasks/{}", id))
        .await
        .map_err(|e| {
            web_sys::console::error_1(&format!("[API] delete {} failed: {}", id, e).into());
            TaskError::Delete
        })
}
