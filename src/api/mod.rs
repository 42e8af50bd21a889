//! Task API Bindings
//!
//! Frontend bindings to the remote task collection, organized as a thin
//! HTTP wrapper plus one function per repository operation.

mod client;
mod tasks;

pub use client::ApiClient;
pub use tasks::*;
