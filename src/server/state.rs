//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds the shared resources needed by
//! the handlers. The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction.

use std::sync::Arc;

use super::data::NoteRepository;

/// Application state containing shared resources and dependencies.
///
/// Cloning is cheap: the repository sits behind an `Arc`, so every request sees the same
/// backend instance selected at startup.
#[derive(Clone)]
pub struct AppState {
    /// Note storage backend, either in-memory or database-backed.
    ///
    /// Selected once by `startup::connect_to_repository` based on whether
    /// `NOTES_DB_URL` is configured.
    pub repository: Arc<dyn NoteRepository>,
}

impl AppState {
    /// Creates a new application state with the provided repository.
    ///
    /// # Arguments
    /// - `repository` - Note storage backend shared by all requests
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(repository: Arc<dyn NoteRepository>) -> Self {
        Self { repository }
    }
}
