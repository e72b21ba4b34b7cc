//! Repository layer for notes.
//!
//! Defines the `NoteRepository` capability and its two backends: a process-local
//! in-memory store and a SeaORM-backed database table. Exactly one backend is selected at
//! startup and shared through `AppState`; services only ever see the trait object.
//! Repositories report absence as `None`/`false` and leave the translation into a
//! not-found error to the service layer.

pub mod memory;
pub mod note;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::server::model::note::{NewNote, Note, NoteChanges, NoteContent};

pub use memory::InMemoryNoteRepository;
pub use note::DatabaseNoteRepository;

/// Storage backend for notes.
///
/// Implementations own their collection exclusively and assign note ids. Timestamps are
/// stamped by the caller; an `updated_at` earlier than the stored `created_at` is raised
/// to `created_at`.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Stores a new note under a freshly generated id.
    async fn create(&self, note: NewNote) -> Result<Note, DbErr>;

    /// Gets a note by id, `None` if no such note exists.
    async fn get_by_id(&self, id: &str) -> Result<Option<Note>, DbErr>;

    /// Gets every note in stable order.
    async fn get_all(&self) -> Result<Vec<Note>, DbErr>;

    /// Gets a window of notes in stable order along with the total note count.
    ///
    /// # Arguments
    /// - `offset` - Number of notes to skip
    /// - `limit` - Maximum number of notes to return
    ///
    /// # Returns
    /// - `Ok((notes, total))` - Notes in the window and the number of stored notes
    async fn get_paginated(&self, offset: u64, limit: u64) -> Result<(Vec<Note>, u64), DbErr>;

    /// Replaces every user-editable field of a note, keeping its id and `created_at`.
    async fn replace(
        &self,
        id: &str,
        content: NoteContent,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Note>, DbErr>;

    /// Applies a partial update, keeping its id and `created_at`.
    async fn update(&self, id: &str, changes: NoteChanges) -> Result<Option<Note>, DbErr>;

    /// Deletes a note, returning `false` if no such note exists.
    async fn delete(&self, id: &str) -> Result<bool, DbErr>;
}

#[cfg(test)]
mod test;
