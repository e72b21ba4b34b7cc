use chrono::Utc;

use crate::server::{
    data::NoteRepository,
    error::{validation::ValidationError, AppError},
    model::note::{
        CreateNoteParams, NewNote, Note, NoteChanges, NoteContent, PaginatedNotes,
        UpdateNoteParams,
    },
};

/// Smallest accepted page size.
pub const MIN_LIMIT: u64 = 1;
/// Largest accepted page size.
pub const MAX_LIMIT: u64 = 100;
/// Largest accepted offset, bounded by the signed 64-bit `OFFSET` of SQL backends.
pub const MAX_OFFSET: u64 = i64::MAX as u64;

const NOTE_NOT_FOUND: &str = "Note not found";

pub struct NoteService<'a> {
    repo: &'a dyn NoteRepository,
}

impl<'a> NoteService<'a> {
    pub fn new(repo: &'a dyn NoteRepository) -> Self {
        Self { repo }
    }

    /// Validates and stores a new note stamped with the current time
    pub async fn create(&self, params: CreateNoteParams) -> Result<Note, AppError> {
        let content = NoteContent::validate(params)?;

        let note = self
            .repo
            .create(NewNote {
                content,
                created_at: Utc::now(),
            })
            .await?;

        tracing::debug!("Created note {}", note.id);

        Ok(note)
    }

    /// Gets a note by ID
    pub async fn get_by_id(&self, id: &str) -> Result<Note, AppError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOTE_NOT_FOUND.to_string()))
    }

    /// Gets every stored note in stable order
    pub async fn get_all(&self) -> Result<Vec<Note>, AppError> {
        Ok(self.repo.get_all().await?)
    }

    /// Gets a window of notes in stable order with the total count
    pub async fn get_paginated(&self, offset: u64, limit: u64) -> Result<PaginatedNotes, AppError> {
        if !(MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
            return Err(ValidationError::InvalidLimit {
                min: MIN_LIMIT,
                max: MAX_LIMIT,
                actual: limit,
            }
            .into());
        }

        if offset > MAX_OFFSET {
            return Err(ValidationError::InvalidOffset {
                max: MAX_OFFSET,
                actual: offset,
            }
            .into());
        }

        let (notes, total) = self.repo.get_paginated(offset, limit).await?;

        Ok(PaginatedNotes {
            notes,
            total,
            offset,
            limit,
        })
    }

    /// Replaces title, body and tags of an existing note
    pub async fn replace(&self, id: &str, params: CreateNoteParams) -> Result<Note, AppError> {
        let content = NoteContent::validate(params)?;

        let note = self
            .repo
            .replace(id, content, Utc::now())
            .await?
            .ok_or_else(|| AppError::NotFound(NOTE_NOT_FOUND.to_string()))?;

        tracing::debug!("Replaced note {}", note.id);

        Ok(note)
    }

    /// Partially updates an existing note; absent fields are left untouched
    pub async fn update(&self, id: &str, params: UpdateNoteParams) -> Result<Note, AppError> {
        let changes = NoteChanges::validate(params, Utc::now())?;

        let note = self
            .repo
            .update(id, changes)
            .await?
            .ok_or_else(|| AppError::NotFound(NOTE_NOT_FOUND.to_string()))?;

        tracing::debug!("Updated note {}", note.id);

        Ok(note)
    }

    /// Deletes a note
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound(NOTE_NOT_FOUND.to_string()));
        }

        tracing::debug!("Deleted note {}", id);

        Ok(())
    }
}
