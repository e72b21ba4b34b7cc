//! Note domain models and parameters.
//!
//! Provides the domain model for notes together with the parameter types flowing from
//! controllers into the service, and the validated types the service hands to a
//! repository. Validation lives on the conversion from raw parameters to validated
//! content so a repository can never receive a note that breaks the title or tag rules.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::note::{CreateNoteDto, NoteDto, PaginatedNotesDto, UpdateNoteDto},
    server::error::validation::ValidationError,
};

/// Maximum number of characters allowed in a note title.
pub const TITLE_MAX_LENGTH: usize = 200;

/// A stored note.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    /// Server-generated UUID, immutable for the lifetime of the note.
    pub id: String,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    /// Always greater than or equal to `created_at`.
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The note entity from the database
    ///
    /// # Returns
    /// - `Ok(Note)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored tags are not a JSON array of strings
    pub fn from_entity(entity: entity::note::Model) -> Result<Self, DbErr> {
        let tags = serde_json::from_value::<Vec<String>>(entity.tags).map_err(|e| {
            DbErr::Custom(format!("Failed to parse tags of note {}: {}", entity.id, e))
        })?;

        Ok(Self {
            id: entity.id,
            title: entity.title,
            body: entity.body,
            tags,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> NoteDto {
        NoteDto {
            id: self.id,
            title: self.title,
            body: self.body,
            tags: self.tags,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Raw parameters for creating or replacing a note, not yet validated.
#[derive(Debug, Clone)]
pub struct CreateNoteParams {
    pub title: String,
    pub body: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl CreateNoteParams {
    pub fn from_dto(dto: CreateNoteDto) -> Self {
        Self {
            title: dto.title,
            body: dto.body,
            tags: dto.tags,
        }
    }
}

/// Raw parameters for a partial update, not yet validated.
#[derive(Debug, Clone, Default)]
pub struct UpdateNoteParams {
    pub title: Option<String>,
    pub body: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl UpdateNoteParams {
    pub fn from_dto(dto: UpdateNoteDto) -> Self {
        Self {
            title: dto.title,
            body: dto.body,
            tags: dto.tags,
        }
    }
}

/// Validated user-editable fields of a note.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteContent {
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
}

impl NoteContent {
    /// Validates create/replace parameters.
    ///
    /// Titles and tags are stored trimmed; the body is kept verbatim and defaults to empty.
    ///
    /// # Returns
    /// - `Ok(NoteContent)` - Parameters satisfy all note rules
    /// - `Err(ValidationError)` - Title empty or too long, or an empty tag
    pub fn validate(params: CreateNoteParams) -> Result<Self, ValidationError> {
        Ok(Self {
            title: validate_title(&params.title)?,
            body: params.body.unwrap_or_default(),
            tags: validate_tags(params.tags.unwrap_or_default())?,
        })
    }
}

/// A validated note ready to be stored; the repository assigns the id.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub content: NoteContent,
    /// Used for both `created_at` and `updated_at`.
    pub created_at: DateTime<Utc>,
}

/// Validated partial update. `None` fields keep their stored value.
#[derive(Debug, Clone)]
pub struct NoteChanges {
    pub title: Option<String>,
    pub body: Option<String>,
    pub tags: Option<Vec<String>>,
    pub updated_at: DateTime<Utc>,
}

impl NoteChanges {
    /// Validates partial update parameters, applying the same rules as
    /// [`NoteContent::validate`] to every supplied field.
    pub fn validate(
        params: UpdateNoteParams,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            title: params.title.as_deref().map(validate_title).transpose()?,
            body: params.body,
            tags: params.tags.map(validate_tags).transpose()?,
            updated_at,
        })
    }

    /// Applies the changes to a note in place. `updated_at` never drops below `created_at`.
    pub fn apply(self, note: &mut Note) {
        if let Some(title) = self.title {
            note.title = title;
        }
        if let Some(body) = self.body {
            note.body = body;
        }
        if let Some(tags) = self.tags {
            note.tags = tags;
        }
        note.updated_at = self.updated_at.max(note.created_at);
    }
}

/// One page of notes together with the total number of stored notes.
#[derive(Debug, Clone)]
pub struct PaginatedNotes {
    pub notes: Vec<Note>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

impl PaginatedNotes {
    pub fn into_dto(self) -> PaginatedNotesDto {
        PaginatedNotesDto {
            items: self.notes.into_iter().map(Note::into_dto).collect(),
            total: self.total,
            offset: self.offset,
            limit: self.limit,
        }
    }
}

fn validate_title(title: &str) -> Result<String, ValidationError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }

    let length = title.chars().count();
    if length > TITLE_MAX_LENGTH {
        return Err(ValidationError::TitleTooLong {
            max: TITLE_MAX_LENGTH,
            actual: length,
        });
    }

    Ok(title.to_string())
}

fn validate_tags(tags: Vec<String>) -> Result<Vec<String>, ValidationError> {
    tags.into_iter()
        .map(|tag| {
            let tag = tag.trim();
            if tag.is_empty() {
                Err(ValidationError::EmptyTag)
            } else {
                Ok(tag.to_string())
            }
        })
        .collect()
}
