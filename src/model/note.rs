use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NoteDto {
    /// Unique identifier for the note.
    pub id: String,
    /// Short title for the note.
    pub title: String,
    /// Detailed content of the note.
    pub body: String,
    /// Tags for organization.
    pub tags: Vec<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a note, also used to replace one wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateNoteDto {
    /// Short title for the note, at most 200 characters.
    pub title: String,
    /// Detailed content of the note. Defaults to an empty body.
    #[serde(default, alias = "content")]
    pub body: Option<String>,
    /// Tags for organization. Defaults to no tags.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Payload for a partial update. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateNoteDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, alias = "content")]
    pub body: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedNotesDto {
    /// Notes in the requested window, oldest first.
    pub items: Vec<NoteDto>,
    /// Total number of stored notes.
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}
