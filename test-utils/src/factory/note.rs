//! Note factory for creating test note entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test notes with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::note::NoteFactory;
///
/// let note = NoteFactory::new(&db)
///     .title("Custom Note")
///     .body("details")
///     .build()
///     .await?;
/// ```
pub struct NoteFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    title: String,
    body: String,
    tags: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl<'a> NoteFactory<'a> {
    /// Creates a new NoteFactory with default values.
    ///
    /// Defaults:
    /// - id: random UUID v4
    /// - title: `"Note {n}"` where n is auto-incremented
    /// - body: empty
    /// - tags: none
    /// - created_at / updated_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let now = Utc::now();
        Self {
            db,
            id: uuid::Uuid::new_v4().to_string(),
            title: format!("Note {}", next_id()),
            body: String::new(),
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets both timestamps to the given time.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self.updated_at = created_at;
        self
    }

    /// Builds and inserts the note entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::note::Model)` - Created note entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::note::Model, DbErr> {
        entity::note::ActiveModel {
            id: ActiveValue::Set(self.id),
            title: ActiveValue::Set(self.title),
            body: ActiveValue::Set(self.body),
            tags: ActiveValue::Set(serde_json::Value::from(self.tags)),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a note with default values.
///
/// Shorthand for `NoteFactory::new(db).build().await`.
pub async fn create_note(db: &DatabaseConnection) -> Result<entity::note::Model, DbErr> {
    NoteFactory::new(db).build().await
}
