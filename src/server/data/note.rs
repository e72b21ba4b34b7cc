use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder, QuerySelect, Select,
};
use uuid::Uuid;

use crate::server::{
    data::NoteRepository,
    model::note::{NewNote, Note, NoteChanges, NoteContent},
};

/// Note storage backed by the `note` table.
///
/// Holds a clone of the connection pool; clones share the same pool.
pub struct DatabaseNoteRepository {
    db: DatabaseConnection,
}

impl DatabaseNoteRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: &str) -> Result<Option<entity::note::Model>, DbErr> {
        entity::prelude::Note::find_by_id(id.to_string())
            .one(&self.db)
            .await
    }
}

const SQL_MAX: u64 = i64::MAX as u64;

/// Notes ordered by creation time, ties broken by id
fn ordered() -> Select<entity::prelude::Note> {
    entity::prelude::Note::find()
        .order_by_asc(entity::note::Column::CreatedAt)
        .order_by_asc(entity::note::Column::Id)
}

/// Writes an active model back, reporting a row deleted since it was read as `None`.
pub(super) async fn update_if_exists(
    db: &DatabaseConnection,
    active_model: entity::note::ActiveModel,
) -> Result<Option<entity::note::Model>, DbErr> {
    match active_model.update(db).await {
        Ok(model) => Ok(Some(model)),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(err) => Err(err),
    }
}

fn tags_to_json(tags: Vec<String>) -> serde_json::Value {
    serde_json::Value::from(tags)
}

#[async_trait]
impl NoteRepository for DatabaseNoteRepository {
    /// Inserts a new note with a generated UUID primary key
    async fn create(&self, note: NewNote) -> Result<Note, DbErr> {
        let model = entity::note::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            title: ActiveValue::Set(note.content.title),
            body: ActiveValue::Set(note.content.body),
            tags: ActiveValue::Set(tags_to_json(note.content.tags)),
            created_at: ActiveValue::Set(note.created_at),
            updated_at: ActiveValue::Set(note.created_at),
        }
        .insert(&self.db)
        .await?;

        Note::from_entity(model)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Note>, DbErr> {
        self.find_model(id).await?.map(Note::from_entity).transpose()
    }

    async fn get_all(&self) -> Result<Vec<Note>, DbErr> {
        ordered()
            .all(&self.db)
            .await?
            .into_iter()
            .map(Note::from_entity)
            .collect()
    }

    /// Offsets past `i64::MAX` yield an empty page; larger limits are clamped to it.
    async fn get_paginated(&self, offset: u64, limit: u64) -> Result<(Vec<Note>, u64), DbErr> {
        let total = entity::prelude::Note::find().count(&self.db).await?;

        // OFFSET and LIMIT are bound as signed 64-bit integers
        if offset > SQL_MAX {
            return Ok((Vec::new(), total));
        }

        let notes = ordered()
            .offset(offset)
            .limit(limit.min(SQL_MAX))
            .all(&self.db)
            .await?
            .into_iter()
            .map(Note::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((notes, total))
    }

    async fn replace(
        &self,
        id: &str,
        content: NoteContent,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Note>, DbErr> {
        let Some(note) = self.find_model(id).await? else {
            return Ok(None);
        };

        let created_at = note.created_at;
        let mut active_model: entity::note::ActiveModel = note.into();
        active_model.title = ActiveValue::Set(content.title);
        active_model.body = ActiveValue::Set(content.body);
        active_model.tags = ActiveValue::Set(tags_to_json(content.tags));
        active_model.updated_at = ActiveValue::Set(updated_at.max(created_at));

        update_if_exists(&self.db, active_model)
            .await?
            .map(Note::from_entity)
            .transpose()
    }

    async fn update(&self, id: &str, changes: NoteChanges) -> Result<Option<Note>, DbErr> {
        let Some(note) = self.find_model(id).await? else {
            return Ok(None);
        };

        let created_at = note.created_at;
        let mut active_model: entity::note::ActiveModel = note.into();
        if let Some(title) = changes.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(body) = changes.body {
            active_model.body = ActiveValue::Set(body);
        }
        if let Some(tags) = changes.tags {
            active_model.tags = ActiveValue::Set(tags_to_json(tags));
        }
        active_model.updated_at = ActiveValue::Set(changes.updated_at.max(created_at));

        update_if_exists(&self.db, active_model)
            .await?
            .map(Note::from_entity)
            .transpose()
    }

    async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Note::delete_by_id(id.to_string())
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
