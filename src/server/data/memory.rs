use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::server::{
    data::NoteRepository,
    model::note::{NewNote, Note, NoteChanges, NoteContent},
};

#[derive(Default)]
struct NoteStore {
    notes: HashMap<String, Note>,
    /// Note ids in insertion order.
    order: Vec<String>,
}

/// Process-local note storage. Contents are lost on restart.
///
/// Reads share the lock while every mutation holds it exclusively.
#[derive(Default)]
pub struct InMemoryNoteRepository {
    store: RwLock<NoteStore>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteRepository for InMemoryNoteRepository {
    async fn create(&self, note: NewNote) -> Result<Note, DbErr> {
        let mut store = self.store.write().await;

        // never overwrite an existing note
        let mut id = Uuid::new_v4().to_string();
        while store.notes.contains_key(&id) {
            id = Uuid::new_v4().to_string();
        }

        let note = Note {
            id: id.clone(),
            title: note.content.title,
            body: note.content.body,
            tags: note.content.tags,
            created_at: note.created_at,
            updated_at: note.created_at,
        };

        store.notes.insert(id.clone(), note.clone());
        store.order.push(id);

        Ok(note)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Note>, DbErr> {
        Ok(self.store.read().await.notes.get(id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Note>, DbErr> {
        let store = self.store.read().await;

        Ok(store
            .order
            .iter()
            .filter_map(|id| store.notes.get(id).cloned())
            .collect())
    }

    async fn get_paginated(&self, offset: u64, limit: u64) -> Result<(Vec<Note>, u64), DbErr> {
        let store = self.store.read().await;

        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        let notes = store
            .order
            .iter()
            .skip(offset)
            .take(limit)
            .filter_map(|id| store.notes.get(id).cloned())
            .collect();

        Ok((notes, store.order.len() as u64))
    }

    async fn replace(
        &self,
        id: &str,
        content: NoteContent,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Note>, DbErr> {
        let mut store = self.store.write().await;

        let Some(note) = store.notes.get_mut(id) else {
            return Ok(None);
        };

        note.title = content.title;
        note.body = content.body;
        note.tags = content.tags;
        note.updated_at = updated_at.max(note.created_at);

        Ok(Some(note.clone()))
    }

    async fn update(&self, id: &str, changes: NoteChanges) -> Result<Option<Note>, DbErr> {
        let mut store = self.store.write().await;

        let Some(note) = store.notes.get_mut(id) else {
            return Ok(None);
        };

        changes.apply(note);

        Ok(Some(note.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let mut store = self.store.write().await;

        if store.notes.remove(id).is_none() {
            return Ok(false);
        }
        store.order.retain(|existing| existing != id);

        Ok(true)
    }
}
