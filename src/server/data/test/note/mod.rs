use crate::server::{
    data::{note::update_if_exists, DatabaseNoteRepository, NoteRepository},
    model::note::{NewNote, NoteChanges, NoteContent},
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;
mod replace;
mod update;

/// Builds validated content for repository calls
fn content(title: &str, body: &str, tags: &[&str]) -> NoteContent {
    NoteContent {
        title: title.to_string(),
        body: body.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
    }
}
