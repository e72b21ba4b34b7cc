use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        note::{CreateNoteDto, NoteDto, PaginatedNotesDto, UpdateNoteDto},
    },
    server::{
        error::AppError,
        model::note::{CreateNoteParams, UpdateNoteParams},
        service::note::NoteService,
        state::AppState,
    },
};

/// Tag for grouping note endpoints in OpenAPI documentation
pub static NOTE_TAG: &str = "Notes";

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub offset: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    20
}

/// Create a new note.
///
/// Validates the payload and stores a new note with a server-generated ID. Both
/// timestamps are set to the creation time.
///
/// # Arguments
/// - `state` - Application state containing the note repository
/// - `payload` - Note title with optional body and tags
///
/// # Returns
/// - `201 Created` - Successfully created note
/// - `400 Bad Request` - Malformed body, empty or overlong title, or empty tag
/// - `500 Internal Server Error` - Storage backend error
#[utoipa::path(
    post,
    path = "/api/notes",
    tag = NOTE_TAG,
    request_body = CreateNoteDto,
    responses(
        (status = 201, description = "Note created successfully", body = NoteDto),
        (status = 400, description = "Validation error", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<CreateNoteDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = NoteService::new(state.repository.as_ref());

    let note = service.create(CreateNoteParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(note.into_dto())))
}

/// Get paginated notes.
///
/// Returns notes in stable order, oldest first, along with the total number of notes.
///
/// # Arguments
/// - `state` - Application state containing the note repository
/// - `params` - Pagination parameters (offset and limit)
///
/// # Returns
/// - `200 OK` - Page of notes
/// - `400 Bad Request` - Limit outside of 1..=100 or malformed query
/// - `500 Internal Server Error` - Storage backend error
#[utoipa::path(
    get,
    path = "/api/notes",
    tag = NOTE_TAG,
    params(
        ("offset" = Option<u64>, Query, description = "Number of notes to skip (default: 0)"),
        ("limit" = Option<u64>, Query, description = "Max notes to return, 1-100 (default: 20)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved notes", body = PaginatedNotesDto),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notes(
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;

    let service = NoteService::new(state.repository.as_ref());

    let notes = service.get_paginated(params.offset, params.limit).await?;

    Ok((StatusCode::OK, Json(notes.into_dto())))
}

/// Get a specific note by ID.
///
/// # Returns
/// - `200 OK` - The requested note
/// - `404 Not Found` - No note with this ID
/// - `500 Internal Server Error` - Storage backend error
#[utoipa::path(
    get,
    path = "/api/notes/{note_id}",
    tag = NOTE_TAG,
    params(
        ("note_id" = String, Path, description = "The unique ID of the note")
    ),
    responses(
        (status = 200, description = "Successfully retrieved note", body = NoteDto),
        (status = 404, description = "Note not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_note_by_id(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = NoteService::new(state.repository.as_ref());

    let note = service.get_by_id(&note_id).await?;

    Ok((StatusCode::OK, Json(note.into_dto())))
}

/// Replace a note.
///
/// Overwrites title, body and tags of an existing note. Omitted body and tags are
/// reset to empty. The ID and creation time are preserved.
///
/// # Returns
/// - `200 OK` - Successfully replaced note
/// - `400 Bad Request` - Malformed body, empty or overlong title, or empty tag
/// - `404 Not Found` - No note with this ID
/// - `500 Internal Server Error` - Storage backend error
#[utoipa::path(
    put,
    path = "/api/notes/{note_id}",
    tag = NOTE_TAG,
    params(
        ("note_id" = String, Path, description = "The unique ID of the note")
    ),
    request_body = CreateNoteDto,
    responses(
        (status = 200, description = "Successfully replaced note", body = NoteDto),
        (status = 400, description = "Validation error", body = ErrorDto),
        (status = 404, description = "Note not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn replace_note(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
    payload: Result<Json<CreateNoteDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = NoteService::new(state.repository.as_ref());

    let note = service
        .replace(&note_id, CreateNoteParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(note.into_dto())))
}

/// Partially update a note.
///
/// Only the supplied fields change; the update time is always refreshed.
///
/// # Returns
/// - `200 OK` - Successfully updated note
/// - `400 Bad Request` - Malformed body, empty or overlong title, or empty tag
/// - `404 Not Found` - No note with this ID
/// - `500 Internal Server Error` - Storage backend error
#[utoipa::path(
    patch,
    path = "/api/notes/{note_id}",
    tag = NOTE_TAG,
    params(
        ("note_id" = String, Path, description = "The unique ID of the note")
    ),
    request_body = UpdateNoteDto,
    responses(
        (status = 200, description = "Successfully updated note", body = NoteDto),
        (status = 400, description = "Validation error", body = ErrorDto),
        (status = 404, description = "Note not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_note(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
    payload: Result<Json<UpdateNoteDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = NoteService::new(state.repository.as_ref());

    let note = service
        .update(&note_id, UpdateNoteParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(note.into_dto())))
}

/// Delete a note.
///
/// # Returns
/// - `204 No Content` - Successfully deleted note
/// - `404 Not Found` - No note with this ID
/// - `500 Internal Server Error` - Storage backend error
#[utoipa::path(
    delete,
    path = "/api/notes/{note_id}",
    tag = NOTE_TAG,
    params(
        ("note_id" = String, Path, description = "The unique ID of the note")
    ),
    responses(
        (status = 204, description = "Note deleted"),
        (status = 404, description = "Note not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_note(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = NoteService::new(state.repository.as_ref());

    service.delete(&note_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
