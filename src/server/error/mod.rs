//! Application errors and their HTTP mapping.
//!
//! `AppError` is returned by every service and controller. Its `IntoResponse` impl picks
//! the status code; the body is always an `ErrorDto`.

pub mod config;
pub mod validation;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, validation::ValidationError},
};

#[derive(Error, Debug)]
pub enum AppError {
    /// An environment variable could not be turned into `Config`. Only raised at startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Note payload or query parameters failed validation.
    ///
    /// Delegates to `ValidationError::into_response()` which maps every variant
    /// to 400 Bad Request.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Storage backend fault, reported as a generic 500.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while binding or serving the HTTP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// 404 with the given message.
    #[error("{0}")]
    NotFound(String),

    /// 400 with the given message, used for rejected request bodies and queries.
    #[error("{0}")]
    BadRequest(String),
}

/// Malformed JSON bodies, wrong content types and missing required fields are
/// reported as 400 Bad Request with axum's rejection message.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Maps each variant to a status code.
///
/// # Returns
/// - 400 Bad Request - `BadRequest` and `ValidationErr`
/// - 404 Not Found - `NotFound`
/// - 500 Internal Server Error - everything else, logged in full
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::ValidationErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Logs the wrapped error and answers with a bare "Internal server error" body.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
