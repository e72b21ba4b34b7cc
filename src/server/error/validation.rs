use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Note title is missing or contains only whitespace.
    #[error("Title must not be empty")]
    EmptyTitle,

    /// Note title exceeds the maximum length measured in characters.
    #[error("Title must be at most {max} characters, got {actual}")]
    TitleTooLong {
        /// Maximum allowed number of characters
        max: usize,
        /// Number of characters in the rejected title
        actual: usize,
    },

    /// A tag is empty or contains only whitespace.
    #[error("Tags must not be empty")]
    EmptyTag,

    /// Requested page size falls outside of the accepted range.
    #[error("Limit must be between {min} and {max}, got {actual}")]
    InvalidLimit { min: u64, max: u64, actual: u64 },

    /// Requested offset is larger than any backend can address.
    #[error("Offset must be at most {max}, got {actual}")]
    InvalidOffset { max: u64, actual: u64 },
}

/// Converts validation errors into HTTP responses.
///
/// All variants map to 400 Bad Request with the error message as body.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
