use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::HealthDto;

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "Health";

/// Health check.
///
/// Returns service health and readiness status.
#[utoipa::path(
    get,
    path = "/",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is healthy", body = HealthDto)
    ),
)]
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            message: "Healthy".to_string(),
        }),
    )
}
