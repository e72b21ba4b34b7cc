//! Themed documentation pages. The plain Swagger UI and ReDoc pages are mounted by the router.

use axum::response::Html;

use crate::server::docs::{
    ocean_stylesheet, redoc_html, swagger_ui_html, API_TITLE, OPENAPI_URL,
};

/// Swagger UI with the "Ocean Professional" theme.
pub async fn themed_swagger_ui() -> Html<String> {
    Html(swagger_ui_html(
        OPENAPI_URL,
        &format!("{} - Docs", API_TITLE),
        Some(&ocean_stylesheet()),
    ))
}

/// ReDoc with the "Ocean Professional" theme.
pub async fn themed_redoc() -> Html<String> {
    Html(redoc_html(
        OPENAPI_URL,
        &format!("{} - ReDoc", API_TITLE),
        Some(&ocean_stylesheet()),
    ))
}
