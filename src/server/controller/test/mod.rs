use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use tower::ServiceExt;

use crate::{
    model::{
        api::{ErrorDto, HealthDto},
        note::{NoteDto, PaginatedNotesDto},
    },
    server::{
        config::Config, data::InMemoryNoteRepository, router::router,
        startup::connect_to_repository, state::AppState,
    },
};


/// Builds the application router backed by a fresh in-memory repository
fn app() -> Router {
    app_with(&[])
}

fn app_with(vars: &[(&str, &str)]) -> Router {
    let vars: Vec<(String, String)> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let config = Config::from_lookup(|name| {
        vars.iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    })
    .unwrap();

    router(&config).with_state(AppState::new(Arc::new(InMemoryNoteRepository::new())))
}

/// Builds the application router backed by a migrated in-memory SQLite database
async fn database_app() -> Router {
    let config = Config::from_lookup(|name| {
        (name == "NOTES_DB_URL").then(|| "sqlite::memory:".to_string())
    })
    .unwrap();
    let repository = connect_to_repository(&config).await.unwrap();

    router(&config).with_state(AppState::new(repository))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> Response {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

async fn json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn health_check_reports_healthy() {
    let app = app();

    let response = send(&app, Method::GET, "/", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: HealthDto = json(response).await;
    assert_eq!(body.message, "Healthy");
}
