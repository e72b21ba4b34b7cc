use axum::{routing::get, Router};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::{AllowedOrigins, Config},
    controller::{docs, health, note},
    docs::{ApiDoc, OPENAPI_URL},
    state::AppState,
};

pub fn router(config: &Config) -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::health_check))
        .routes(routes!(note::create_note, note::get_notes))
        .routes(routes!(
            note::get_note_by_id,
            note::replace_note,
            note::update_note,
            note::delete_note
        ))
        .split_for_parts();

    router
        .merge(Redoc::with_url("/redoc", api.clone()))
        .merge(SwaggerUi::new("/docs").url(OPENAPI_URL, api))
        .route("/docs-theme", get(docs::themed_swagger_ui))
        .route("/redoc-theme", get(docs::themed_redoc))
        .layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http())
}

/// Builds the CORS layer for the configured origins.
///
/// Credentials are only allowed with an explicit origin list.
fn cors_layer(origins: &AllowedOrigins) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    match origins {
        AllowedOrigins::Any => layer.allow_origin(AllowOrigin::any()),
        AllowedOrigins::List(origins) => layer
            .allow_origin(AllowOrigin::list(origins.iter().cloned()))
            .allow_credentials(true),
    }
}
