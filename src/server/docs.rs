//! OpenAPI document and documentation page rendering.
//!
//! Paths and schemas are collected by `utoipa-axum` from the `#[utoipa::path]`
//! annotations on the controllers; `ApiDoc` only carries the document-level metadata.
//! Swagger UI at `/docs` is served by `utoipa-swagger-ui` and ReDoc at `/redoc` by
//! `utoipa-redoc`. The themed variants of both UIs are small HTML shells that load their
//! assets from a CDN and point at `/openapi.json`.

use utoipa::OpenApi;

pub const API_TITLE: &str = "Note Keeper API";
pub const OPENAPI_URL: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Note Keeper API",
        version = "1.0.0",
        description = "A modern, clean RESTful API for managing notes. Create, read, update, and delete notes with a simple interface.",
        contact(name = "Note Keeper", url = "https://example.com"),
        license(name = "MIT")
    ),
    servers((url = "/")),
    tags(
        (name = "Health", description = "Service health and readiness."),
        (name = "Notes", description = "CRUD operations for notes and related actions."),
        (name = "Docs", description = "Documentation and usage references.")
    )
)]
pub struct ApiDoc;

/// "Ocean Professional" palette applied by the themed documentation pages.
struct Palette {
    primary: &'static str,
    secondary: &'static str,
    error: &'static str,
    background: &'static str,
    surface: &'static str,
    text: &'static str,
}

const OCEAN: Palette = Palette {
    primary: "#2563EB",
    secondary: "#F59E0B",
    error: "#EF4444",
    background: "#f9fafb",
    surface: "#ffffff",
    text: "#111827",
};

/// Stylesheet overriding Swagger UI and ReDoc colors with the ocean palette.
pub fn ocean_stylesheet() -> String {
    format!(
        r#"
    :root {{
        --ocean-primary: {primary};
        --ocean-secondary: {secondary};
        --ocean-text: {text};
        --ocean-surface: {surface};
        --ocean-bg: {background};
    }}
    body, .swagger-ui {{
        background: var(--ocean-bg) !important;
        color: var(--ocean-text);
    }}
    .topbar, .information-container, .opblock-tag-section h3, .scheme-container {{
        background: var(--ocean-surface) !important;
        box-shadow: 0 1px 2px rgba(0,0,0,0.06), 0 1px 3px rgba(0,0,0,0.1);
        border-radius: 8px;
    }}
    .topbar-wrapper .link span {{
        color: var(--ocean-primary) !important;
    }}
    .btn.execute.opblock-control__btn {{
        background-color: var(--ocean-primary) !important;
    }}
    .btn.clear.opblock-control__btn, .btn.try-out__btn {{
        color: var(--ocean-primary) !important;
        border-color: var(--ocean-primary) !important;
    }}
    .opblock.opblock-post .opblock-summary-method {{
        background: var(--ocean-secondary) !important;
    }}
    .opblock.opblock-get .opblock-summary-method {{
        background: var(--ocean-primary) !important;
    }}
    .opblock.opblock-put .opblock-summary-method {{
        background: #10B981 !important;
    }}
    .opblock.opblock-patch .opblock-summary-method {{
        background: #8B5CF6 !important;
    }}
    .opblock.opblock-delete .opblock-summary-method {{
        background: {error} !important;
    }}
    .markdown p, .markdown pre, .info__tos, .info__contact, .info__license {{
        color: var(--ocean-text) !important;
    }}
    "#,
        primary = OCEAN.primary,
        secondary = OCEAN.secondary,
        text = OCEAN.text,
        surface = OCEAN.surface,
        background = OCEAN.background,
        error = OCEAN.error,
    )
}

/// Renders a Swagger UI page, optionally with an extra stylesheet in `<head>`.
pub fn swagger_ui_html(openapi_url: &str, title: &str, stylesheet: Option<&str>) -> String {
    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
<link type="text/css" rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui.css">
<title>{title}</title>
</head>
<body>
<div id="swagger-ui"></div>
<script src="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
<script>
const ui = SwaggerUIBundle({{
    url: '{openapi_url}',
    dom_id: '#swagger-ui',
    layout: 'BaseLayout',
    deepLinking: true,
    showExtensions: true,
    showCommonExtensions: true,
    presets: [SwaggerUIBundle.presets.apis, SwaggerUIBundle.SwaggerUIStandalonePreset],
}})
</script>
</body>
</html>"#
    );

    inject_stylesheet(html, stylesheet)
}

/// Renders a ReDoc page, optionally with an extra stylesheet in `<head>`.
pub fn redoc_html(openapi_url: &str, title: &str, stylesheet: Option<&str>) -> String {
    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>{title}</title>
<meta charset="utf-8"/>
<meta name="viewport" content="width=device-width, initial-scale=1">
<link href="https://fonts.googleapis.com/css?family=Montserrat:300,400,700|Roboto:300,400,700" rel="stylesheet">
<style>
    body {{
        margin: 0;
        padding: 0;
    }}
</style>
</head>
<body>
<noscript>ReDoc requires Javascript to function. Please enable it to browse the documentation.</noscript>
<redoc spec-url="{openapi_url}"></redoc>
<script src="https://cdn.jsdelivr.net/npm/redoc@2/bundles/redoc.standalone.js"></script>
</body>
</html>"#
    );

    inject_stylesheet(html, stylesheet)
}

fn inject_stylesheet(html: String, stylesheet: Option<&str>) -> String {
    match stylesheet {
        Some(css) => html.replacen("</head>", &format!("<style>{}</style></head>", css), 1),
        None => html,
    }
}
