mod model;
mod server;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing(&config);

    let repository = startup::connect_to_repository(&config).await?;

    let app = router::router(&config).with_state(AppState::new(repository));

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;

    tracing::info!(
        "Starting server on {}:{} ({})",
        config.host,
        config.port,
        if config.is_production() {
            "production"
        } else {
            "development"
        }
    );

    axum::serve(listener, app).await?;

    Ok(())
}
