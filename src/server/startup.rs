use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    data::{DatabaseNoteRepository, InMemoryNoteRepository, NoteRepository},
    error::AppError,
};

/// Installs the global tracing subscriber.
///
/// Uses `RUST_LOG` when set, otherwise the default filter of the configured environment.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.environment.default_log_filter()));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the provided connection string, then automatically
/// runs all pending SeaORM migrations to ensure the `note` table is up-to-date. This
/// function must complete successfully before the database repository can be used.
///
/// # Arguments
/// - `database_url` - Assembled connection URL (PostgreSQL or SQLite)
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(
    database_url: &str,
) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Selects the note repository for the lifetime of the process.
///
/// A configured database URL selects the database repository, otherwise notes are kept
/// in memory.
pub async fn connect_to_repository(config: &Config) -> Result<Arc<dyn NoteRepository>, AppError> {
    match &config.database_url {
        Some(database_url) => {
            let db = connect_to_database(database_url).await?;
            tracing::info!("Using database note repository");
            Ok(Arc::new(DatabaseNoteRepository::new(db)))
        }
        None => {
            tracing::info!("NOTES_DB_URL not set, using in-memory note repository");
            Ok(Arc::new(InMemoryNoteRepository::new()))
        }
    }
}
