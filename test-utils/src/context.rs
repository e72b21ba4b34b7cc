use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Database handle shared by one test.
///
/// Each context owns its own `sqlite::memory:` database, so tests never see each
/// other's rows.
pub struct TestContext {
    /// Connected on first use by `database()`.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Returns the connection, opening the in-memory database if needed.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        let db = match self.db.take() {
            Some(db) => db,
            None => Database::connect("sqlite::memory:").await?,
        };

        Ok(self.db.insert(db))
    }

    /// Executes the given CREATE TABLE statements against the context's database.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
