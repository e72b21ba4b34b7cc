use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Collects the tables a test needs, then creates them in a fresh in-memory SQLite database.
///
/// ```rust,ignore
/// let test = TestBuilder::new().with_note_tables().build().await?;
/// let db = test.db.as_ref().unwrap();
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Queues the table of a SeaORM entity, generated with SQLite syntax.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Queues every table the note repository touches.
    pub fn with_note_tables(self) -> Self {
        self.with_table(Note)
    }

    /// Connects and creates the queued tables in order.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context holding the connection with all tables created
    /// - `Err(TestError::Database)` - Connecting or creating a table failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
