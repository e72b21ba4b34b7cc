//! Note Keeper Test Utils
//!
//! Provides shared testing utilities for the note keeper. This crate offers a builder
//! pattern for creating test contexts with in-memory SQLite databases and factories for
//! seeding rows.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting entities with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_note_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_note_tables().build().await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     let note = factory::create_note(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
