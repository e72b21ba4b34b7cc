//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let note = factory::create_note(&db).await?;
//!
//! let tagged = factory::note::NoteFactory::new(&db)
//!     .title("Groceries")
//!     .tags(["home"])
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod note;

pub use note::create_note;
