//! SeaORM entity definitions for the note keeper database.

pub mod prelude;

pub mod note;
