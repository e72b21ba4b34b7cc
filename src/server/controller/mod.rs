//! HTTP request handlers.
//!
//! Controllers extract request data, convert DTOs into service parameters, call the
//! service layer and convert the resulting domain models back into DTOs. Errors are
//! returned as `AppError` and turned into HTTP responses by its `IntoResponse` impl.

pub mod docs;
pub mod health;
pub mod note;

#[cfg(test)]
mod test;
