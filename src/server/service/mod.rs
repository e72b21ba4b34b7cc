//! Service layer for business logic and orchestration.
//!
//! This module sits between the controller (API) layer and the data (repository) layer.
//! Services validate input, apply the timestamp policy and translate missing records
//! into not-found errors.

pub mod note;
