//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the note keeper,
//! including API endpoints, business logic, and data access. The backend uses Axum as
//! the web framework, SeaORM for database operations, and utoipa for the generated
//! API documentation.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Validation, timestamps and not-found translation
//! - **Data Layer** (`data/`) - `NoteRepository` trait with in-memory and database backends
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (the selected repository)
//! - **Startup** (`startup`) - Logging, database connection and backend selection
//! - **Router** (`router`) - Axum route configuration, CORS and request tracing
//! - **Docs** (`docs`) - OpenAPI metadata and documentation page rendering
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** extracts the payload, converts DTOs to params, calls service
//! 3. **Service** validates input, stamps timestamps, calls the repository
//! 4. **Data** reads or writes the in-memory store or the `note` table
//! 5. **Service** turns a missing note into `AppError::NotFound`
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod docs;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
