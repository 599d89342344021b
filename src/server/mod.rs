//! Server-side API backend and business logic.
//!
//! This module contains the backend for the guild configuration dashboard: API endpoints,
//! configuration merge logic, data access, and infrastructure. The backend uses Axum as the
//! web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Loading, merging and saving guild configuration
//! - **Data Layer** (`data/`) - Database operations on raw stored payloads
//! - **Document** (`document/`) - Configuration tree, default schema and merge rules
//! - **Model Layer** (`model/`) - Domain models such as validated guild IDs and payloads
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Tracing, database connection, CORS and shutdown handling
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** extracts the guild ID and body, calls the service
//! 3. **Service** validates the guild ID and loads the stored document
//! 4. **Data** fetches or upserts the raw payload
//! 5. **Service** merges the stored document over the defaults, or replaces `features`
//! 6. **Controller** converts the result to a DTO and returns the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod document;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
