//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework, SeaORM for database access,
//! and the `oauth2` crate for Discord login. It follows a layered
//! architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session authentication guard
//!
//! Supporting modules provide application infrastructure: `config`
//! (environment-based configuration), `state` (shared application state),
//! `startup` (database, session, and OAuth client initialization), and
//! `router` (route configuration and API docs).
//!
//! A typical request flows router → middleware guard → controller →
//! service → repository, with domain models converted to DTOs on the way
//! back out.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
