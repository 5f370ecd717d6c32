//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They own input
//! validation, the moderation rules, and multi-repository orchestration, and
//! work with domain models rather than DTOs or entity models. Resources are
//! always resolved before permissions are checked, so a missing resource
//! reads as 404 and never leaks through a 403.

pub mod article;
pub mod auth;
pub mod comment;
pub mod moderation;
pub mod suggestion;
pub mod user;
