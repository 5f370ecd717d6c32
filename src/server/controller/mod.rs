//! HTTP request handlers.
//!
//! Controllers stay thin: resolve the session through the auth guard,
//! convert DTOs to parameter types, call a service, and convert the result
//! back to a DTO.

pub mod article;
pub mod auth;
pub mod comment;
pub mod home;
pub mod suggestion;
pub mod user;
