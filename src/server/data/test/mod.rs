//! Data-layer tests against in-memory SQLite.
//!
//! One directory per repository, one file per operation.

mod article;
mod comment;
mod like;
mod suggestion;
mod user;
