//! Factories for inserting test entities with sensible defaults.

pub mod article;
pub mod comment;
pub mod helpers;
pub mod news_suggestion;
pub mod user;
