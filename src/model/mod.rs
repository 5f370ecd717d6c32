//! Wire DTOs exchanged with API clients.

pub mod api;
pub mod article;
pub mod comment;
pub mod home;
pub mod suggestion;
pub mod user;
