//! Request middleware and authentication guards.

pub mod auth;
