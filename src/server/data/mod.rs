//! Database repository layer for all domain entities.
//!
//! Repositories own all queries, inserts, updates, and deletes, and convert
//! entity models to domain models at this boundary. Multi-row deletes
//! (comment subtrees, article cascades, account removal) each run inside a
//! single transaction; the shared helpers are generic over
//! `ConnectionTrait` so they compose into the larger cascades.

pub mod article;
pub mod comment;
pub mod like;
pub mod suggestion;
pub mod user;

#[cfg(test)]
mod test;
