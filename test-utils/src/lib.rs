//! Solnews test utilities.
//!
//! Shared helpers for unit and integration tests across the workspace:
//!
//! - **TestBuilder**: fluent builder that creates an in-memory SQLite
//!   database with the entity tables a test needs
//! - **TestContext**: holds the database connection and a lazily-created
//!   session instance
//! - **factory**: builders that insert entity rows with sensible defaults
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_comments() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_content_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
