use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Each call to [`TestBuilder::with_table`] adds a CREATE TABLE statement
/// generated from a SeaORM entity; `build()` connects to an in-memory SQLite
/// database and executes them in order. Add tables in dependency order so
/// foreign keys resolve.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds a CREATE INDEX statement, executed after all tables exist.
    ///
    /// Entity-derived tables carry no secondary indexes; constraints the
    /// application relies on have to be added here explicitly.
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds every content table in dependency order: User, NewsSuggestion,
    /// Article, Comment, Like, plus the unique (user, comment) index on
    /// likes that duplicate inserts fail on.
    ///
    /// Use this for any test that touches articles, comments, or likes;
    /// use `with_table` directly for tests that only need users.
    pub fn with_content_tables(self) -> Self {
        self.with_table(User)
            .with_table(NewsSuggestion)
            .with_table(Article)
            .with_table(Comment)
            .with_table(Like)
            .with_index(
                Index::create()
                    .name("idx_like_user_id_comment_id")
                    .table(Like)
                    .col(entity::like::Column::UserId)
                    .col(entity::like::Column::CommentId)
                    .unique()
                    .to_owned(),
            )
    }

    /// Builds the test context and creates the configured schema.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - In-memory database ready for use
    /// - `Err(TestError::Database)` - Failed to connect or create the schema
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
