//! Comment factory for creating test comment entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments with customizable fields.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    article_id: i32,
    user_id: i32,
    parent_id: Option<i32>,
    body: String,
}

impl<'a> CommentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, article_id: i32, user_id: i32) -> Self {
        Self {
            db,
            article_id,
            user_id,
            parent_id: None,
            body: format!("Test comment {}", next_id()),
        }
    }

    pub fn parent(mut self, parent_id: i32) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Builds and inserts the comment entity into the database.
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        let now = Utc::now();
        entity::comment::ActiveModel {
            article_id: ActiveValue::Set(self.article_id),
            user_id: ActiveValue::Set(self.user_id),
            parent_id: ActiveValue::Set(self.parent_id),
            body: ActiveValue::Set(self.body),
            like_count: ActiveValue::Set(0),
            was_edited: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a top-level comment with default values.
pub async fn create_comment(
    db: &DatabaseConnection,
    article_id: i32,
    user_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, article_id, user_id).build().await
}

/// Creates a reply to an existing comment.
pub async fn create_reply(
    db: &DatabaseConnection,
    article_id: i32,
    user_id: i32,
    parent_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, article_id, user_id)
        .parent(parent_id)
        .build()
        .await
}
