//! Article factory for creating test article entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test articles with customizable fields.
///
/// The author must already exist; pass their id to `new`.
pub struct ArticleFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    title: String,
    content: String,
    references: String,
    based_on_suggestion_id: Option<i32>,
}

impl<'a> ArticleFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            title: format!("Test Article {}", id),
            content: "Lorem ipsum dolor sit amet. ".repeat(60),
            references: "https://example.com/source".to_string(),
            based_on_suggestion_id: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn based_on_suggestion(mut self, suggestion_id: i32) -> Self {
        self.based_on_suggestion_id = Some(suggestion_id);
        self
    }

    /// Builds and inserts the article entity into the database.
    pub async fn build(self) -> Result<entity::article::Model, DbErr> {
        let now = Utc::now();
        let summary: String = self.content.chars().take(150).collect();
        entity::article::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            image: ActiveValue::Set("https://cdn.example.com/image.png".to_string()),
            content_summary: ActiveValue::Set(format!("{}...", summary)),
            references: ActiveValue::Set(self.references),
            based_on_suggestion_id: ActiveValue::Set(self.based_on_suggestion_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an article with default values for the given author.
pub async fn create_article(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::article::Model, DbErr> {
    ArticleFactory::new(db, user_id).build().await
}
