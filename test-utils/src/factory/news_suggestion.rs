//! News suggestion factory for creating test suggestion entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test news suggestions with customizable fields.
pub struct NewsSuggestionFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    source: String,
    title: String,
    content: String,
}

impl<'a> NewsSuggestionFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            source: "https://example.com/news".to_string(),
            title: format!("Interesting story {}", id),
            content: "Something newsworthy happened today.".to_string(),
        }
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Builds and inserts the news suggestion entity into the database.
    pub async fn build(self) -> Result<entity::news_suggestion::Model, DbErr> {
        let now = Utc::now();
        entity::news_suggestion::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            source: ActiveValue::Set(self.source),
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            image: ActiveValue::Set("https://cdn.example.com/news.png".to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a news suggestion with default values for the given author.
pub async fn create_news_suggestion(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::news_suggestion::Model, DbErr> {
    NewsSuggestionFactory::new(db, user_id).build().await
}
