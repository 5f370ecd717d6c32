use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{comment::CommentNodeDto, user::UserDto};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateArticleDto {
    pub title: String,
    pub content: String,
    pub image: String,
    pub references: Vec<String>,
    pub based_on_suggestion_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateArticleDto {
    pub title: String,
    pub content: String,
    pub image: String,
    pub references: Vec<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ArticleDto {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub image: String,
    pub references: Vec<String>,
    pub author: UserDto,
    pub based_on_suggestion_id: Option<i32>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: DateTime<Utc>,
}

/// Listing entry: the summary stands in for the full content.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ArticleSummaryDto {
    pub id: i32,
    pub title: String,
    pub content_summary: String,
    pub image: String,
    pub author: UserDto,
    pub comment_count: u64,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

/// Article detail page payload: the article plus its comment forest,
/// annotated with the viewer's likes.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ArticleWithCommentsDto {
    pub article: ArticleDto,
    pub comments: Vec<CommentNodeDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedArticlesDto {
    pub articles: Vec<ArticleSummaryDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
