//! Article domain models and parameter types.

use chrono::{DateTime, Utc};

use crate::{
    model::article::{ArticleDto, ArticleSummaryDto, PaginatedArticlesDto},
    server::model::user::User,
};

/// Published article with its author.
///
/// `references` is a list in the domain model; the entity stores it as a
/// comma-separated string.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub image: String,
    pub content_summary: String,
    pub references: Vec<String>,
    pub author: User,
    pub based_on_suggestion_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn from_entity(entity: entity::article::Model, author: User) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            content: entity.content,
            image: entity.image,
            content_summary: entity.content_summary,
            references: split_references(&entity.references),
            author,
            based_on_suggestion_id: entity.based_on_suggestion_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ArticleDto {
        ArticleDto {
            id: self.id,
            title: self.title,
            content: self.content,
            image: self.image,
            references: self.references,
            author: self.author.into_dto(),
            based_on_suggestion_id: self.based_on_suggestion_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Listing entry for an article, with its comment count.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleSummary {
    pub id: i32,
    pub title: String,
    pub content_summary: String,
    pub image: String,
    pub author: User,
    pub comment_count: u64,
    pub created_at: DateTime<Utc>,
}

impl ArticleSummary {
    pub fn from_entity(
        entity: entity::article::Model,
        author: User,
        comment_count: u64,
    ) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            content_summary: entity.content_summary,
            image: entity.image,
            author,
            comment_count,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ArticleSummaryDto {
        ArticleSummaryDto {
            id: self.id,
            title: self.title,
            content_summary: self.content_summary,
            image: self.image,
            author: self.author.into_dto(),
            comment_count: self.comment_count,
            created_at: self.created_at,
        }
    }
}

/// Paginated collection of article summaries.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedArticles {
    pub articles: Vec<ArticleSummary>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedArticles {
    pub fn into_dto(self) -> PaginatedArticlesDto {
        PaginatedArticlesDto {
            articles: self.articles.into_iter().map(|a| a.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Parameters for creating an article. Validated by the service layer.
#[derive(Debug, Clone)]
pub struct CreateArticleParam {
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub image: String,
    pub content_summary: String,
    pub references: Vec<String>,
    pub based_on_suggestion_id: Option<i32>,
}

/// Parameters for updating an article's content.
#[derive(Debug, Clone)]
pub struct UpdateArticleParam {
    pub title: String,
    pub content: String,
    pub image: String,
    pub content_summary: String,
    pub references: Vec<String>,
}

/// Splits the stored comma-separated reference list.
pub fn split_references(stored: &str) -> Vec<String> {
    stored
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Joins a reference list into its storage form.
pub fn join_references(references: &[String]) -> String {
    references.join(",")
}
