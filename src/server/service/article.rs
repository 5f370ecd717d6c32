//! Article business logic and validation.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{article::ArticleRepository, suggestion::SuggestionRepository},
    error::{auth::AuthError, AppError},
    model::{
        article::{
            Article, ArticleSummary, CreateArticleParam, PaginatedArticles, UpdateArticleParam,
        },
        user::User,
    },
    service::moderation::{self, Actor},
};

/// Titles must be longer than this many characters.
const TITLE_MIN_LEN: usize = 10;
/// Matches the title column length.
const TITLE_MAX_LEN: usize = 100;
/// Article content length bounds, inclusive.
const CONTENT_MIN_LEN: usize = 1500;
const CONTENT_MAX_LEN: usize = 2500;
/// Length of the derived listing summary, before the ellipsis.
const SUMMARY_LEN: usize = 150;

const DEFAULT_PER_PAGE: u64 = 10;
const MAX_PER_PAGE: u64 = 50;

pub struct ArticleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Publishes an article. Open to any authenticated, non-banned user.
    pub async fn create(
        &self,
        actor: &User,
        title: String,
        content: String,
        image: String,
        references: Vec<String>,
        based_on_suggestion_id: Option<i32>,
    ) -> Result<Article, AppError> {
        if !moderation::can_create_content(Actor::from_user(actor)) {
            return Err(AuthError::AccessDenied(
                actor.id,
                "Banned user tried to publish an article".to_string(),
            )
            .into());
        }

        validate(&title, &content, &image, &references)?;

        if let Some(suggestion_id) = based_on_suggestion_id {
            if SuggestionRepository::new(self.db)
                .find_by_id(suggestion_id)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound(
                    "Referenced suggestion not found.".to_string(),
                ));
            }
        }

        let entity = ArticleRepository::new(self.db)
            .create(CreateArticleParam {
                user_id: actor.id,
                content_summary: summarize(&content),
                title,
                content,
                image,
                references,
                based_on_suggestion_id,
            })
            .await?;

        Ok(Article::from_entity(entity, actor.clone()))
    }

    pub async fn get(&self, article_id: i32) -> Result<Article, AppError> {
        let Some(article) = ArticleRepository::new(self.db).find_by_id(article_id).await? else {
            return Err(AppError::NotFound("Article not found.".to_string()));
        };

        Ok(article)
    }

    pub async fn list(
        &self,
        page: u64,
        per_page: Option<u64>,
    ) -> Result<PaginatedArticles, AppError> {
        let per_page = per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE);

        Ok(ArticleRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?)
    }

    /// Newest article summaries for the front page.
    pub async fn latest(&self, limit: u64) -> Result<Vec<ArticleSummary>, AppError> {
        Ok(ArticleRepository::new(self.db).latest_summaries(limit).await?)
    }

    /// Rewrites an article. Moderators and admins only.
    pub async fn update(
        &self,
        actor: &User,
        article_id: i32,
        title: String,
        content: String,
        image: String,
        references: Vec<String>,
    ) -> Result<Article, AppError> {
        self.get(article_id).await?;

        if !moderation::can_manage_content(Actor::from_user(actor)) {
            return Err(AuthError::AccessDenied(
                actor.id,
                "Not allowed to update articles".to_string(),
            )
            .into());
        }

        validate(&title, &content, &image, &references)?;

        let updated = ArticleRepository::new(self.db)
            .update(
                article_id,
                UpdateArticleParam {
                    content_summary: summarize(&content),
                    title,
                    content,
                    image,
                    references,
                },
            )
            .await?;

        updated.ok_or_else(|| AppError::NotFound("Article not found.".to_string()))
    }

    /// Deletes an article and everything attached to it. Moderators and
    /// admins only.
    pub async fn delete(&self, actor: &User, article_id: i32) -> Result<(), AppError> {
        self.get(article_id).await?;

        if !moderation::can_manage_content(Actor::from_user(actor)) {
            return Err(AuthError::AccessDenied(
                actor.id,
                "Not allowed to delete articles".to_string(),
            )
            .into());
        }

        ArticleRepository::new(self.db).delete_cascade(article_id).await?;

        Ok(())
    }
}

fn validate(
    title: &str,
    content: &str,
    image: &str,
    references: &[String],
) -> Result<(), AppError> {
    let title_len = title.trim().chars().count();
    if title_len <= TITLE_MIN_LEN {
        return Err(AppError::BadRequest(format!(
            "Title must be longer than {} characters.",
            TITLE_MIN_LEN
        )));
    }
    if title_len > TITLE_MAX_LEN {
        return Err(AppError::BadRequest(format!(
            "Title cannot be longer than {} characters.",
            TITLE_MAX_LEN
        )));
    }

    let content_len = content.chars().count();
    if content_len < CONTENT_MIN_LEN || content_len > CONTENT_MAX_LEN {
        return Err(AppError::BadRequest(format!(
            "Article content must be between {} and {} characters.",
            CONTENT_MIN_LEN, CONTENT_MAX_LEN
        )));
    }

    if image.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Article image is required.".to_string(),
        ));
    }

    if references.is_empty() || references.iter().any(|r| r.trim().is_empty()) {
        return Err(AppError::BadRequest(
            "At least one non-empty reference is required.".to_string(),
        ));
    }

    Ok(())
}

/// Derives the listing summary: the first 150 characters of the content
/// followed by an ellipsis.
fn summarize(content: &str) -> String {
    let mut summary: String = content.chars().take(SUMMARY_LEN).collect();
    summary.push_str("...");
    summary
}
