//! News suggestion business logic and validation.

use sea_orm::DatabaseConnection;
use url::Url;

use crate::server::{
    data::suggestion::SuggestionRepository,
    error::{auth::AuthError, AppError},
    model::{
        suggestion::{
            CreateSuggestionParam, NewsSuggestion, PaginatedSuggestions, UpdateSuggestionParam,
        },
        user::User,
    },
    service::moderation::{self, Actor},
};

/// Titles must be longer than this many characters.
const TITLE_MIN_LEN: usize = 10;
/// Suggestion content length bounds, inclusive.
const CONTENT_MIN_LEN: usize = 10;
const CONTENT_MAX_LEN: usize = 100;

const DEFAULT_PER_PAGE: u64 = 10;
const MAX_PER_PAGE: u64 = 50;

pub struct SuggestionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SuggestionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits a suggestion. Open to any authenticated, non-banned user.
    pub async fn create(
        &self,
        actor: &User,
        source: String,
        title: String,
        content: String,
        image: String,
    ) -> Result<NewsSuggestion, AppError> {
        if !moderation::can_create_content(Actor::from_user(actor)) {
            return Err(AuthError::AccessDenied(
                actor.id,
                "Banned user tried to submit a suggestion".to_string(),
            )
            .into());
        }

        validate(&source, &title, &content, &image)?;

        let entity = SuggestionRepository::new(self.db)
            .create(CreateSuggestionParam {
                user_id: actor.id,
                source,
                title,
                content,
                image,
            })
            .await?;

        Ok(NewsSuggestion::from_entity(entity, actor.clone()))
    }

    pub async fn get(&self, suggestion_id: i32) -> Result<NewsSuggestion, AppError> {
        let Some(suggestion) = SuggestionRepository::new(self.db)
            .find_by_id(suggestion_id)
            .await?
        else {
            return Err(AppError::NotFound("Suggestion not found.".to_string()));
        };

        Ok(suggestion)
    }

    pub async fn list(
        &self,
        page: u64,
        per_page: Option<u64>,
    ) -> Result<PaginatedSuggestions, AppError> {
        let per_page = per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE);

        Ok(SuggestionRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?)
    }

    /// Newest suggestions for the front page.
    pub async fn latest(&self, limit: u64) -> Result<Vec<NewsSuggestion>, AppError> {
        Ok(SuggestionRepository::new(self.db).latest(limit).await?)
    }

    /// Rewrites a suggestion. Moderators and admins only, same policy as
    /// deletion.
    pub async fn update(
        &self,
        actor: &User,
        suggestion_id: i32,
        source: String,
        title: String,
        content: String,
        image: String,
    ) -> Result<NewsSuggestion, AppError> {
        self.get(suggestion_id).await?;

        if !moderation::can_manage_content(Actor::from_user(actor)) {
            return Err(AuthError::AccessDenied(
                actor.id,
                "Not allowed to update suggestions".to_string(),
            )
            .into());
        }

        validate(&source, &title, &content, &image)?;

        let updated = SuggestionRepository::new(self.db)
            .update(
                suggestion_id,
                UpdateSuggestionParam {
                    source,
                    title,
                    content,
                    image,
                },
            )
            .await?;

        updated.ok_or_else(|| AppError::NotFound("Suggestion not found.".to_string()))
    }

    /// Deletes a suggestion and the articles based on it. Moderators and
    /// admins only.
    pub async fn delete(&self, actor: &User, suggestion_id: i32) -> Result<(), AppError> {
        self.get(suggestion_id).await?;

        if !moderation::can_manage_content(Actor::from_user(actor)) {
            return Err(AuthError::AccessDenied(
                actor.id,
                "Not allowed to delete suggestions".to_string(),
            )
            .into());
        }

        SuggestionRepository::new(self.db)
            .delete_cascade(suggestion_id)
            .await?;

        Ok(())
    }
}

fn validate(source: &str, title: &str, content: &str, image: &str) -> Result<(), AppError> {
    validate_https_url(source, "Source")?;
    validate_https_url(image, "Image")?;

    if title.trim().chars().count() <= TITLE_MIN_LEN {
        return Err(AppError::BadRequest(format!(
            "Title must be longer than {} characters.",
            TITLE_MIN_LEN
        )));
    }

    let content_len = content.chars().count();
    if content_len < CONTENT_MIN_LEN || content_len > CONTENT_MAX_LEN {
        return Err(AppError::BadRequest(format!(
            "Suggestion content must be between {} and {} characters.",
            CONTENT_MIN_LEN, CONTENT_MAX_LEN
        )));
    }

    Ok(())
}

fn validate_https_url(value: &str, field: &str) -> Result<(), AppError> {
    let parsed = Url::parse(value)
        .map_err(|_| AppError::BadRequest(format!("{} must be a valid URL.", field)))?;

    if parsed.scheme() != "https" {
        return Err(AppError::BadRequest(format!(
            "{} must be an https URL.",
            field
        )));
    }

    Ok(())
}
