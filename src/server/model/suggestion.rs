//! News suggestion domain models and parameter types.

use chrono::{DateTime, Utc};

use crate::{
    model::suggestion::{PaginatedSuggestionsDto, SuggestionDto},
    server::model::user::User,
};

/// Reader-submitted news suggestion with its author.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsSuggestion {
    pub id: i32,
    pub source: String,
    pub title: String,
    pub content: String,
    pub image: String,
    pub author: User,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewsSuggestion {
    pub fn from_entity(entity: entity::news_suggestion::Model, author: User) -> Self {
        Self {
            id: entity.id,
            source: entity.source,
            title: entity.title,
            content: entity.content,
            image: entity.image,
            author,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> SuggestionDto {
        SuggestionDto {
            id: self.id,
            source: self.source,
            title: self.title,
            content: self.content,
            image: self.image,
            author: self.author.into_dto(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Paginated collection of suggestions.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedSuggestions {
    pub suggestions: Vec<NewsSuggestion>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedSuggestions {
    pub fn into_dto(self) -> PaginatedSuggestionsDto {
        PaginatedSuggestionsDto {
            suggestions: self.suggestions.into_iter().map(|s| s.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Parameters for submitting a suggestion. Validated by the service layer.
#[derive(Debug, Clone)]
pub struct CreateSuggestionParam {
    pub user_id: i32,
    pub source: String,
    pub title: String,
    pub content: String,
    pub image: String,
}

/// Parameters for updating a suggestion.
#[derive(Debug, Clone)]
pub struct UpdateSuggestionParam {
    pub source: String,
    pub title: String,
    pub content: String,
    pub image: String,
}
