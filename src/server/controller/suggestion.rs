use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        suggestion::{
            CreateSuggestionDto, PaginatedSuggestionsDto, SuggestionDto, UpdateSuggestionDto,
        },
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::suggestion::SuggestionService,
        state::AppState,
    },
};

/// Tag for grouping suggestion endpoints in OpenAPI documentation
pub static SUGGESTION_TAG: &str = "suggestion";

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

/// Submit a news suggestion.
///
/// # Access Control
/// - Any logged-in, non-banned user
#[utoipa::path(
    post,
    path = "/api/suggestions",
    tag = SUGGESTION_TAG,
    request_body = CreateSuggestionDto,
    responses(
        (status = 201, description = "Suggestion submitted", body = SuggestionDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Banned", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_suggestion(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateSuggestionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let suggestion = SuggestionService::new(&state.db)
        .create(
            &user,
            payload.source,
            payload.title,
            payload.content,
            payload.image,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(suggestion.into_dto())))
}

/// Get a page of suggestions, newest first.
#[utoipa::path(
    get,
    path = "/api/suggestions",
    tag = SUGGESTION_TAG,
    params(
        ("page" = u64, Query, description = "Zero-indexed page number"),
        ("entries" = u64, Query, description = "Suggestions per page")
    ),
    responses(
        (status = 200, description = "Page of suggestions", body = PaginatedSuggestionsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_suggestions(
    State(state): State<AppState>,
    params: Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let suggestions = SuggestionService::new(&state.db)
        .list(params.page, Some(params.entries))
        .await?;

    Ok((StatusCode::OK, Json(suggestions.into_dto())))
}

/// Get a single suggestion.
#[utoipa::path(
    get,
    path = "/api/suggestions/{id}",
    tag = SUGGESTION_TAG,
    params(
        ("id" = i32, Path, description = "Suggestion id")
    ),
    responses(
        (status = 200, description = "The suggestion", body = SuggestionDto),
        (status = 404, description = "Suggestion not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_suggestion(
    State(state): State<AppState>,
    Path(suggestion_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let suggestion = SuggestionService::new(&state.db).get(suggestion_id).await?;

    Ok((StatusCode::OK, Json(suggestion.into_dto())))
}

/// Rewrite a suggestion.
///
/// # Access Control
/// - `Moderator` or `Admin`
#[utoipa::path(
    put,
    path = "/api/suggestions/{id}",
    tag = SUGGESTION_TAG,
    params(
        ("id" = i32, Path, description = "Suggestion id")
    ),
    request_body = UpdateSuggestionDto,
    responses(
        (status = 200, description = "Suggestion updated", body = SuggestionDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a moderator or admin", body = ErrorDto),
        (status = 404, description = "Suggestion not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_suggestion(
    State(state): State<AppState>,
    session: Session,
    Path(suggestion_id): Path<i32>,
    Json(payload): Json<UpdateSuggestionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let suggestion = SuggestionService::new(&state.db)
        .update(
            &user,
            suggestion_id,
            payload.source,
            payload.title,
            payload.content,
            payload.image,
        )
        .await?;

    Ok((StatusCode::OK, Json(suggestion.into_dto())))
}

/// Delete a suggestion and the articles based on it.
///
/// # Access Control
/// - `Moderator` or `Admin`
#[utoipa::path(
    delete,
    path = "/api/suggestions/{id}",
    tag = SUGGESTION_TAG,
    params(
        ("id" = i32, Path, description = "Suggestion id")
    ),
    responses(
        (status = 204, description = "Suggestion deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a moderator or admin", body = ErrorDto),
        (status = 404, description = "Suggestion not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_suggestion(
    State(state): State<AppState>,
    session: Session,
    Path(suggestion_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    SuggestionService::new(&state.db)
        .delete(&user, suggestion_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
