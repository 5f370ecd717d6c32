use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, home::HomeDto},
    server::{
        error::AppError,
        service::{article::ArticleService, suggestion::SuggestionService},
        state::AppState,
    },
};

/// Tag for grouping home endpoints in OpenAPI documentation
pub static HOME_TAG: &str = "home";

/// How many of each the front page shows.
const HOME_FEED_LIMIT: u64 = 10;

/// Get the front-page feed: the ten newest articles and suggestions.
#[utoipa::path(
    get,
    path = "/api/home",
    tag = HOME_TAG,
    responses(
        (status = 200, description = "Front-page feed", body = HomeDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_home(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let articles = ArticleService::new(&state.db).latest(HOME_FEED_LIMIT).await?;
    let suggestions = SuggestionService::new(&state.db).latest(HOME_FEED_LIMIT).await?;

    Ok((
        StatusCode::OK,
        Json(HomeDto {
            latest_articles: articles.into_iter().map(|a| a.into_dto()).collect(),
            latest_suggestions: suggestions.into_iter().map(|s| s.into_dto()).collect(),
        }),
    ))
}
