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
        article::{
            ArticleDto, ArticleWithCommentsDto, CreateArticleDto, PaginatedArticlesDto,
            UpdateArticleDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::{article::ArticleService, comment::CommentService},
        state::AppState,
    },
};

/// Tag for grouping article endpoints in OpenAPI documentation
pub static ARTICLE_TAG: &str = "article";

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

/// Publish a new article.
///
/// # Access Control
/// - Any logged-in, non-banned user
#[utoipa::path(
    post,
    path = "/api/articles",
    tag = ARTICLE_TAG,
    request_body = CreateArticleDto,
    responses(
        (status = 201, description = "Article published", body = ArticleDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Banned", body = ErrorDto),
        (status = 404, description = "Referenced suggestion not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_article(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateArticleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let article = ArticleService::new(&state.db)
        .create(
            &user,
            payload.title,
            payload.content,
            payload.image,
            payload.references,
            payload.based_on_suggestion_id,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(article.into_dto())))
}

/// Get a page of article summaries, newest first.
#[utoipa::path(
    get,
    path = "/api/articles",
    tag = ARTICLE_TAG,
    params(
        ("page" = u64, Query, description = "Zero-indexed page number"),
        ("entries" = u64, Query, description = "Articles per page")
    ),
    responses(
        (status = 200, description = "Page of article summaries", body = PaginatedArticlesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_articles(
    State(state): State<AppState>,
    params: Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let articles = ArticleService::new(&state.db)
        .list(params.page, Some(params.entries))
        .await?;

    Ok((StatusCode::OK, Json(articles.into_dto())))
}

/// Get an article with its assembled comment forest.
///
/// Open to everyone; when the viewer is logged in, each comment carries
/// whether they liked it.
#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    tag = ARTICLE_TAG,
    params(
        ("id" = i32, Path, description = "Article id")
    ),
    responses(
        (status = 200, description = "Article with comments", body = ArticleWithCommentsDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article(
    State(state): State<AppState>,
    session: Session,
    Path(article_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).optional().await?;

    let article = ArticleService::new(&state.db).get(article_id).await?;
    let comments = CommentService::new(&state.db)
        .forest_for_article(article_id, viewer.as_ref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(ArticleWithCommentsDto {
            article: article.into_dto(),
            comments: comments.into_iter().map(|c| c.into_dto()).collect(),
        }),
    ))
}

/// Rewrite an article.
///
/// # Access Control
/// - `Moderator` or `Admin`
#[utoipa::path(
    put,
    path = "/api/articles/{id}",
    tag = ARTICLE_TAG,
    params(
        ("id" = i32, Path, description = "Article id")
    ),
    request_body = UpdateArticleDto,
    responses(
        (status = 200, description = "Article updated", body = ArticleDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a moderator or admin", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_article(
    State(state): State<AppState>,
    session: Session,
    Path(article_id): Path<i32>,
    Json(payload): Json<UpdateArticleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let article = ArticleService::new(&state.db)
        .update(
            &user,
            article_id,
            payload.title,
            payload.content,
            payload.image,
            payload.references,
        )
        .await?;

    Ok((StatusCode::OK, Json(article.into_dto())))
}

/// Delete an article together with its comments and their likes.
///
/// # Access Control
/// - `Moderator` or `Admin`
#[utoipa::path(
    delete,
    path = "/api/articles/{id}",
    tag = ARTICLE_TAG,
    params(
        ("id" = i32, Path, description = "Article id")
    ),
    responses(
        (status = 204, description = "Article deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a moderator or admin", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_article(
    State(state): State<AppState>,
    session: Session,
    Path(article_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    ArticleService::new(&state.db).delete(&user, article_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
