use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentNodeDto, CreateCommentDto, LikeToggleDto, UpdateCommentDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::comment::{Comment, CommentNode},
        service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// Renders a single comment as a childless node, for create/update
/// responses.
fn node_dto(comment: Comment, liked_by_viewer: bool) -> CommentNodeDto {
    CommentNode {
        id: comment.id,
        author_id: comment.author.id,
        author_username: comment.author.username().to_string(),
        author_avatar: comment.author.discord_avatar.clone(),
        body: comment.body,
        like_count: comment.like_count,
        liked_by_viewer,
        was_edited: comment.was_edited,
        created_at: comment.created_at,
        updated_at: comment.updated_at,
        children: Vec::new(),
    }
    .into_dto()
}

/// Post a comment on an article, optionally as a reply.
///
/// # Access Control
/// - Any logged-in, non-banned user
#[utoipa::path(
    post,
    path = "/api/articles/{id}/comments",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Article id")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment posted", body = CommentNodeDto),
        (status = 400, description = "Empty body or parent on another article", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Banned", body = ErrorDto),
        (status = 404, description = "Article or parent comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    session: Session,
    Path(article_id): Path<i32>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let comment = CommentService::new(&state.db)
        .create(&user, article_id, payload.parent_id, payload.body)
        .await?;

    Ok((StatusCode::CREATED, Json(node_dto(comment, false))))
}

/// Edit a comment's body.
///
/// # Access Control
/// - The comment's author only
#[utoipa::path(
    put,
    path = "/api/articles/{id}/comments/{cid}",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Article id"),
        ("cid" = i32, Path, description = "Comment id")
    ),
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Comment updated", body = CommentNodeDto),
        (status = 400, description = "Empty body", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_comment(
    State(state): State<AppState>,
    session: Session,
    Path((article_id, comment_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let (comment, liked) = CommentService::new(&state.db)
        .update(&user, article_id, comment_id, payload.body)
        .await?;

    Ok((StatusCode::OK, Json(node_dto(comment, liked))))
}

/// Delete a comment together with its reply subtree.
///
/// # Access Control
/// - The comment's author, a `Moderator`, or an `Admin`
#[utoipa::path(
    delete,
    path = "/api/articles/{id}/comments/{cid}",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Article id"),
        ("cid" = i32, Path, description = "Comment id")
    ),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    session: Session,
    Path((article_id, comment_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    CommentService::new(&state.db)
        .delete(&user, article_id, comment_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Toggle the viewer's like on a comment.
///
/// Liking an already-liked comment removes the like.
///
/// # Access Control
/// - Any logged-in, non-banned user
#[utoipa::path(
    post,
    path = "/api/articles/{id}/comments/{cid}/likes",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Article id"),
        ("cid" = i32, Path, description = "Comment id")
    ),
    responses(
        (status = 200, description = "New like state and counter", body = LikeToggleDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Banned", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_like(
    State(state): State<AppState>,
    session: Session,
    Path((article_id, comment_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let (liked, like_count) = CommentService::new(&state.db)
        .toggle_like(&user, article_id, comment_id)
        .await?;

    Ok((StatusCode::OK, Json(LikeToggleDto { liked, like_count })))
}
