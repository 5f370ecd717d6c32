use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Author identity embedded in every comment node.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CommentAuthorDto {
    pub id: i32,
    pub username: String,
    pub avatar: Option<String>,
}

/// One node of the comment forest. Replies are nested in `children`,
/// preserving the order the comments were written in.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CommentNodeDto {
    pub id: i32,
    pub author: CommentAuthorDto,
    pub body: String,
    pub like_count: i32,
    pub liked_by_viewer: bool,
    pub was_edited: bool,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: DateTime<Utc>,
    pub children: Vec<CommentNodeDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateCommentDto {
    pub body: String,
    #[serde(default)]
    pub parent_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateCommentDto {
    pub body: String,
}

/// Result of a like toggle: whether the viewer now likes the comment, and
/// the comment's updated counter.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LikeToggleDto {
    pub liked: bool,
    pub like_count: i32,
}
