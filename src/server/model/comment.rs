//! Comment domain models and parameter types.

use chrono::{DateTime, Utc};

use crate::{
    model::comment::{CommentAuthorDto, CommentNodeDto},
    server::model::user::User,
};

/// Flat comment row joined with its author, as loaded from the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub article_id: i32,
    pub parent_id: Option<i32>,
    pub body: String,
    pub like_count: i32,
    pub was_edited: bool,
    pub author: User,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model, author: User) -> Self {
        Self {
            id: entity.id,
            article_id: entity.article_id,
            parent_id: entity.parent_id,
            body: entity.body,
            like_count: entity.like_count,
            was_edited: entity.was_edited,
            author,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// One node of the assembled comment forest.
///
/// Children are nested in the order the underlying flat list was loaded in.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentNode {
    pub id: i32,
    pub author_id: i32,
    pub author_username: String,
    pub author_avatar: Option<String>,
    pub body: String,
    pub like_count: i32,
    pub liked_by_viewer: bool,
    pub was_edited: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub children: Vec<CommentNode>,
}

impl CommentNode {
    pub fn into_dto(self) -> CommentNodeDto {
        CommentNodeDto {
            id: self.id,
            author: CommentAuthorDto {
                id: self.author_id,
                username: self.author_username,
                avatar: self.author_avatar,
            },
            body: self.body,
            like_count: self.like_count,
            liked_by_viewer: self.liked_by_viewer,
            was_edited: self.was_edited,
            created_at: self.created_at,
            updated_at: self.updated_at,
            children: self.children.into_iter().map(|c| c.into_dto()).collect(),
        }
    }
}

/// Parameters for posting a comment.
#[derive(Debug, Clone)]
pub struct CreateCommentParam {
    pub article_id: i32,
    pub user_id: i32,
    pub parent_id: Option<i32>,
    pub body: String,
}
