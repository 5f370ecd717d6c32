//! Comment business logic: posting, editing, deletion, likes, and the
//! assembled forest for article pages.

pub mod tree;

use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{article::ArticleRepository, comment::CommentRepository, like::LikeRepository},
    error::{auth::AuthError, AppError},
    model::{
        comment::{Comment, CommentNode, CreateCommentParam},
        user::User,
    },
    service::moderation::{self, Actor},
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Posts a comment on an article, optionally as a reply.
    ///
    /// The parent comment, when given, must exist and belong to the same
    /// article.
    pub async fn create(
        &self,
        actor: &User,
        article_id: i32,
        parent_id: Option<i32>,
        body: String,
    ) -> Result<Comment, AppError> {
        if ArticleRepository::new(self.db)
            .find_by_id(article_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Article not found.".to_string()));
        }

        if !moderation::can_create_content(Actor::from_user(actor)) {
            return Err(
                AuthError::AccessDenied(actor.id, "Banned user tried to comment".to_string())
                    .into(),
            );
        }

        let body = body.trim().to_string();
        if body.is_empty() {
            return Err(AppError::BadRequest("Comment cannot be empty.".to_string()));
        }

        let comment_repo = CommentRepository::new(self.db);

        if let Some(parent_id) = parent_id {
            let Some(parent) = comment_repo.find_by_id(parent_id).await? else {
                return Err(AppError::NotFound("Parent comment not found.".to_string()));
            };
            if parent.article_id != article_id {
                return Err(AppError::BadRequest(
                    "Parent comment belongs to a different article.".to_string(),
                ));
            }
        }

        let entity = comment_repo
            .create(CreateCommentParam {
                article_id,
                user_id: actor.id,
                parent_id,
                body,
            })
            .await?;

        Ok(Comment::from_entity(entity, actor.clone()))
    }

    /// Edits a comment's body. Author only; marks the comment as edited.
    ///
    /// # Returns
    /// - `Ok((comment, liked))` - The updated comment and whether the actor
    ///   has liked it
    pub async fn update(
        &self,
        actor: &User,
        article_id: i32,
        comment_id: i32,
        body: String,
    ) -> Result<(Comment, bool), AppError> {
        let comment = self.resolve(article_id, comment_id).await?;

        if !moderation::can_edit_comment(Actor::from_user(actor), comment.user_id) {
            return Err(AuthError::AccessDenied(
                actor.id,
                "Only the author may edit a comment".to_string(),
            )
            .into());
        }

        let body = body.trim().to_string();
        if body.is_empty() {
            return Err(AppError::BadRequest("Comment cannot be empty.".to_string()));
        }

        let Some(updated) = CommentRepository::new(self.db)
            .update_body(comment_id, body)
            .await?
        else {
            return Err(AppError::NotFound("Comment not found.".to_string()));
        };

        let liked = LikeRepository::new(self.db)
            .liked_comment_ids(actor.id, &[comment_id])
            .await?
            .contains(&comment_id);

        Ok((Comment::from_entity(updated, actor.clone()), liked))
    }

    /// Deletes a comment with its reply subtree. Author, moderator, or
    /// admin.
    pub async fn delete(
        &self,
        actor: &User,
        article_id: i32,
        comment_id: i32,
    ) -> Result<(), AppError> {
        let comment = self.resolve(article_id, comment_id).await?;

        if !moderation::can_delete_comment(Actor::from_user(actor), comment.user_id) {
            return Err(AuthError::AccessDenied(
                actor.id,
                "Not allowed to delete this comment".to_string(),
            )
            .into());
        }

        CommentRepository::new(self.db).delete_tree(comment_id).await?;

        Ok(())
    }

    /// Toggles the actor's like on a comment.
    ///
    /// # Returns
    /// - `Ok((liked, like_count))` - Whether the comment is now liked, and
    ///   its updated counter
    pub async fn toggle_like(
        &self,
        actor: &User,
        article_id: i32,
        comment_id: i32,
    ) -> Result<(bool, i32), AppError> {
        self.resolve(article_id, comment_id).await?;

        if !moderation::can_create_content(Actor::from_user(actor)) {
            return Err(AuthError::AccessDenied(
                actor.id,
                "Banned user tried to like a comment".to_string(),
            )
            .into());
        }

        let liked = LikeRepository::new(self.db)
            .toggle(actor.id, comment_id)
            .await?;

        let like_count = CommentRepository::new(self.db)
            .find_by_id(comment_id)
            .await?
            .map(|comment| comment.like_count)
            .unwrap_or(0);

        Ok((liked, like_count))
    }

    /// Loads an article's comments and assembles the forest, annotated with
    /// the viewer's likes when a viewer is logged in.
    pub async fn forest_for_article(
        &self,
        article_id: i32,
        viewer: Option<&User>,
    ) -> Result<Vec<CommentNode>, AppError> {
        let comments = CommentRepository::new(self.db)
            .find_by_article(article_id)
            .await?;

        let viewer_likes = match viewer {
            Some(user) => {
                let comment_ids: Vec<i32> = comments.iter().map(|c| c.id).collect();
                LikeRepository::new(self.db)
                    .liked_comment_ids(user.id, &comment_ids)
                    .await?
            }
            None => HashSet::new(),
        };

        Ok(tree::assemble_forest(comments, &viewer_likes))
    }

    /// Resolves a comment within an article. A comment reached through the
    /// wrong article reads as not found.
    async fn resolve(
        &self,
        article_id: i32,
        comment_id: i32,
    ) -> Result<entity::comment::Model, AppError> {
        let Some(comment) = CommentRepository::new(self.db).find_by_id(comment_id).await? else {
            return Err(AppError::NotFound("Comment not found.".to_string()));
        };

        if comment.article_id != article_id {
            return Err(AppError::NotFound("Comment not found.".to_string()));
        }

        Ok(comment)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::DbErr;
    use test_utils::{builder::TestBuilder, factory};

    use super::*;

    /// Tests replying to a parent comment that does not exist.
    ///
    /// Verifies that an absent parent reads as a missing resource rather
    /// than a malformed request.
    ///
    /// Expected: AppError::NotFound
    #[tokio::test]
    async fn absent_parent_reads_as_not_found() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_content_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (author, article) = factory::helpers::create_article_with_author(db).await?;
        let actor = User::from_entity(author);

        let err = CommentService::new(db)
            .create(&actor, article.id, Some(9999), "A reply to nothing.".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));

        Ok(())
    }

    /// Tests replying under a parent that lives on another article.
    ///
    /// The parent exists, so the request is malformed rather than aimed at
    /// a missing resource.
    ///
    /// Expected: AppError::BadRequest
    #[tokio::test]
    async fn cross_article_parent_is_a_bad_request() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_content_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (author, article) = factory::helpers::create_article_with_author(db).await?;
        let other_article = factory::article::create_article(db, author.id).await?;
        let parent = factory::comment::create_comment(db, other_article.id, author.id).await?;
        let actor = User::from_entity(author);

        let err = CommentService::new(db)
            .create(&actor, article.id, Some(parent.id), "A misplaced reply.".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::BadRequest(_)));

        Ok(())
    }
}
