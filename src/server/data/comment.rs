//! Comment data repository.
//!
//! Comments are stored flat with an optional parent id; the service layer
//! assembles the forest. Deleting a comment removes its whole subtree and
//! every like on it in one transaction.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::{
    comment::{Comment, CreateCommentParam},
    user::User,
};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateCommentParam) -> Result<entity::comment::Model, DbErr> {
        entity::prelude::Comment::insert(entity::comment::ActiveModel {
            article_id: ActiveValue::Set(param.article_id),
            user_id: ActiveValue::Set(param.user_id),
            parent_id: ActiveValue::Set(param.parent_id),
            body: ActiveValue::Set(param.body),
            like_count: ActiveValue::Set(0),
            was_edited: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        comment_id: i32,
    ) -> Result<Option<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find_by_id(comment_id)
            .one(self.db)
            .await
    }

    /// Gets all comments of an article joined with their authors, oldest
    /// first. This is the flat input the forest is assembled from; sibling
    /// order downstream is exactly this query's order.
    pub async fn find_by_article(&self, article_id: i32) -> Result<Vec<Comment>, DbErr> {
        let rows = entity::prelude::Comment::find()
            .find_also_related(entity::prelude::User)
            .filter(entity::comment::Column::ArticleId.eq(article_id))
            .order_by_asc(entity::comment::Column::CreatedAt)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(comment, author)| {
                author.map(|a| Comment::from_entity(comment, User::from_entity(a)))
            })
            .collect())
    }

    /// Replaces a comment's body and marks it as edited.
    pub async fn update_body(
        &self,
        comment_id: i32,
        body: String,
    ) -> Result<Option<entity::comment::Model>, DbErr> {
        let Some(entity) = self.find_by_id(comment_id).await? else {
            return Ok(None);
        };

        let mut active: entity::comment::ActiveModel = entity.into();
        active.body = ActiveValue::Set(body);
        active.was_edited = ActiveValue::Set(true);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = entity::prelude::Comment::update(active)
            .exec(self.db)
            .await?;

        Ok(Some(updated))
    }

    /// Deletes a comment, its reply subtree, and all likes on those
    /// comments, in one transaction.
    pub async fn delete_tree(&self, comment_id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        delete_comment_trees(&txn, vec![comment_id]).await?;

        txn.commit().await?;

        Ok(())
    }

    pub async fn count_by_author(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::UserId.eq(user_id))
            .count(self.db)
            .await
    }
}

/// Deletes the subtrees rooted at `roots`: walks the parent links level by
/// level to collect every descendant, then removes likes and comment rows
/// for the whole set.
pub(crate) async fn delete_comment_trees<C: ConnectionTrait>(
    conn: &C,
    roots: Vec<i32>,
) -> Result<(), DbErr> {
    if roots.is_empty() {
        return Ok(());
    }

    let mut all_ids = roots.clone();
    let mut frontier = roots;

    while !frontier.is_empty() {
        let children: Vec<i32> = entity::prelude::Comment::find()
            .select_only()
            .column(entity::comment::Column::Id)
            .filter(entity::comment::Column::ParentId.is_in(frontier))
            .into_tuple()
            .all(conn)
            .await?;

        all_ids.extend(children.iter().copied());
        frontier = children;
    }

    entity::prelude::Like::delete_many()
        .filter(entity::like::Column::CommentId.is_in(all_ids.clone()))
        .exec(conn)
        .await?;

    entity::prelude::Comment::delete_many()
        .filter(entity::comment::Column::Id.is_in(all_ids))
        .exec(conn)
        .await?;

    Ok(())
}

/// Deletes all comments of the given articles together with their likes.
pub(crate) async fn delete_article_comments<C: ConnectionTrait>(
    conn: &C,
    article_ids: Vec<i32>,
) -> Result<(), DbErr> {
    if article_ids.is_empty() {
        return Ok(());
    }

    let comment_ids: Vec<i32> = entity::prelude::Comment::find()
        .select_only()
        .column(entity::comment::Column::Id)
        .filter(entity::comment::Column::ArticleId.is_in(article_ids.clone()))
        .into_tuple()
        .all(conn)
        .await?;

    entity::prelude::Like::delete_many()
        .filter(entity::like::Column::CommentId.is_in(comment_ids))
        .exec(conn)
        .await?;

    entity::prelude::Comment::delete_many()
        .filter(entity::comment::Column::ArticleId.is_in(article_ids))
        .exec(conn)
        .await?;

    Ok(())
}

/// Decrements the like counter of every listed comment by one.
pub(crate) async fn decrement_like_counts<C: ConnectionTrait>(
    conn: &C,
    comment_ids: Vec<i32>,
) -> Result<(), DbErr> {
    if comment_ids.is_empty() {
        return Ok(());
    }

    entity::prelude::Comment::update_many()
        .col_expr(
            entity::comment::Column::LikeCount,
            Expr::col(entity::comment::Column::LikeCount).sub(1),
        )
        .filter(entity::comment::Column::Id.is_in(comment_ids))
        .exec(conn)
        .await?;

    Ok(())
}
