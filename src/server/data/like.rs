//! Like data repository.
//!
//! A like is a (user, comment) pair with a denormalized counter on the
//! comment row. The counter is only ever written here, in the same
//! transaction as the like row itself, so the two cannot drift apart.

use std::collections::HashSet;

use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QuerySelect,
    TransactionTrait,
};

pub struct LikeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LikeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Toggles the viewer's like on a comment.
    ///
    /// One transaction: if a like row exists it is deleted and the counter
    /// decremented; otherwise a row is inserted and the counter incremented.
    /// A concurrent duplicate insert fails on the unique (user, comment)
    /// index and rolls back, leaving the counter untouched.
    ///
    /// # Returns
    /// - `Ok(true)` - The comment is now liked by the user
    /// - `Ok(false)` - The like was removed
    /// - `Err(DbErr)` - Database error; nothing was applied
    pub async fn toggle(&self, user_id: i32, comment_id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let existing = entity::prelude::Like::find()
            .filter(entity::like::Column::UserId.eq(user_id))
            .filter(entity::like::Column::CommentId.eq(comment_id))
            .one(&txn)
            .await?;

        let liked = match existing {
            Some(like) => {
                entity::prelude::Like::delete_by_id(like.id).exec(&txn).await?;

                entity::prelude::Comment::update_many()
                    .col_expr(
                        entity::comment::Column::LikeCount,
                        Expr::col(entity::comment::Column::LikeCount).sub(1),
                    )
                    .filter(entity::comment::Column::Id.eq(comment_id))
                    .exec(&txn)
                    .await?;

                false
            }
            None => {
                entity::prelude::Like::insert(entity::like::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    comment_id: ActiveValue::Set(comment_id),
                    ..Default::default()
                })
                .exec(&txn)
                .await?;

                entity::prelude::Comment::update_many()
                    .col_expr(
                        entity::comment::Column::LikeCount,
                        Expr::col(entity::comment::Column::LikeCount).add(1),
                    )
                    .filter(entity::comment::Column::Id.eq(comment_id))
                    .exec(&txn)
                    .await?;

                true
            }
        };

        txn.commit().await?;

        Ok(liked)
    }

    /// Gets the subset of `comment_ids` the user has liked.
    ///
    /// Supplies the viewer-likes set the comment forest is annotated with.
    pub async fn liked_comment_ids(
        &self,
        user_id: i32,
        comment_ids: &[i32],
    ) -> Result<HashSet<i32>, DbErr> {
        if comment_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let ids: Vec<i32> = entity::prelude::Like::find()
            .select_only()
            .column(entity::like::Column::CommentId)
            .filter(entity::like::Column::UserId.eq(user_id))
            .filter(entity::like::Column::CommentId.is_in(comment_ids.to_vec()))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(ids.into_iter().collect())
    }
}
