use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260815_000001_create_user_table::User, m20260815_000004_create_comment_table::Comment,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Like::Table)
                    .if_not_exists()
                    .col(pk_auto(Like::Id))
                    .col(integer(Like::UserId))
                    .col(integer(Like::CommentId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_like_user_id")
                            .from(Like::Table, Like::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_like_comment_id")
                            .from(Like::Table, Like::CommentId)
                            .to(Comment::Table, Comment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One like per (user, comment) pair. Concurrent duplicate inserts
        // fail on this index instead of double-counting.
        manager
            .create_index(
                Index::create()
                    .name("idx_like_user_id_comment_id")
                    .table(Like::Table)
                    .col(Like::UserId)
                    .col(Like::CommentId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_like_user_id_comment_id")
                    .table(Like::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Like::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Like {
    Table,
    Id,
    UserId,
    CommentId,
}
