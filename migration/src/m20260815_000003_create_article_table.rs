use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260815_000001_create_user_table::User,
    m20260815_000002_create_news_suggestion_table::NewsSuggestion,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Article::Table)
                    .if_not_exists()
                    .col(pk_auto(Article::Id))
                    .col(integer(Article::UserId))
                    .col(string_len(Article::Title, 100))
                    .col(text(Article::Content))
                    .col(string(Article::Image))
                    .col(string_len(Article::ContentSummary, 200))
                    .col(text(Article::References))
                    .col(integer_null(Article::BasedOnSuggestionId))
                    .col(
                        timestamp(Article::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Article::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_user_id")
                            .from(Article::Table, Article::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_based_on_suggestion_id")
                            .from(Article::Table, Article::BasedOnSuggestionId)
                            .to(NewsSuggestion::Table, NewsSuggestion::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Article::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Article {
    Table,
    Id,
    UserId,
    Title,
    Content,
    Image,
    ContentSummary,
    References,
    BasedOnSuggestionId,
    CreatedAt,
    UpdatedAt,
}
