use sea_orm_migration::{prelude::*, schema::*};

use super::m20260815_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NewsSuggestion::Table)
                    .if_not_exists()
                    .col(pk_auto(NewsSuggestion::Id))
                    .col(integer(NewsSuggestion::UserId))
                    .col(string(NewsSuggestion::Source))
                    .col(string_len(NewsSuggestion::Title, 100))
                    .col(text(NewsSuggestion::Content))
                    .col(string(NewsSuggestion::Image))
                    .col(
                        timestamp(NewsSuggestion::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(NewsSuggestion::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_news_suggestion_user_id")
                            .from(NewsSuggestion::Table, NewsSuggestion::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NewsSuggestion::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum NewsSuggestion {
    Table,
    Id,
    UserId,
    Source,
    Title,
    Content,
    Image,
    CreatedAt,
    UpdatedAt,
}
