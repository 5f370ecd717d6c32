use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_uniq(User::DiscordId))
                    .col(string_uniq(User::DiscordUsername))
                    .col(string_uniq(User::DiscordEmail))
                    .col(string_null(User::DiscordAvatar))
                    .col(string_len_null(User::DisplayName, 20).unique_key())
                    .col(string_len(User::Biography, 150).default(""))
                    .col(string_len(User::Role, 16).default("reader"))
                    .col(boolean(User::Banned).default(false))
                    .col(
                        timestamp(User::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(User::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    DiscordId,
    DiscordUsername,
    DiscordEmail,
    DiscordAvatar,
    DisplayName,
    Biography,
    Role,
    Banned,
    CreatedAt,
    UpdatedAt,
}
