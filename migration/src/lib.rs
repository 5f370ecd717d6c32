pub use sea_orm_migration::prelude::*;

mod m20260815_000001_create_user_table;
mod m20260815_000002_create_news_suggestion_table;
mod m20260815_000003_create_article_table;
mod m20260815_000004_create_comment_table;
mod m20260815_000005_create_like_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260815_000001_create_user_table::Migration),
            Box::new(m20260815_000002_create_news_suggestion_table::Migration),
            Box::new(m20260815_000003_create_article_table::Migration),
            Box::new(m20260815_000004_create_comment_table::Migration),
            Box::new(m20260815_000005_create_like_table::Migration),
        ]
    }
}
