//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique identifiers in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an article together with its author.
///
/// Convenience method for tests that need an article but don't care about
/// the author's details.
///
/// # Returns
/// - `Ok((user, article))` - The created author and article
/// - `Err(DbErr)` - Database error during creation
pub async fn create_article_with_author(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::article::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let article = crate::factory::article::create_article(db, user.id).await?;

    Ok((user, article))
}
