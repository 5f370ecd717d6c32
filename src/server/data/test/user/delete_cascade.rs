use super::*;
use sea_orm::{ColumnTrait, QueryFilter};

/// Tests deleting an account with content spread across the platform.
///
/// The deleted user authored an article, a comment on someone else's
/// article, and a news suggestion another user wrote an article from.
/// Another user replied under the deleted user's comment.
///
/// Verifies that everything they contributed is gone, including the reply
/// subtree under their comment and the article based on their suggestion.
///
/// Expected: Ok with only the other user's untouched content remaining
#[tokio::test]
async fn removes_everything_the_user_contributed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let doomed = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let own_article = factory::article::create_article(db, doomed.id).await?;
    let other_article = factory::article::create_article(db, other.id).await?;

    let own_comment =
        factory::comment::create_comment(db, other_article.id, doomed.id).await?;
    let reply_to_own =
        factory::comment::create_reply(db, other_article.id, other.id, own_comment.id).await?;
    let other_comment =
        factory::comment::create_comment(db, other_article.id, other.id).await?;

    let suggestion = factory::news_suggestion::create_news_suggestion(db, doomed.id).await?;
    let derived_article = factory::article::ArticleFactory::new(db, other.id)
        .based_on_suggestion(suggestion.id)
        .build()
        .await?;

    UserRepository::new(db).delete_cascade(doomed.id).await?;

    assert!(entity::prelude::User::find_by_id(doomed.id).one(db).await?.is_none());
    assert!(entity::prelude::Article::find_by_id(own_article.id).one(db).await?.is_none());
    assert!(entity::prelude::Article::find_by_id(derived_article.id).one(db).await?.is_none());
    assert!(entity::prelude::NewsSuggestion::find_by_id(suggestion.id).one(db).await?.is_none());
    assert!(entity::prelude::Comment::find_by_id(own_comment.id).one(db).await?.is_none());
    assert!(entity::prelude::Comment::find_by_id(reply_to_own.id).one(db).await?.is_none());

    assert!(entity::prelude::User::find_by_id(other.id).one(db).await?.is_some());
    assert!(entity::prelude::Article::find_by_id(other_article.id).one(db).await?.is_some());
    assert!(entity::prelude::Comment::find_by_id(other_comment.id).one(db).await?.is_some());

    Ok(())
}

/// Tests that deleting a user decrements the counters of surviving
/// comments they had liked.
///
/// Expected: surviving comment back to its pre-like count, like row gone
#[tokio::test]
async fn decrements_counters_of_surviving_liked_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let doomed = factory::user::create_user(db).await?;
    let (other, article) = factory::helpers::create_article_with_author(db).await?;
    let comment = factory::comment::create_comment(db, article.id, other.id).await?;

    let like_repo = crate::server::data::like::LikeRepository::new(db);
    like_repo.toggle(doomed.id, comment.id).await?;
    like_repo.toggle(other.id, comment.id).await?;

    UserRepository::new(db).delete_cascade(doomed.id).await?;

    let stored = entity::prelude::Comment::find_by_id(comment.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.like_count, 1);

    let doomed_likes = entity::prelude::Like::find()
        .filter(entity::like::Column::UserId.eq(doomed.id))
        .all(db)
        .await?;
    assert!(doomed_likes.is_empty());

    Ok(())
}
