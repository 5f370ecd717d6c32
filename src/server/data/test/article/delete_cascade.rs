use super::*;

/// Tests deleting an article with a comment thread.
///
/// Verifies that the article, its comments at every depth, and the likes
/// on those comments are all removed, while other articles are untouched.
///
/// Expected: Ok with only the unrelated article's data remaining
#[tokio::test]
async fn removes_comments_and_likes_with_the_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, article) = factory::helpers::create_article_with_author(db).await?;
    let (_, unrelated_article) = factory::helpers::create_article_with_author(db).await?;
    let viewer = factory::user::create_user(db).await?;

    let root = factory::comment::create_comment(db, article.id, author.id).await?;
    let reply = factory::comment::create_reply(db, article.id, author.id, root.id).await?;
    let unrelated_comment =
        factory::comment::create_comment(db, unrelated_article.id, author.id).await?;

    let like_repo = crate::server::data::like::LikeRepository::new(db);
    like_repo.toggle(viewer.id, reply.id).await?;
    like_repo.toggle(viewer.id, unrelated_comment.id).await?;

    ArticleRepository::new(db).delete_cascade(article.id).await?;

    assert!(entity::prelude::Article::find_by_id(article.id).one(db).await?.is_none());
    assert!(entity::prelude::Comment::find_by_id(root.id).one(db).await?.is_none());
    assert!(entity::prelude::Comment::find_by_id(reply.id).one(db).await?.is_none());

    assert!(entity::prelude::Article::find_by_id(unrelated_article.id)
        .one(db)
        .await?
        .is_some());

    let likes = entity::prelude::Like::find().all(db).await?;
    assert_eq!(likes.len(), 1);
    assert_eq!(likes[0].comment_id, unrelated_comment.id);

    Ok(())
}
