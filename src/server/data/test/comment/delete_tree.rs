use super::*;

/// Tests deleting a comment with nested replies.
///
/// Builds a three-level thread and deletes the root.
///
/// Verifies that the whole subtree is removed, along with likes on any
/// comment in it, while a sibling thread survives.
///
/// Expected: Ok with the subtree and its likes gone
#[tokio::test]
async fn removes_the_whole_subtree_and_its_likes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, article) = factory::helpers::create_article_with_author(db).await?;
    let viewer = factory::user::create_user(db).await?;

    let root = factory::comment::create_comment(db, article.id, author.id).await?;
    let child = factory::comment::create_reply(db, article.id, author.id, root.id).await?;
    let grandchild = factory::comment::create_reply(db, article.id, author.id, child.id).await?;
    let sibling = factory::comment::create_comment(db, article.id, author.id).await?;

    let like_repo = crate::server::data::like::LikeRepository::new(db);
    like_repo.toggle(viewer.id, grandchild.id).await?;
    like_repo.toggle(viewer.id, sibling.id).await?;

    CommentRepository::new(db).delete_tree(root.id).await?;

    assert!(entity::prelude::Comment::find_by_id(root.id).one(db).await?.is_none());
    assert!(entity::prelude::Comment::find_by_id(child.id).one(db).await?.is_none());
    assert!(entity::prelude::Comment::find_by_id(grandchild.id).one(db).await?.is_none());
    assert!(entity::prelude::Comment::find_by_id(sibling.id).one(db).await?.is_some());

    // Only the like on the surviving sibling remains.
    let likes = entity::prelude::Like::find().all(db).await?;
    assert_eq!(likes.len(), 1);
    assert_eq!(likes[0].comment_id, sibling.id);

    Ok(())
}
