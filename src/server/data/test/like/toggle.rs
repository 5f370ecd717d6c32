use super::*;

/// Tests liking a comment for the first time.
///
/// Verifies that the toggle inserts a like row and increments the
/// denormalized counter in the same operation.
///
/// Expected: Ok(true) with like_count 1
#[tokio::test]
async fn first_toggle_likes_the_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, article) = factory::helpers::create_article_with_author(db).await?;
    let comment = factory::comment::create_comment(db, article.id, author.id).await?;
    let viewer = factory::user::create_user(db).await?;

    let repo = LikeRepository::new(db);
    let liked = repo.toggle(viewer.id, comment.id).await?;

    assert!(liked);

    let stored = entity::prelude::Comment::find_by_id(comment.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.like_count, 1);

    Ok(())
}

/// Tests toggling twice in a row.
///
/// Verifies that the second toggle removes the like row and restores the
/// counter to its original value.
///
/// Expected: Ok(true) then Ok(false), counter back to 0
#[tokio::test]
async fn double_toggle_restores_the_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, article) = factory::helpers::create_article_with_author(db).await?;
    let comment = factory::comment::create_comment(db, article.id, author.id).await?;
    let viewer = factory::user::create_user(db).await?;

    let repo = LikeRepository::new(db);

    assert!(repo.toggle(viewer.id, comment.id).await?);
    assert!(!repo.toggle(viewer.id, comment.id).await?);

    let stored = entity::prelude::Comment::find_by_id(comment.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.like_count, 0);

    let like_rows = entity::prelude::Like::find().all(db).await?;
    assert!(like_rows.is_empty());

    Ok(())
}

/// Tests that likes from different users accumulate.
///
/// Verifies that each user contributes one to the counter and that one
/// user removing their like leaves the others' intact.
///
/// Expected: counter 2 after two users, 1 after one untoggles
#[tokio::test]
async fn likes_from_different_users_accumulate() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, article) = factory::helpers::create_article_with_author(db).await?;
    let comment = factory::comment::create_comment(db, article.id, author.id).await?;
    let viewer_a = factory::user::create_user(db).await?;
    let viewer_b = factory::user::create_user(db).await?;

    let repo = LikeRepository::new(db);

    repo.toggle(viewer_a.id, comment.id).await?;
    repo.toggle(viewer_b.id, comment.id).await?;

    let stored = entity::prelude::Comment::find_by_id(comment.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.like_count, 2);

    repo.toggle(viewer_a.id, comment.id).await?;

    let stored = entity::prelude::Comment::find_by_id(comment.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.like_count, 1);

    Ok(())
}

/// Tests inserting a second like row for the same (user, comment) pair.
///
/// Verifies that the unique index rejects the duplicate, so a race between
/// two concurrent likes cannot double-count.
///
/// Expected: the raw insert fails, one like row remains, counter stays 1
#[tokio::test]
async fn duplicate_like_insert_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, article) = factory::helpers::create_article_with_author(db).await?;
    let comment = factory::comment::create_comment(db, article.id, author.id).await?;
    let viewer = factory::user::create_user(db).await?;

    assert!(LikeRepository::new(db).toggle(viewer.id, comment.id).await?);

    let duplicate = entity::prelude::Like::insert(entity::like::ActiveModel {
        user_id: ActiveValue::Set(viewer.id),
        comment_id: ActiveValue::Set(comment.id),
        ..Default::default()
    })
    .exec(db)
    .await;

    assert!(duplicate.is_err());

    let like_rows = entity::prelude::Like::find().all(db).await?;
    assert_eq!(like_rows.len(), 1);

    let stored = entity::prelude::Comment::find_by_id(comment.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.like_count, 1);

    Ok(())
}
