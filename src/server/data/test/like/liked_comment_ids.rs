use super::*;

/// Tests filtering liked comments for a viewer.
///
/// Verifies that only the ids the viewer actually liked come back, and
/// only from the requested set.
///
/// Expected: Ok with exactly the liked subset
#[tokio::test]
async fn returns_only_the_viewers_liked_subset() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, article) = factory::helpers::create_article_with_author(db).await?;
    let first = factory::comment::create_comment(db, article.id, author.id).await?;
    let second = factory::comment::create_comment(db, article.id, author.id).await?;
    let third = factory::comment::create_comment(db, article.id, author.id).await?;

    let viewer = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let repo = LikeRepository::new(db);
    repo.toggle(viewer.id, first.id).await?;
    repo.toggle(viewer.id, third.id).await?;
    repo.toggle(other.id, second.id).await?;

    let liked = repo
        .liked_comment_ids(viewer.id, &[first.id, second.id, third.id])
        .await?;

    assert_eq!(liked.len(), 2);
    assert!(liked.contains(&first.id));
    assert!(liked.contains(&third.id));

    // Ids outside the requested set are not reported.
    let partial = repo.liked_comment_ids(viewer.id, &[second.id]).await?;
    assert!(partial.is_empty());

    Ok(())
}

/// Tests the empty input short-circuit.
///
/// Expected: Ok with an empty set, no query issued
#[tokio::test]
async fn empty_input_yields_empty_set() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let viewer = factory::user::create_user(db).await?;

    let liked = LikeRepository::new(db)
        .liked_comment_ids(viewer.id, &[])
        .await?;

    assert!(liked.is_empty());

    Ok(())
}
