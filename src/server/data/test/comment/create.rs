use super::*;

/// Tests creating a top-level comment.
///
/// Verifies that new comments start with a zero like counter and are not
/// marked as edited.
///
/// Expected: Ok with the stored row
#[tokio::test]
async fn creates_a_top_level_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, article) = factory::helpers::create_article_with_author(db).await?;

    let comment = CommentRepository::new(db)
        .create(CreateCommentParam {
            article_id: article.id,
            user_id: author.id,
            parent_id: None,
            body: "First!".to_string(),
        })
        .await?;

    assert_eq!(comment.article_id, article.id);
    assert_eq!(comment.user_id, author.id);
    assert!(comment.parent_id.is_none());
    assert_eq!(comment.body, "First!");
    assert_eq!(comment.like_count, 0);
    assert!(!comment.was_edited);

    Ok(())
}

/// Tests creating a reply.
///
/// Expected: Ok with the parent id stored
#[tokio::test]
async fn creates_a_reply() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, article) = factory::helpers::create_article_with_author(db).await?;
    let parent = factory::comment::create_comment(db, article.id, author.id).await?;

    let reply = CommentRepository::new(db)
        .create(CreateCommentParam {
            article_id: article.id,
            user_id: author.id,
            parent_id: Some(parent.id),
            body: "Replying to myself.".to_string(),
        })
        .await?;

    assert_eq!(reply.parent_id, Some(parent.id));

    Ok(())
}
