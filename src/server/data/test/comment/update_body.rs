use super::*;

/// Tests editing a comment's body.
///
/// Verifies that the edit marker is set so readers can tell the comment
/// was changed after posting.
///
/// Expected: Ok(Some) with the new body and was_edited = true
#[tokio::test]
async fn replaces_body_and_marks_edited() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, article) = factory::helpers::create_article_with_author(db).await?;
    let comment = factory::comment::create_comment(db, article.id, author.id).await?;
    assert!(!comment.was_edited);

    let updated = CommentRepository::new(db)
        .update_body(comment.id, "Corrected my typo.".to_string())
        .await?
        .unwrap();

    assert_eq!(updated.body, "Corrected my typo.");
    assert!(updated.was_edited);

    Ok(())
}

/// Tests editing a comment that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn missing_comment_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CommentRepository::new(db)
        .update_body(9999, "Nothing here.".to_string())
        .await?;

    assert!(result.is_none());

    Ok(())
}
