use super::*;

/// Tests updating a suggestion.
///
/// Expected: Ok(Some) with every editable field replaced
#[tokio::test]
async fn replaces_editable_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let suggestion = factory::news_suggestion::create_news_suggestion(db, author.id).await?;

    let updated = SuggestionRepository::new(db)
        .update(
            suggestion.id,
            UpdateSuggestionParam {
                source: "https://example.com/better-source".to_string(),
                title: "A sharper headline for this".to_string(),
                content: "Cleaned up after review.".to_string(),
                image: "https://cdn.example.com/better.png".to_string(),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.source, "https://example.com/better-source");
    assert_eq!(updated.title, "A sharper headline for this");
    assert_eq!(updated.content, "Cleaned up after review.");
    assert_eq!(updated.author.id, author.id);

    Ok(())
}

/// Tests updating a suggestion that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn missing_suggestion_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SuggestionRepository::new(db)
        .update(
            9999,
            UpdateSuggestionParam {
                source: "https://example.com/nothing".to_string(),
                title: "Nobody will read this".to_string(),
                content: "Gone.".to_string(),
                image: "https://cdn.example.com/nothing.png".to_string(),
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
