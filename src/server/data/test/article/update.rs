use super::*;

/// Tests updating an article's content.
///
/// Verifies that all editable columns are replaced and the suggestion
/// link is left untouched.
///
/// Expected: Ok(Some) with the new values
#[tokio::test]
async fn replaces_editable_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let suggestion = factory::news_suggestion::create_news_suggestion(db, author.id).await?;
    let article = factory::article::ArticleFactory::new(db, author.id)
        .based_on_suggestion(suggestion.id)
        .build()
        .await?;

    let updated = ArticleRepository::new(db)
        .update(
            article.id,
            UpdateArticleParam {
                title: "Rewritten after corrections".to_string(),
                content: "Corrected body. ".repeat(120),
                image: "https://cdn.example.com/new.png".to_string(),
                content_summary: "Corrected body.".to_string(),
                references: vec!["https://example.com/correction".to_string()],
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Rewritten after corrections");
    assert_eq!(updated.image, "https://cdn.example.com/new.png");
    assert_eq!(updated.references, vec!["https://example.com/correction".to_string()]);
    assert_eq!(updated.based_on_suggestion_id, Some(suggestion.id));

    Ok(())
}

/// Tests updating an article that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn missing_article_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ArticleRepository::new(db)
        .update(
            9999,
            UpdateArticleParam {
                title: "No such article".to_string(),
                content: "Body. ".repeat(300),
                image: "https://cdn.example.com/new.png".to_string(),
                content_summary: "Body.".to_string(),
                references: vec!["https://example.com/a".to_string()],
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
