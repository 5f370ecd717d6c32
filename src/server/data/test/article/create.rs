use super::*;

/// Tests creating an article from validated parameters.
///
/// Verifies that the reference list is stored in its comma-joined form
/// and round-trips back through `find_by_id`.
///
/// Expected: Ok with the stored article and its author
#[tokio::test]
async fn creates_article_with_references() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;

    let repo = ArticleRepository::new(db);
    let created = repo
        .create(CreateArticleParam {
            user_id: author.id,
            title: "A headline long enough to publish".to_string(),
            content: "Body text. ".repeat(150),
            image: "https://cdn.example.com/cover.png".to_string(),
            content_summary: "Body text.".to_string(),
            references: vec![
                "https://example.com/a".to_string(),
                "https://example.com/b".to_string(),
            ],
            based_on_suggestion_id: None,
        })
        .await?;

    assert_eq!(created.references, "https://example.com/a,https://example.com/b");

    let fetched = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(fetched.author.id, author.id);
    assert_eq!(
        fetched.references,
        vec![
            "https://example.com/a".to_string(),
            "https://example.com/b".to_string(),
        ]
    );

    Ok(())
}

/// Tests creating an article linked to a suggestion.
///
/// Expected: Ok with the suggestion id stored
#[tokio::test]
async fn stores_the_suggestion_link() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let suggestion = factory::news_suggestion::create_news_suggestion(db, author.id).await?;

    let created = ArticleRepository::new(db)
        .create(CreateArticleParam {
            user_id: author.id,
            title: "Following up on a reader tip".to_string(),
            content: "Body text. ".repeat(150),
            image: "https://cdn.example.com/cover.png".to_string(),
            content_summary: "Body text.".to_string(),
            references: vec!["https://example.com/a".to_string()],
            based_on_suggestion_id: Some(suggestion.id),
        })
        .await?;

    assert_eq!(created.based_on_suggestion_id, Some(suggestion.id));

    Ok(())
}
