use super::*;

/// Tests submitting a news suggestion.
///
/// Expected: Ok with the stored row, retrievable with its author
#[tokio::test]
async fn creates_a_suggestion() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;

    let repo = SuggestionRepository::new(db);
    let created = repo
        .create(CreateSuggestionParam {
            user_id: author.id,
            source: "https://example.com/scoop".to_string(),
            title: "Something big just happened".to_string(),
            content: "Worth covering before everyone else does.".to_string(),
            image: "https://cdn.example.com/scoop.png".to_string(),
        })
        .await?;

    let fetched = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(fetched.source, "https://example.com/scoop");
    assert_eq!(fetched.title, "Something big just happened");
    assert_eq!(fetched.author.id, author.id);

    Ok(())
}
