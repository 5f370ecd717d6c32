use super::*;

/// Tests deleting a suggestion that an article was based on.
///
/// Verifies that the derived article and its comment thread go with the
/// suggestion, while independent articles survive.
///
/// Expected: Ok with the suggestion and its derived content removed
#[tokio::test]
async fn removes_derived_articles_with_the_suggestion() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let reader = factory::user::create_user(db).await?;
    let writer = factory::user::create_user(db).await?;

    let suggestion = factory::news_suggestion::create_news_suggestion(db, reader.id).await?;
    let derived = factory::article::ArticleFactory::new(db, writer.id)
        .based_on_suggestion(suggestion.id)
        .build()
        .await?;
    let independent = factory::article::create_article(db, writer.id).await?;
    let derived_comment = factory::comment::create_comment(db, derived.id, reader.id).await?;

    SuggestionRepository::new(db).delete_cascade(suggestion.id).await?;

    assert!(entity::prelude::NewsSuggestion::find_by_id(suggestion.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Article::find_by_id(derived.id).one(db).await?.is_none());
    assert!(entity::prelude::Comment::find_by_id(derived_comment.id)
        .one(db)
        .await?
        .is_none());

    assert!(entity::prelude::Article::find_by_id(independent.id).one(db).await?.is_some());

    Ok(())
}

/// Tests deleting a suggestion nothing was written from.
///
/// Expected: Ok, only the suggestion row removed
#[tokio::test]
async fn deletes_a_plain_suggestion() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let reader = factory::user::create_user(db).await?;
    let suggestion = factory::news_suggestion::create_news_suggestion(db, reader.id).await?;

    SuggestionRepository::new(db).delete_cascade(suggestion.id).await?;

    assert!(entity::prelude::NewsSuggestion::find_by_id(suggestion.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::User::find_by_id(reader.id).one(db).await?.is_some());

    Ok(())
}
