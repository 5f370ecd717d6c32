use super::*;

/// Tests fetching an article's comments with their authors.
///
/// Verifies that only the requested article's comments come back, oldest
/// first, each carrying its author.
///
/// Expected: Ok with the article's comments in creation order
#[tokio::test]
async fn returns_comments_of_one_article_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, article) = factory::helpers::create_article_with_author(db).await?;
    let (_, unrelated_article) = factory::helpers::create_article_with_author(db).await?;

    let first = factory::comment::create_comment(db, article.id, author.id).await?;
    let second = factory::comment::create_comment(db, article.id, author.id).await?;
    factory::comment::create_comment(db, unrelated_article.id, author.id).await?;

    let comments = CommentRepository::new(db)
        .find_by_article(article.id)
        .await?;

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].id, first.id);
    assert_eq!(comments[1].id, second.id);
    assert_eq!(comments[0].author.id, author.id);

    Ok(())
}

/// Tests an article with no comments.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn article_without_comments_yields_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, article) = factory::helpers::create_article_with_author(db).await?;

    let comments = CommentRepository::new(db)
        .find_by_article(article.id)
        .await?;

    assert!(comments.is_empty());

    Ok(())
}
