use super::*;

/// Tests paginating articles.
///
/// Creates three articles and requests pages of two.
///
/// Verifies newest-first ordering, page totals, and that each summary
/// carries its own comment count.
///
/// Expected: Ok with two pages and per-article counts
#[tokio::test]
async fn pages_newest_first_with_comment_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let first = factory::article::create_article(db, author.id).await?;
    let second = factory::article::create_article(db, author.id).await?;
    let third = factory::article::create_article(db, author.id).await?;

    factory::comment::create_comment(db, first.id, author.id).await?;
    factory::comment::create_comment(db, first.id, author.id).await?;
    factory::comment::create_comment(db, third.id, author.id).await?;

    let repo = ArticleRepository::new(db);
    let page = repo.get_paginated(0, 2).await?;

    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.articles.len(), 2);

    let counts: Vec<(i32, u64)> = page
        .articles
        .iter()
        .map(|a| (a.id, a.comment_count))
        .collect();
    assert!(counts.contains(&(third.id, 1)));
    assert!(counts.contains(&(second.id, 0)));

    let last_page = repo.get_paginated(1, 2).await?;
    assert_eq!(last_page.articles.len(), 1);
    assert_eq!(last_page.articles[0].id, first.id);
    assert_eq!(last_page.articles[0].comment_count, 2);

    Ok(())
}

/// Tests paginating with no articles at all.
///
/// Expected: Ok with an empty page and zero totals
#[tokio::test]
async fn empty_table_yields_empty_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let page = ArticleRepository::new(db).get_paginated(0, 10).await?;

    assert!(page.articles.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages, 0);

    Ok(())
}
