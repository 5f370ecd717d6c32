//! Article data repository.
//!
//! Listing queries join the author and attach a per-article comment count;
//! the detail query returns the full article. Deletes cascade through
//! comments and likes inside a transaction.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::{
    data::comment::delete_article_comments,
    model::{
        article::{
            join_references, Article, ArticleSummary, CreateArticleParam, PaginatedArticles,
            UpdateArticleParam,
        },
        user::User,
    },
};

pub struct ArticleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateArticleParam) -> Result<entity::article::Model, DbErr> {
        entity::prelude::Article::insert(entity::article::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            title: ActiveValue::Set(param.title),
            content: ActiveValue::Set(param.content),
            image: ActiveValue::Set(param.image),
            content_summary: ActiveValue::Set(param.content_summary),
            references: ActiveValue::Set(join_references(&param.references)),
            based_on_suggestion_id: ActiveValue::Set(param.based_on_suggestion_id),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Finds an article with its author.
    pub async fn find_by_id(&self, article_id: i32) -> Result<Option<Article>, DbErr> {
        let row = entity::prelude::Article::find_by_id(article_id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(row.and_then(|(article, author)| {
            author.map(|a| Article::from_entity(article, User::from_entity(a)))
        }))
    }

    /// Gets a page of article summaries, newest first.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedArticles, DbErr> {
        let paginator = entity::prelude::Article::find()
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::article::Column::CreatedAt)
            .order_by_desc(entity::article::Column::Id)
            .paginate(self.db, per_page);

        let counts = paginator.num_items_and_pages().await?;
        let rows = paginator.fetch_page(page).await?;
        let articles = self.attach_comment_counts(rows).await?;

        Ok(PaginatedArticles {
            articles,
            total: counts.number_of_items,
            page,
            per_page,
            total_pages: counts.number_of_pages,
        })
    }

    /// Gets the newest article summaries for the front page.
    pub async fn latest_summaries(&self, limit: u64) -> Result<Vec<ArticleSummary>, DbErr> {
        let rows = entity::prelude::Article::find()
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::article::Column::CreatedAt)
            .order_by_desc(entity::article::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        self.attach_comment_counts(rows).await
    }

    pub async fn update(
        &self,
        article_id: i32,
        param: UpdateArticleParam,
    ) -> Result<Option<Article>, DbErr> {
        let Some(entity) = entity::prelude::Article::find_by_id(article_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::article::ActiveModel = entity.into();
        active.title = ActiveValue::Set(param.title);
        active.content = ActiveValue::Set(param.content);
        active.image = ActiveValue::Set(param.image);
        active.content_summary = ActiveValue::Set(param.content_summary);
        active.references = ActiveValue::Set(join_references(&param.references));
        active.updated_at = ActiveValue::Set(Utc::now());

        entity::prelude::Article::update(active).exec(self.db).await?;

        self.find_by_id(article_id).await
    }

    /// Deletes an article together with its comments and their likes, in
    /// one transaction.
    pub async fn delete_cascade(&self, article_id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        delete_article_records(&txn, vec![article_id]).await?;

        txn.commit().await?;

        Ok(())
    }

    pub async fn count_by_author(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Article::find()
            .filter(entity::article::Column::UserId.eq(user_id))
            .count(self.db)
            .await
    }

    /// Converts joined rows to summaries, looking up the comment count of
    /// every article on the page in a single grouped query.
    async fn attach_comment_counts(
        &self,
        rows: Vec<(entity::article::Model, Option<entity::user::Model>)>,
    ) -> Result<Vec<ArticleSummary>, DbErr> {
        let article_ids: Vec<i32> = rows.iter().map(|(article, _)| article.id).collect();
        let counts = self.comment_counts(article_ids).await?;

        Ok(rows
            .into_iter()
            .filter_map(|(article, author)| {
                author.map(|a| {
                    let comment_count = counts.get(&article.id).copied().unwrap_or(0);
                    ArticleSummary::from_entity(article, User::from_entity(a), comment_count)
                })
            })
            .collect())
    }

    async fn comment_counts(&self, article_ids: Vec<i32>) -> Result<HashMap<i32, u64>, DbErr> {
        if article_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let counts: Vec<(i32, i64)> = entity::prelude::Comment::find()
            .select_only()
            .column(entity::comment::Column::ArticleId)
            .column_as(entity::comment::Column::Id.count(), "comment_count")
            .filter(entity::comment::Column::ArticleId.is_in(article_ids))
            .group_by(entity::comment::Column::ArticleId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(counts
            .into_iter()
            .map(|(article_id, count)| (article_id, count as u64))
            .collect())
    }
}

/// Deletes the given articles and everything hanging off them: the comments
/// of each article and the likes on those comments go first, then the
/// article rows themselves.
pub(crate) async fn delete_article_records<C: ConnectionTrait>(
    conn: &C,
    article_ids: Vec<i32>,
) -> Result<(), DbErr> {
    if article_ids.is_empty() {
        return Ok(());
    }

    delete_article_comments(conn, article_ids.clone()).await?;

    entity::prelude::Article::delete_many()
        .filter(entity::article::Column::Id.is_in(article_ids))
        .exec(conn)
        .await?;

    Ok(())
}
