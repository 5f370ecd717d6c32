//! News suggestion data repository.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::{
    data::article::delete_article_records,
    model::{
        suggestion::{
            CreateSuggestionParam, NewsSuggestion, PaginatedSuggestions, UpdateSuggestionParam,
        },
        user::User,
    },
};

pub struct SuggestionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SuggestionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        param: CreateSuggestionParam,
    ) -> Result<entity::news_suggestion::Model, DbErr> {
        entity::prelude::NewsSuggestion::insert(entity::news_suggestion::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            source: ActiveValue::Set(param.source),
            title: ActiveValue::Set(param.title),
            content: ActiveValue::Set(param.content),
            image: ActiveValue::Set(param.image),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn find_by_id(&self, suggestion_id: i32) -> Result<Option<NewsSuggestion>, DbErr> {
        let row = entity::prelude::NewsSuggestion::find_by_id(suggestion_id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(row.and_then(|(suggestion, author)| {
            author.map(|a| NewsSuggestion::from_entity(suggestion, User::from_entity(a)))
        }))
    }

    /// Gets a page of suggestions, newest first.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedSuggestions, DbErr> {
        let paginator = entity::prelude::NewsSuggestion::find()
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::news_suggestion::Column::CreatedAt)
            .order_by_desc(entity::news_suggestion::Column::Id)
            .paginate(self.db, per_page);

        let counts = paginator.num_items_and_pages().await?;
        let rows = paginator.fetch_page(page).await?;

        let suggestions = rows
            .into_iter()
            .filter_map(|(suggestion, author)| {
                author.map(|a| NewsSuggestion::from_entity(suggestion, User::from_entity(a)))
            })
            .collect();

        Ok(PaginatedSuggestions {
            suggestions,
            total: counts.number_of_items,
            page,
            per_page,
            total_pages: counts.number_of_pages,
        })
    }

    /// Gets the newest suggestions for the front page.
    pub async fn latest(&self, limit: u64) -> Result<Vec<NewsSuggestion>, DbErr> {
        let rows = entity::prelude::NewsSuggestion::find()
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::news_suggestion::Column::CreatedAt)
            .order_by_desc(entity::news_suggestion::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(suggestion, author)| {
                author.map(|a| NewsSuggestion::from_entity(suggestion, User::from_entity(a)))
            })
            .collect())
    }

    pub async fn update(
        &self,
        suggestion_id: i32,
        param: UpdateSuggestionParam,
    ) -> Result<Option<NewsSuggestion>, DbErr> {
        let Some(entity) = entity::prelude::NewsSuggestion::find_by_id(suggestion_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::news_suggestion::ActiveModel = entity.into();
        active.source = ActiveValue::Set(param.source);
        active.title = ActiveValue::Set(param.title);
        active.content = ActiveValue::Set(param.content);
        active.image = ActiveValue::Set(param.image);
        active.updated_at = ActiveValue::Set(Utc::now());

        entity::prelude::NewsSuggestion::update(active)
            .exec(self.db)
            .await?;

        self.find_by_id(suggestion_id).await
    }

    /// Deletes a suggestion and the articles based on it (with their
    /// comments and likes), in one transaction.
    pub async fn delete_cascade(&self, suggestion_id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        let article_ids: Vec<i32> = entity::prelude::Article::find()
            .select_only()
            .column(entity::article::Column::Id)
            .filter(entity::article::Column::BasedOnSuggestionId.eq(suggestion_id))
            .into_tuple()
            .all(&txn)
            .await?;

        delete_article_records(&txn, article_ids).await?;

        entity::prelude::NewsSuggestion::delete_by_id(suggestion_id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(())
    }
}
