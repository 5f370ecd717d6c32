//! User data repository.
//!
//! Handles Discord-identity upserts at login, profile updates, bans, and the
//! transactional removal of an account together with everything it authored.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    sea_query::ExprTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::{
    data::{
        article::delete_article_records,
        comment::{decrement_like_counts, delete_comment_trees},
    },
    model::user::{UpdateProfileParam, UpsertUserParam, User},
};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a user from their Discord identity after a successful login.
    ///
    /// Matched on `discord_id`. The Discord profile columns are refreshed on
    /// every login; display name, biography, role, and ban status are locally
    /// owned and only written on first login: a fresh user starts as a
    /// non-banned reader with an empty biography.
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert_discord(&self, param: UpsertUserParam) -> Result<User, DbErr> {
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id),
            discord_username: ActiveValue::Set(param.discord_username),
            discord_email: ActiveValue::Set(param.discord_email),
            discord_avatar: ActiveValue::Set(param.discord_avatar),
            biography: ActiveValue::Set(String::new()),
            role: ActiveValue::Set(entity::user::Role::Reader),
            banned: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::DiscordId)
                .update_columns([
                    entity::user::Column::DiscordUsername,
                    entity::user::Column::DiscordEmail,
                    entity::user::Column::DiscordAvatar,
                    entity::user::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by display name, for uniqueness checks before updates.
    pub async fn find_by_display_name(&self, display_name: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::DisplayName.eq(display_name))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Gets all users, newest first.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_desc(entity::user::Column::CreatedAt)
            .order_by_desc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Updates a user's own profile fields.
    ///
    /// Only the fields set in `param` are written. Display-name uniqueness is
    /// checked by the service layer first; the unique column backs it up.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_profile(
        &self,
        user_id: i32,
        param: UpdateProfileParam,
    ) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = entity.into();
        if let Some(display_name) = param.display_name {
            active.display_name = ActiveValue::Set(Some(display_name));
        }
        if let Some(biography) = param.biography {
            active.biography = ActiveValue::Set(biography);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = entity::prelude::User::update(active).exec(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }

    /// Bans a user, setting the flag and the role column together so the
    /// stored role can never disagree with the flag.
    pub async fn ban(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = entity.into();
        active.banned = ActiveValue::Set(true);
        active.role = ActiveValue::Set(entity::user::Role::Banned);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = entity::prelude::User::update(active).exec(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }

    /// Deletes a user and everything they contributed, in one transaction.
    ///
    /// Order matters: their likes go first (decrementing the counters of
    /// comments that survive), then the subtrees rooted at their comments,
    /// then their articles and articles based on their suggestions, then the
    /// suggestions, and finally the user row. Any failure rolls the whole
    /// cascade back.
    pub async fn delete_cascade(&self, user_id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        let liked_comment_ids: Vec<i32> = entity::prelude::Like::find()
            .select_only()
            .column(entity::like::Column::CommentId)
            .filter(entity::like::Column::UserId.eq(user_id))
            .into_tuple()
            .all(&txn)
            .await?;

        decrement_like_counts(&txn, liked_comment_ids).await?;

        entity::prelude::Like::delete_many()
            .filter(entity::like::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;

        let comment_ids: Vec<i32> = entity::prelude::Comment::find()
            .select_only()
            .column(entity::comment::Column::Id)
            .filter(entity::comment::Column::UserId.eq(user_id))
            .into_tuple()
            .all(&txn)
            .await?;

        delete_comment_trees(&txn, comment_ids).await?;

        let suggestion_ids: Vec<i32> = entity::prelude::NewsSuggestion::find()
            .select_only()
            .column(entity::news_suggestion::Column::Id)
            .filter(entity::news_suggestion::Column::UserId.eq(user_id))
            .into_tuple()
            .all(&txn)
            .await?;

        let article_ids: Vec<i32> = entity::prelude::Article::find()
            .select_only()
            .column(entity::article::Column::Id)
            .filter(
                entity::article::Column::UserId.eq(user_id).or(
                    entity::article::Column::BasedOnSuggestionId.is_in(suggestion_ids.clone()),
                ),
            )
            .into_tuple()
            .all(&txn)
            .await?;

        delete_article_records(&txn, article_ids).await?;

        entity::prelude::NewsSuggestion::delete_many()
            .filter(entity::news_suggestion::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;

        entity::prelude::User::delete_by_id(user_id).exec(&txn).await?;

        txn.commit().await?;

        Ok(())
    }
}
