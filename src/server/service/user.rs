//! User profile, account, and ban management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{article::ArticleRepository, comment::CommentRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::{UpdateProfileParam, User},
    service::moderation::{self, Actor},
};

const DISPLAY_NAME_MAX_LEN: usize = 20;
const BIOGRAPHY_MAX_LEN: usize = 150;

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Gets a user with the number of articles and comments they authored.
    pub async fn get_profile(&self, user_id: i32) -> Result<(User, u64, u64), AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found.".to_string()));
        };

        let article_count = ArticleRepository::new(self.db).count_by_author(user_id).await?;
        let comment_count = CommentRepository::new(self.db).count_by_author(user_id).await?;

        Ok((user, article_count, comment_count))
    }

    /// Updates a user's profile. Owner only; a taken display name is a
    /// conflict.
    pub async fn update_profile(
        &self,
        actor: &User,
        target_id: i32,
        param: UpdateProfileParam,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_id(target_id).await?.is_none() {
            return Err(AppError::NotFound("User not found.".to_string()));
        }

        if !moderation::can_edit_profile(Actor::from_user(actor), target_id) {
            return Err(AuthError::AccessDenied(
                actor.id,
                "Profiles may only be edited by their owner".to_string(),
            )
            .into());
        }

        let display_name = match param.display_name {
            Some(name) => {
                let name = name.trim().to_string();
                if name.is_empty() || name.chars().count() > DISPLAY_NAME_MAX_LEN {
                    return Err(AppError::BadRequest(format!(
                        "Display name must be between 1 and {} characters.",
                        DISPLAY_NAME_MAX_LEN
                    )));
                }

                if let Some(holder) = user_repo.find_by_display_name(&name).await? {
                    if holder.id != target_id {
                        return Err(AppError::Conflict(
                            "That display name is already taken.".to_string(),
                        ));
                    }
                }

                Some(name)
            }
            None => None,
        };

        if let Some(biography) = &param.biography {
            if biography.chars().count() > BIOGRAPHY_MAX_LEN {
                return Err(AppError::BadRequest(format!(
                    "Biography must be at most {} characters.",
                    BIOGRAPHY_MAX_LEN
                )));
            }
        }

        let updated = user_repo
            .update_profile(
                target_id,
                UpdateProfileParam {
                    display_name,
                    biography: param.biography,
                },
            )
            .await?;

        updated.ok_or_else(|| AppError::NotFound("User not found.".to_string()))
    }

    /// Deletes an account and everything it contributed. Owner or admin.
    pub async fn delete_account(&self, actor: &User, target_id: i32) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_id(target_id).await?.is_none() {
            return Err(AppError::NotFound("User not found.".to_string()));
        }

        if !moderation::can_delete_user(Actor::from_user(actor), target_id) {
            return Err(AuthError::AccessDenied(
                actor.id,
                "Not allowed to delete this account".to_string(),
            )
            .into());
        }

        user_repo.delete_cascade(target_id).await?;

        tracing::info!("User {} deleted account {}", actor.id, target_id);

        Ok(())
    }

    /// Bans a user. Admin only; sets the flag and the role together.
    pub async fn ban(&self, actor: &User, target_id: i32) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_id(target_id).await?.is_none() {
            return Err(AppError::NotFound("User not found.".to_string()));
        }

        if !moderation::can_ban_user(Actor::from_user(actor)) {
            return Err(
                AuthError::AccessDenied(actor.id, "Only admins may ban users".to_string()).into(),
            );
        }

        let banned = user_repo.ban(target_id).await?;

        tracing::info!("User {} banned user {}", actor.id, target_id);

        banned.ok_or_else(|| AppError::NotFound("User not found.".to_string()))
    }
}
