//! User domain model and parameter types.

use chrono::{DateTime, Utc};
use entity::user::Role;
use sea_orm::ActiveEnum;

use crate::model::user::{UserDto, UserProfileDto};

/// Application user identified through Discord OAuth.
///
/// `role` is the effective role: a banned account always carries
/// `Role::Banned` here, no matter what the stored role column says.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub discord_id: String,
    pub discord_username: String,
    pub discord_email: String,
    pub discord_avatar: Option<String>,
    /// Chosen display name; falls back to the Discord username when unset.
    pub display_name: Option<String>,
    pub biography: String,
    pub role: Role,
    pub banned: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// The banned flag overrides the stored role so stale role values can
    /// never grant a banned account any capability.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let role = if entity.banned {
            Role::Banned
        } else {
            entity.role
        };

        Self {
            id: entity.id,
            discord_id: entity.discord_id,
            discord_username: entity.discord_username,
            discord_email: entity.discord_email,
            discord_avatar: entity.discord_avatar,
            display_name: entity.display_name,
            biography: entity.biography,
            role,
            banned: entity.banned,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Name shown to other users.
    pub fn username(&self) -> &str {
        self.display_name
            .as_deref()
            .unwrap_or(&self.discord_username)
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username().to_string(),
            avatar: self.discord_avatar,
            role: self.role.to_value(),
        }
    }

    /// Converts to the full profile DTO with authored-content counts.
    pub fn into_profile_dto(self, article_count: u64, comment_count: u64) -> UserProfileDto {
        UserProfileDto {
            id: self.id,
            username: self.username().to_string(),
            discord_username: self.discord_username,
            avatar: self.discord_avatar,
            biography: self.biography,
            role: self.role.to_value(),
            banned: self.banned,
            article_count,
            comment_count,
            created_at: self.created_at,
        }
    }
}

/// Parameters for upserting a user after a successful Discord login.
///
/// Matched on `discord_id`; the Discord profile fields are refreshed on every
/// login while the locally chosen display name, biography, and role are left
/// untouched.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub discord_id: String,
    pub discord_username: String,
    pub discord_email: String,
    pub discord_avatar: Option<String>,
}

/// Parameters for a user editing their own profile.
///
/// `None` fields keep their current value.
#[derive(Debug, Clone)]
pub struct UpdateProfileParam {
    pub display_name: Option<String>,
    pub biography: Option<String>,
}
