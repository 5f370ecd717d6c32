//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::user::Role;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// Defaults produce a unique reader account per call:
/// - discord_id / discord_username / discord_email derived from a counter
/// - display_name: `Some("User {id}")`
/// - role: `Role::Reader`, not banned
///
/// ```rust,ignore
/// let moderator = UserFactory::new(&db).role(Role::Moderator).build().await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    discord_id: String,
    discord_username: String,
    discord_email: String,
    display_name: Option<String>,
    biography: String,
    role: Role,
    banned: bool,
}

impl<'a> UserFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            discord_id: id.to_string(),
            discord_username: format!("discord_user_{}", id),
            discord_email: format!("user{}@example.com", id),
            display_name: Some(format!("User {}", id)),
            biography: String::new(),
            role: Role::Reader,
            banned: false,
        }
    }

    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = discord_id.into();
        self
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Clears the display name, leaving only the Discord identity.
    pub fn without_display_name(mut self) -> Self {
        self.display_name = None;
        self
    }

    pub fn biography(mut self, biography: impl Into<String>) -> Self {
        self.biography = biography.into();
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn banned(mut self, banned: bool) -> Self {
        self.banned = banned;
        self
    }

    /// Builds and inserts the user entity into the database.
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            discord_id: ActiveValue::Set(self.discord_id),
            discord_username: ActiveValue::Set(self.discord_username),
            discord_email: ActiveValue::Set(self.discord_email),
            discord_avatar: ActiveValue::Set(Some("avatar-hash".to_string())),
            display_name: ActiveValue::Set(self.display_name),
            biography: ActiveValue::Set(self.biography),
            role: ActiveValue::Set(self.role),
            banned: ActiveValue::Set(self.banned),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reader user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with a specific role.
pub async fn create_user_with_role(
    db: &DatabaseConnection,
    role: Role,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role(role).build().await
}
