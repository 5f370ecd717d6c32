use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    controller::auth::SESSION_AUTH_USER_ID,
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
};

use entity::user::Role;

/// Role-based permission checked by the guard on top of being logged in.
pub enum Permission {
    /// Satisfied by moderators and admins.
    Moderator,
    /// Satisfied by admins only.
    Admin,
}

/// Session-based authentication guard used at the top of handlers.
///
/// Resolves the session's user id to a domain user and checks the requested
/// permissions against the user's effective role. A banned account carries
/// `Role::Banned` and can never satisfy a permission.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires a logged-in user holding all listed permissions.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::NotLoggedIn)` - No user id in the session
    /// - `Err(AuthError::UserNotInDatabase)` - Session user no longer exists
    /// - `Err(AuthError::AccessDenied)` - A permission check failed
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = self.session.get::<i32>(SESSION_AUTH_USER_ID).await? else {
            return Err(AuthError::NotLoggedIn.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Moderator => {
                    if !matches!(user.role, Role::Moderator | Role::Admin) {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "Moderator permission required".to_string(),
                        )
                        .into());
                    }
                }
                Permission::Admin => {
                    if !matches!(user.role, Role::Admin) {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "Admin permission required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// Resolves the current user if one is logged in.
    ///
    /// Used by read endpoints that behave differently for logged-in viewers
    /// (like annotation on comment forests) but are open to everyone. A
    /// stale session id simply reads as no user.
    pub async fn optional(&self) -> Result<Option<User>, AppError> {
        let Some(user_id) = self.session.get::<i32>(SESSION_AUTH_USER_ID).await? else {
            return Ok(None);
        };

        Ok(UserRepository::new(self.db).find_by_id(user_id).await?)
    }
}
