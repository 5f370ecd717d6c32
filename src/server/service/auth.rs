//! Discord OAuth2 authentication.
//!
//! Orchestrates the authorization-code flow: building the consent URL with
//! a CSRF token, exchanging the callback code for an access token, fetching
//! the user's identity from the Discord API, and upserting the local user
//! record.

use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use url::Url;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{UpsertUserParam, User},
    state::OAuth2Client,
};

/// The fields of Discord's `/users/@me` response the application uses.
#[derive(Debug, Deserialize)]
pub struct DiscordUser {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub avatar: Option<String>,
}

pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
        }
    }

    /// Generates the Discord consent URL with a fresh CSRF token.
    ///
    /// The token goes into the session and is compared against the `state`
    /// parameter when the callback arrives.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .url();

        (authorize_url, csrf_state)
    }

    /// Exchanges the callback's authorization code and logs the user in.
    ///
    /// # Returns
    /// - `Ok(User)` - The upserted local user
    /// - `Err(AppError::AuthErr)` - The code exchange with Discord failed
    /// - `Err(AppError::ReqwestErr)` - Fetching the Discord profile failed
    /// - `Err(AppError::DbErr)` - Database error during the upsert
    pub async fn callback(&self, authorization_code: String) -> Result<User, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchangeFailed(e.to_string()))?;

        let discord_user = self.fetch_discord_user(&token).await?;

        let user = UserRepository::new(self.db)
            .upsert_discord(UpsertUserParam {
                discord_id: discord_user.id,
                discord_username: discord_user.username,
                discord_email: discord_user.email.unwrap_or_default(),
                discord_avatar: discord_user.avatar,
            })
            .await?;

        tracing::info!("User {} logged in via Discord", user.discord_username);

        Ok(user)
    }

    /// Fetches the authenticated user's profile from Discord's `@me`
    /// endpoint.
    async fn fetch_discord_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<DiscordUser, AppError> {
        let access_token = token.access_token().secret();

        let user_info = self
            .http_client
            .get("https://discord.com/api/users/@me")
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .json::<DiscordUser>()
            .await?;

        Ok(user_info)
    }
}
