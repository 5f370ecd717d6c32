use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id found in the session.
    ///
    /// The request carries no valid login session. Results in a
    /// 401 Unauthorized response.
    #[error("No authenticated user in session")]
    NotLoggedIn,

    /// The session references a user that no longer exists.
    ///
    /// Happens when an account was deleted while its session was still
    /// alive. Results in a 404 Not Found response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The user is authenticated but lacks permission for the operation.
    ///
    /// Results in a 403 Forbidden response. The detail string is logged,
    /// not returned to the client.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// CSRF state validation failed during the OAuth callback.
    ///
    /// The state token in the callback URL does not match the token stored
    /// in the session. Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// The authorization code exchange with Discord failed.
    ///
    /// Results in a 500 Internal Server Error with a generic message.
    #[error("Discord token exchange failed: {0}")]
    TokenExchangeFailed(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotLoggedIn => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "You must be logged in to do that.".to_string(),
                }),
            )
                .into_response(),
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!("Session user {} not found in database", user_id);
                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "User not found.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::AccessDenied(user_id, detail) => {
                tracing::debug!("Access denied for user {}: {}", user_id, detail);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You are not allowed to do that.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "There was an issue logging you in, please try again.".to_string(),
                }),
            )
                .into_response(),
            Self::TokenExchangeFailed(detail) => {
                tracing::error!("Discord token exchange failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "There was an issue logging you in, please try again.".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
