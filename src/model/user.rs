use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public identity attached to articles, comments, and suggestions.
///
/// `username` is the chosen display name when one is set, otherwise the
/// Discord username.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub avatar: Option<String>,
    pub role: String,
}

/// Full profile returned by the user endpoints.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserProfileDto {
    pub id: i32,
    pub username: String,
    pub discord_username: String,
    pub avatar: Option<String>,
    pub biography: String,
    pub role: String,
    pub banned: bool,
    pub article_count: u64,
    pub comment_count: u64,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

/// Profile fields a user may change about themselves. Fields left as `None`
/// keep their current value.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateUserDto {
    pub display_name: Option<String>,
    pub biography: Option<String>,
}
