//! Axum route configuration and API documentation.

use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{article, auth, comment, home, suggestion, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login,
        auth::callback,
        auth::logout,
        auth::get_user,
        home::get_home,
        article::create_article,
        article::get_articles,
        article::get_article,
        article::update_article,
        article::delete_article,
        comment::create_comment,
        comment::update_comment,
        comment::delete_comment,
        comment::toggle_like,
        suggestion::create_suggestion,
        suggestion::get_suggestions,
        suggestion::get_suggestion,
        suggestion::update_suggestion,
        suggestion::delete_suggestion,
        user::get_users,
        user::get_user_profile,
        user::update_user,
        user::delete_user,
        user::ban_user,
    ),
    info(
        title = "solnews API",
        description = "News publishing and discussion backend with Discord login."
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", get(auth::login))
        .route("/api/auth/callback", get(auth::callback))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/home", get(home::get_home))
        .route(
            "/api/articles",
            get(article::get_articles).post(article::create_article),
        )
        .route(
            "/api/articles/{id}",
            get(article::get_article)
                .put(article::update_article)
                .delete(article::delete_article),
        )
        .route("/api/articles/{id}/comments", post(comment::create_comment))
        .route(
            "/api/articles/{id}/comments/{cid}",
            put(comment::update_comment).delete(comment::delete_comment),
        )
        .route(
            "/api/articles/{id}/comments/{cid}/likes",
            post(comment::toggle_like),
        )
        .route(
            "/api/suggestions",
            get(suggestion::get_suggestions).post(suggestion::create_suggestion),
        )
        .route(
            "/api/suggestions/{id}",
            get(suggestion::get_suggestion)
                .put(suggestion::update_suggestion)
                .delete(suggestion::delete_suggestion),
        )
        .route("/api/users", get(user::get_users))
        .route(
            "/api/users/{id}",
            get(user::get_user_profile)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route("/api/users/{id}/ban", post(user::ban_user))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
