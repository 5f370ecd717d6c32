//! SeaORM entity definitions for the solnews database schema.

pub mod article;
pub mod comment;
pub mod like;
pub mod news_suggestion;
pub mod user;

pub mod prelude {
    pub use super::article::Entity as Article;
    pub use super::comment::Entity as Comment;
    pub use super::like::Entity as Like;
    pub use super::news_suggestion::Entity as NewsSuggestion;
    pub use super::user::Entity as User;
}
