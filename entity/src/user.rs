use sea_orm::entity::prelude::*;

/// Role assigned to a user account.
///
/// Stored as a short string in the database. `Banned` is both a role and a
/// flag on the user row; the ban operation sets the two together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Role {
    #[sea_orm(string_value = "admin")]
    Admin,
    #[sea_orm(string_value = "moderator")]
    Moderator,
    #[sea_orm(string_value = "writer")]
    Writer,
    #[sea_orm(string_value = "reader")]
    Reader,
    #[sea_orm(string_value = "banned")]
    Banned,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub discord_id: String,
    #[sea_orm(unique)]
    pub discord_username: String,
    #[sea_orm(unique)]
    pub discord_email: String,
    pub discord_avatar: Option<String>,
    #[sea_orm(unique)]
    pub display_name: Option<String>,
    pub biography: String,
    pub role: Role,
    pub banned: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::article::Entity")]
    Article,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
    #[sea_orm(has_many = "super::like::Entity")]
    Like,
    #[sea_orm(has_many = "super::news_suggestion::Entity")]
    NewsSuggestion,
}

impl Related<super::article::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Article.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Like.def()
    }
}

impl Related<super::news_suggestion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NewsSuggestion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
