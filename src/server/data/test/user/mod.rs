use crate::server::data::user::UserRepository;
use crate::server::model::user::{UpdateProfileParam, UpsertUserParam};
use entity::user::Role;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod ban;
mod delete_cascade;
mod update_profile;
mod upsert_discord;
