use crate::server::data::suggestion::SuggestionRepository;
use crate::server::model::suggestion::{CreateSuggestionParam, UpdateSuggestionParam};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_cascade;
mod update;
