use crate::server::data::comment::CommentRepository;
use crate::server::model::comment::CreateCommentParam;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_tree;
mod find_by_article;
mod update_body;
