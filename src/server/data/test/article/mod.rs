use crate::server::data::article::ArticleRepository;
use crate::server::model::article::{CreateArticleParam, UpdateArticleParam};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_cascade;
mod get_paginated;
mod update;
