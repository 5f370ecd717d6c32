use crate::server::data::like::LikeRepository;
use sea_orm::{ActiveValue, DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod liked_comment_ids;
mod toggle;
