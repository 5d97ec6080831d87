use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::create_center;

use crate::server::data::center::CenterRepository;
use crate::server::model::center::{CreateCenterParams, UpdateCenterParams};

mod delete;
mod find_by_name;
mod get_all;
mod update;
