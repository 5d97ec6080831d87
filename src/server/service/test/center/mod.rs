use test_utils::builder::TestBuilder;
use test_utils::factory::create_center;

use crate::server::error::AppError;
use crate::server::model::center::{CreateCenterParams, UpdateCenterParams};
use crate::server::service::center::CenterService;

mod update_center;
