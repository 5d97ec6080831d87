use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::helpers::create_team_with_dependencies;
use test_utils::factory::{create_approved_enrollment, create_center, create_enrollment, create_team};

use crate::server::data::enrollment::EnrollmentRepository;
use crate::server::model::enrollment::EnrollmentStatus;

mod approved_team_ids;
mod update_status;
