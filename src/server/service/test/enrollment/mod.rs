use test_utils::builder::TestBuilder;
use test_utils::factory::helpers::create_team_with_dependencies;
use test_utils::factory::create_enrollment;

use crate::server::error::AppError;
use crate::server::model::enrollment::{
    CreateEnrollmentParams, EnrollmentStatus, UpdateEnrollmentParams,
};
use crate::server::service::enrollment::EnrollmentService;

mod update_enrollment;
