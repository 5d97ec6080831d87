use test_utils::builder::TestBuilder;
use test_utils::factory::helpers::create_study_with_dependencies;
use test_utils::factory::{create_center, create_cycle, create_study};

use crate::server::error::AppError;
use crate::server::model::study::CreateStudyParams;
use crate::server::service::study::StudyService;
