use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::helpers::create_study_with_dependencies;
use test_utils::factory::{create_center, create_cycle, create_study};

use crate::server::data::study::StudyRepository;
use crate::server::model::study::{CreateStudyParams, UpdateStudyParams};

mod find_first_by_cycle;
mod get_by_id_with_relations;
