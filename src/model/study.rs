use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{center::CenterDto, cycle::CycleDto};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StudyDto {
    pub id: i32,
    pub center: CenterDto,
    pub course: String,
    pub cycle: CycleDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StudyListDto {
    pub success: bool,
    pub message: String,
    pub studies: Vec<StudyDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StudyItemDto {
    pub success: bool,
    pub message: String,
    pub study: StudyDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateStudyDto {
    pub center_id: i32,
    pub cycle_id: i32,
    pub course: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateStudyDto {
    pub center_id: Option<i32>,
    pub cycle_id: Option<i32>,
    pub course: Option<String>,
}
