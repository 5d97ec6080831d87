use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EnrollmentDto {
    pub id: i32,
    pub team_id: i32,
    pub status: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EnrollmentListDto {
    pub success: bool,
    pub message: String,
    pub enrollments: Vec<EnrollmentDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EnrollmentItemDto {
    pub success: bool,
    pub message: String,
    pub enrollment: EnrollmentDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateEnrollmentDto {
    pub team_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateEnrollmentDto {
    pub status: String,
}
