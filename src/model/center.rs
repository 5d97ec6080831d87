use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CenterDto {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CenterListDto {
    pub success: bool,
    pub message: String,
    pub centers: Vec<CenterDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CenterItemDto {
    pub success: bool,
    pub message: String,
    pub center: CenterDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateCenterDto {
    pub name: String,
    pub address: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateCenterDto {
    pub name: String,
    pub address: Option<String>,
}
