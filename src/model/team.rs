use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{center::CenterDto, player::PlayerSummaryDto};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TeamDto {
    pub id: i32,
    pub name: String,
    pub group: Option<String>,
    pub center: Option<CenterDto>,
    pub players: Vec<PlayerSummaryDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TeamListDto {
    pub success: bool,
    pub message: String,
    pub teams: Vec<TeamDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TeamItemDto {
    pub success: bool,
    pub message: String,
    pub team: TeamDto,
}

/// Roster entry accepted when creating a team.
///
/// The optional `cycle` carries a cycle name; the backend resolves it to a
/// study record.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateTeamPlayerDto {
    pub first_name: String,
    pub first_surname: String,
    pub second_surname: Option<String>,
    pub kind: String,
    pub national_id: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub cycle: Option<String>,
}

/// Team creation payload. `center` carries a center name, not an id.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateTeamDto {
    pub name: String,
    pub group: Option<String>,
    pub center: String,
    #[serde(default)]
    pub players: Vec<CreateTeamPlayerDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateTeamDto {
    pub name: String,
    pub group: Option<String>,
}
