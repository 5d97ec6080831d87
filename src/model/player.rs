use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::study::StudyDto;

/// Summary form used when a player is nested inside a team.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlayerSummaryDto {
    pub id: i32,
    pub first_name: String,
    pub first_surname: String,
    pub second_surname: Option<String>,
    pub kind: String,
}

/// Full form returned by the player detail endpoint.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlayerDetailDto {
    pub id: i32,
    pub first_name: String,
    pub first_surname: String,
    pub second_surname: Option<String>,
    pub kind: String,
    pub national_id: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub team_id: i32,
    pub study: Option<StudyDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlayerListDto {
    pub success: bool,
    pub message: String,
    pub players: Vec<PlayerDetailDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlayerItemDto {
    pub success: bool,
    pub message: String,
    pub player: PlayerDetailDto,
}

/// Player creation payload. `team` carries a team name and `cycle` an optional
/// cycle name; both are resolved server-side.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreatePlayerDto {
    pub team: String,
    pub first_name: String,
    pub first_surname: String,
    pub second_surname: Option<String>,
    pub kind: String,
    pub national_id: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub cycle: Option<String>,
}

/// Partial update payload. Absent fields are left untouched; `team` and
/// `cycle` carry names to re-resolve.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdatePlayerDto {
    pub first_name: Option<String>,
    pub first_surname: Option<String>,
    pub second_surname: Option<String>,
    pub kind: Option<String>,
    pub national_id: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub team: Option<String>,
    pub cycle: Option<String>,
}
