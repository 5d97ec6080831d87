use sea_orm::DbErr;

use crate::model::{PlayerDetailDto, PlayerSummaryDto};
use crate::server::model::study::StudyWithRelations;

/// Role a player fills on the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Player,
    Captain,
    Coach,
}

impl PlayerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerKind::Player => "player",
            PlayerKind::Captain => "captain",
            PlayerKind::Coach => "coach",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "player" => Some(PlayerKind::Player),
            "captain" => Some(PlayerKind::Captain),
            "coach" => Some(PlayerKind::Coach),
            _ => None,
        }
    }
}

/// A person on a team roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: i32,
    pub first_name: String,
    pub first_surname: String,
    pub second_surname: Option<String>,
    pub kind: PlayerKind,
    pub national_id: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub team_id: i32,
    pub study_id: Option<i32>,
}

impl Player {
    pub fn from_entity(entity: entity::player::Model) -> Result<Self, DbErr> {
        let kind = PlayerKind::parse(&entity.kind).ok_or_else(|| {
            DbErr::Custom(format!(
                "Failed to parse kind '{}' for player {}",
                entity.kind, entity.id
            ))
        })?;

        Ok(Player {
            id: entity.id,
            first_name: entity.first_name,
            first_surname: entity.first_surname,
            second_surname: entity.second_surname,
            kind,
            national_id: entity.national_id,
            email: entity.email,
            phone: entity.phone,
            team_id: entity.team_id,
            study_id: entity.study_id,
        })
    }

    /// The short form embedded in team responses.
    pub fn into_summary_dto(self) -> PlayerSummaryDto {
        PlayerSummaryDto {
            id: self.id,
            first_name: self.first_name,
            first_surname: self.first_surname,
            second_surname: self.second_surname,
            kind: self.kind.as_str().to_string(),
        }
    }
}

/// A player together with the study their cycle resolved to, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerWithStudy {
    pub player: Player,
    pub study: Option<StudyWithRelations>,
}

impl PlayerWithStudy {
    pub fn into_dto(self) -> PlayerDetailDto {
        PlayerDetailDto {
            id: self.player.id,
            first_name: self.player.first_name,
            first_surname: self.player.first_surname,
            second_surname: self.player.second_surname,
            kind: self.player.kind.as_str().to_string(),
            national_id: self.player.national_id,
            email: self.player.email,
            phone: self.player.phone,
            team_id: self.player.team_id,
            study: self.study.map(StudyWithRelations::into_dto),
        }
    }
}

/// A player create request as the client sends it.
///
/// The owning team is referenced by name and the study by cycle name, both
/// resolved by the service before the row is inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePlayerParams {
    pub team: String,
    pub first_name: String,
    pub first_surname: String,
    pub second_surname: Option<String>,
    pub kind: PlayerKind,
    pub national_id: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub cycle: Option<String>,
}

/// A player update request as the client sends it.
///
/// Fields left as `None` keep their current value. A team name moves the
/// player, a cycle name re-resolves their study.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePlayerParams {
    pub first_name: Option<String>,
    pub first_surname: Option<String>,
    pub second_surname: Option<String>,
    pub kind: Option<PlayerKind>,
    pub national_id: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub team: Option<String>,
    pub cycle: Option<String>,
}

/// A fully resolved player row ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlayerParams {
    pub first_name: String,
    pub first_surname: String,
    pub second_surname: Option<String>,
    pub kind: PlayerKind,
    pub national_id: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub team_id: i32,
    pub study_id: Option<i32>,
}

/// Resolved column changes applied by the repository, `None` fields keep
/// their current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePlayerFields {
    pub first_name: Option<String>,
    pub first_surname: Option<String>,
    pub second_surname: Option<String>,
    pub kind: Option<PlayerKind>,
    pub national_id: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub team_id: Option<i32>,
    pub study_id: Option<i32>,
}
