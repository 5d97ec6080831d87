use crate::model::TeamDto;
use crate::server::model::center::Center;
use crate::server::model::player::{Player, PlayerKind};

/// Largest roster a team may carry. Create attempts beyond the cap revoke
/// the caller's player creation permission and answer with a conflict.
pub const ROSTER_CAP: u64 = 12;

/// A team registered at a center.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: i32,
    pub name: String,
    /// Optional bracket or division label.
    pub group: Option<String>,
    pub center_id: i32,
}

impl Team {
    pub fn from_entity(entity: entity::team::Model) -> Self {
        Team {
            id: entity.id,
            name: entity.name,
            group: entity.group,
            center_id: entity.center_id,
        }
    }
}

/// A team with its center and roster, as rendered in responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamWithRelations {
    pub team: Team,
    pub center: Option<Center>,
    pub players: Vec<Player>,
}

impl TeamWithRelations {
    pub fn into_dto(self) -> TeamDto {
        TeamDto {
            id: self.team.id,
            name: self.team.name,
            group: self.team.group,
            center: self.center.map(Center::into_dto),
            players: self
                .players
                .into_iter()
                .map(Player::into_summary_dto)
                .collect(),
        }
    }
}

/// A team create request as the client sends it.
///
/// The center is referenced by name and resolved by the service. The inline
/// roster may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTeamParams {
    pub name: String,
    pub group: Option<String>,
    pub center: String,
    pub players: Vec<CreateTeamPlayerParams>,
}

/// A roster entry created together with its team.
///
/// Unlike a standalone player create there is no team reference, the entry
/// always lands on the team being created. The optional cycle name resolves
/// to a study.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTeamPlayerParams {
    pub first_name: String,
    pub first_surname: String,
    pub second_surname: Option<String>,
    pub kind: PlayerKind,
    pub national_id: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub cycle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTeamParams {
    pub name: Option<String>,
    pub group: Option<String>,
}
