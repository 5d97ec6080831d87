use sea_orm::DbErr;

use crate::model::EnrollmentDto;

/// Review state of a team's enrollment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentStatus {
    Pending,
    Approved,
    Rejected,
}

impl EnrollmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnrollmentStatus::Pending => "pending",
            EnrollmentStatus::Approved => "approved",
            EnrollmentStatus::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(EnrollmentStatus::Pending),
            "approved" => Some(EnrollmentStatus::Approved),
            "rejected" => Some(EnrollmentStatus::Rejected),
            _ => None,
        }
    }
}

/// A team's enrollment into the league. Each team has at most one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub id: i32,
    pub team_id: i32,
    pub status: EnrollmentStatus,
}

impl Enrollment {
    pub fn from_entity(entity: entity::enrollment::Model) -> Result<Self, DbErr> {
        let status = EnrollmentStatus::parse(&entity.status).ok_or_else(|| {
            DbErr::Custom(format!(
                "Failed to parse status '{}' for enrollment {}",
                entity.status, entity.id
            ))
        })?;

        Ok(Enrollment {
            id: entity.id,
            team_id: entity.team_id,
            status,
        })
    }

    pub fn into_dto(self) -> EnrollmentDto {
        EnrollmentDto {
            id: self.id,
            team_id: self.team_id,
            status: self.status.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateEnrollmentParams {
    pub team_id: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateEnrollmentParams {
    pub status: EnrollmentStatus,
}
