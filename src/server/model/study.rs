use crate::model::StudyDto;
use crate::server::model::center::Center;
use crate::server::model::cycle::Cycle;

/// A course taught at a center during a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Study {
    pub id: i32,
    pub center_id: i32,
    pub cycle_id: i32,
    /// Course label within the cycle, e.g. "1" or "2".
    pub course: String,
}

impl Study {
    pub fn from_entity(entity: entity::study::Model) -> Self {
        Study {
            id: entity.id,
            center_id: entity.center_id,
            cycle_id: entity.cycle_id,
            course: entity.course,
        }
    }
}

/// A study together with the center & cycle rows it references, as rendered
/// in responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyWithRelations {
    pub study: Study,
    pub center: Center,
    pub cycle: Cycle,
}

impl StudyWithRelations {
    pub fn into_dto(self) -> StudyDto {
        StudyDto {
            id: self.study.id,
            center: self.center.into_dto(),
            course: self.study.course,
            cycle: self.cycle.into_dto(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateStudyParams {
    pub center_id: i32,
    pub cycle_id: i32,
    pub course: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStudyParams {
    pub center_id: Option<i32>,
    pub cycle_id: Option<i32>,
    pub course: Option<String>,
}
