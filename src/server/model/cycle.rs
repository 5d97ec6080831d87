use crate::model::CycleDto;

/// An academic cycle studies are grouped under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    pub id: i32,
    pub name: String,
}

impl Cycle {
    pub fn from_entity(entity: entity::cycle::Model) -> Self {
        Cycle {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> CycleDto {
        CycleDto {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCycleParams {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCycleParams {
    pub name: Option<String>,
}
