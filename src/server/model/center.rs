use crate::model::CenterDto;

/// A training center teams belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Center {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
}

impl Center {
    pub fn from_entity(entity: entity::center::Model) -> Self {
        Center {
            id: entity.id,
            name: entity.name,
            address: entity.address,
        }
    }

    pub fn into_dto(self) -> CenterDto {
        CenterDto {
            id: self.id,
            name: self.name,
            address: self.address,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCenterParams {
    pub name: String,
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCenterParams {
    pub name: Option<String>,
    pub address: Option<String>,
}
