//! Center data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::center::{Center, CreateCenterParams, UpdateCenterParams};

/// Repository providing database operations for training centers.
pub struct CenterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CenterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new center.
    ///
    /// # Arguments
    /// - `param` - Name and optional address of the center
    ///
    /// # Returns
    /// - `Ok(Center)` - The created center
    /// - `Err(DbErr)` - Database error during insert, e.g. a duplicate name
    pub async fn create(&self, param: CreateCenterParams) -> Result<Center, DbErr> {
        let entity = entity::center::ActiveModel {
            name: ActiveValue::Set(param.name),
            address: ActiveValue::Set(param.address),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Center::from_entity(entity))
    }

    /// Gets all centers ordered alphabetically by name.
    ///
    /// # Returns
    /// - `Ok(Vec<Center>)` - All centers, empty when none exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Center>, DbErr> {
        let entities = entity::prelude::Center::find()
            .order_by_asc(entity::center::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Center::from_entity).collect())
    }

    /// Gets a center by its id.
    ///
    /// # Returns
    /// - `Ok(Some(Center))` - Center found
    /// - `Ok(None)` - No center with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, center_id: i32) -> Result<Option<Center>, DbErr> {
        let entity = entity::prelude::Center::find_by_id(center_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Center::from_entity))
    }

    /// Finds a center by its exact name.
    ///
    /// Used when requests reference a center by name instead of id, e.g. when
    /// creating a team.
    ///
    /// # Returns
    /// - `Ok(Some(Center))` - Center found
    /// - `Ok(None)` - No center with that name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Center>, DbErr> {
        let entity = entity::prelude::Center::find()
            .filter(entity::center::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Center::from_entity))
    }

    /// Updates a center, leaving `None` fields untouched.
    ///
    /// # Arguments
    /// - `center_id` - Id of the center to update
    /// - `param` - New values for the fields to change
    ///
    /// # Returns
    /// - `Ok(Some(Center))` - The updated center
    /// - `Ok(None)` - No center with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        center_id: i32,
        param: UpdateCenterParams,
    ) -> Result<Option<Center>, DbErr> {
        let entity = match entity::prelude::Center::find_by_id(center_id)
            .one(self.db)
            .await?
        {
            Some(entity) => entity,
            None => return Ok(None),
        };

        let mut active: entity::center::ActiveModel = entity.into();

        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(address) = param.address {
            active.address = ActiveValue::Set(Some(address));
        }

        let updated = active.update(self.db).await?;

        Ok(Some(Center::from_entity(updated)))
    }

    /// Deletes a center.
    ///
    /// # Returns
    /// - `Ok(true)` - Center deleted
    /// - `Ok(false)` - No center with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, center_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Center::delete_by_id(center_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
